use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    #[error("cell {index} is already marked")]
    CellOccupied { index: usize },

    #[error("cell index {index} is out of range (expected 0..9)")]
    OutOfRange { index: usize },

    #[error("no available moves: board is full")]
    NoAvailableMoves,

    #[error("game is already over")]
    GameOver,
}
