use crate::error::EngineError;
use crate::types::{Line, Mark};

pub const CELL_COUNT: usize = 9;

/// Rows, then columns, then diagonals. Evaluation scans in this order.
pub const LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// 3x3 board in row-major order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    pub fn from_marks(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn mark_at(&self, index: usize) -> Mark {
        self.cells[index]
    }

    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), EngineError> {
        if index >= CELL_COUNT {
            return Err(EngineError::OutOfRange { index });
        }
        if self.cells[index] != Mark::Empty {
            return Err(EngineError::CellOccupied { index });
        }
        self.cells[index] = mark;
        Ok(())
    }

    pub fn available_moves(&self) -> Vec<usize> {
        let mut moves = Vec::new();
        for (index, &cell) in self.cells.iter().enumerate() {
            if cell == Mark::Empty {
                moves.push(index);
            }
        }
        moves
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    /// Places `mark` at an empty `index`, runs `f`, and restores the cell
    /// before returning. The restore is unconditional, so search code never
    /// leaks a hypothetical move into the caller's view of the board.
    pub fn probe<T>(&mut self, index: usize, mark: Mark, f: impl FnOnce(&mut Board) -> T) -> T {
        debug_assert_eq!(self.cells[index], Mark::Empty);
        self.cells[index] = mark;
        let result = f(self);
        self.cells[index] = Mark::Empty;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_on_occupied_cell_fails() {
        let mut board = Board::new();
        board.place(4, Mark::X).unwrap();
        assert_eq!(
            board.place(4, Mark::O),
            Err(EngineError::CellOccupied { index: 4 })
        );
        assert_eq!(board.mark_at(4), Mark::X);
    }

    #[test]
    fn test_place_out_of_range_fails() {
        let mut board = Board::new();
        assert_eq!(
            board.place(9, Mark::X),
            Err(EngineError::OutOfRange { index: 9 })
        );
    }

    #[test]
    fn test_available_moves_in_index_order() {
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();
        board.place(4, Mark::O).unwrap();
        assert_eq!(board.available_moves(), vec![1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_probe_restores_cell() {
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();
        let before = board;
        let seen = board.probe(5, Mark::O, |b| b.mark_at(5));
        assert_eq!(seen, Mark::O);
        assert_eq!(board, before);
    }
}
