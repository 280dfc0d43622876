use crate::board::Board;
use crate::error::EngineError;
use crate::types::{GameStatus, Line, Mark, Outcome};
use crate::win_detector::evaluate;

/// One game of human against the bot. Owns the board and the turn order;
/// both sides place through `place_mark`.
#[derive(Debug)]
pub struct GameState {
    pub board: Board,
    pub player_mark: Mark,
    pub bot_mark: Mark,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub winning_line: Option<Line>,
}

impl GameState {
    pub fn new(player_mark: Mark, player_starts: bool) -> Self {
        let bot_mark = player_mark
            .opponent()
            .expect("player mark must be X or O");
        let current_mark = if player_starts { player_mark } else { bot_mark };

        Self {
            board: Board::new(),
            player_mark,
            bot_mark,
            current_mark,
            status: GameStatus::InProgress,
            winning_line: None,
        }
    }

    pub fn place_mark(&mut self, index: usize) -> Result<(), EngineError> {
        if self.status != GameStatus::InProgress {
            return Err(EngineError::GameOver);
        }

        self.board.place(index, self.current_mark)?;
        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    pub fn is_bot_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.current_mark == self.bot_mark
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            _ => None,
        }
    }

    fn switch_turn(&mut self) {
        if self.current_mark == self.player_mark {
            self.current_mark = self.bot_mark;
        } else {
            self.current_mark = self.player_mark;
        }
    }

    fn check_game_over(&mut self) {
        match evaluate(&self.board) {
            Outcome::Win { mark, line } => {
                self.status = match mark {
                    Mark::X => GameStatus::XWon,
                    Mark::O => GameStatus::OWon,
                    Mark::Empty => unreachable!(),
                };
                self.winning_line = Some(line);
            }
            Outcome::Draw => self.status = GameStatus::Draw,
            Outcome::InProgress => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_alternate() {
        let mut state = GameState::new(Mark::X, true);
        assert_eq!(state.current_mark, Mark::X);
        state.place_mark(0).unwrap();
        assert_eq!(state.current_mark, Mark::O);
        assert!(state.is_bot_turn());
        state.place_mark(4).unwrap();
        assert_eq!(state.current_mark, Mark::X);
    }

    #[test]
    fn test_occupied_cell_is_rejected() {
        let mut state = GameState::new(Mark::X, true);
        state.place_mark(0).unwrap();
        assert_eq!(
            state.place_mark(0),
            Err(EngineError::CellOccupied { index: 0 })
        );
        // A failed move does not consume the turn.
        assert_eq!(state.current_mark, Mark::O);
    }

    #[test]
    fn test_win_sets_status_and_line() {
        let mut state = GameState::new(Mark::X, true);
        for index in [0, 3, 1, 4, 2] {
            state.place_mark(index).unwrap();
        }
        assert_eq!(state.status, GameStatus::XWon);
        assert_eq!(state.winner(), Some(Mark::X));
        assert_eq!(state.winning_line, Some([0, 1, 2]));
        assert!(!state.is_bot_turn());
    }

    #[test]
    fn test_moves_after_game_over_are_rejected() {
        let mut state = GameState::new(Mark::X, true);
        for index in [0, 3, 1, 4, 2] {
            state.place_mark(index).unwrap();
        }
        assert_eq!(state.place_mark(5), Err(EngineError::GameOver));
    }

    #[test]
    fn test_bot_can_start() {
        let state = GameState::new(Mark::X, false);
        assert_eq!(state.bot_mark, Mark::O);
        assert!(state.is_bot_turn());
    }
}
