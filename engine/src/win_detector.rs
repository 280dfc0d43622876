use crate::board::{Board, LINES};
use crate::types::{Mark, Outcome};

/// Scans all 8 lines in the fixed rows/columns/diagonals order and reports
/// the first completed one, so the caller knows which cells to highlight.
pub fn evaluate(board: &Board) -> Outcome {
    for line in LINES {
        let mark = board.mark_at(line[0]);
        if mark != Mark::Empty && mark == board.mark_at(line[1]) && mark == board.mark_at(line[2]) {
            return Outcome::Win { mark, line };
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use Mark::{Empty as E, O, X};

    #[test]
    fn test_detects_row_win_with_line() {
        let board = Board::from_marks([X, X, X, O, O, E, E, E, E]);
        assert_eq!(
            evaluate(&board),
            Outcome::Win {
                mark: X,
                line: [0, 1, 2]
            }
        );
    }

    #[test]
    fn test_detects_column_win() {
        let board = Board::from_marks([O, X, E, O, X, E, O, E, X]);
        assert_eq!(
            evaluate(&board),
            Outcome::Win {
                mark: O,
                line: [0, 3, 6]
            }
        );
    }

    #[test]
    fn test_detects_diagonal_win() {
        let board = Board::from_marks([X, O, E, O, X, E, E, E, X]);
        assert_eq!(
            evaluate(&board),
            Outcome::Win {
                mark: X,
                line: [0, 4, 8]
            }
        );
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = Board::from_marks([X, X, O, X, O, E, O, E, E]);
        assert_eq!(
            evaluate(&board),
            Outcome::Win {
                mark: O,
                line: [2, 4, 6]
            }
        );
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_marks([X, O, X, X, O, O, O, X, X]);
        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn test_open_board_is_in_progress() {
        let board = Board::from_marks([X, O, E, E, E, E, E, E, E]);
        assert_eq!(evaluate(&board), Outcome::InProgress);
    }

    #[test]
    fn test_single_winner_on_double_line() {
        // X completes both the first row and the first column; the scan
        // order makes the row the reported line, and only one winner is
        // ever reported.
        let board = Board::from_marks([X, X, X, X, O, O, X, O, O]);
        assert_eq!(
            evaluate(&board),
            Outcome::Win {
                mark: X,
                line: [0, 1, 2]
            }
        );
    }
}
