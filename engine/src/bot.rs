use crate::board::Board;
use crate::config::BotConfig;
use crate::error::EngineError;
use crate::session_rng::SessionRng;
use crate::types::{Difficulty, Mark, Outcome};
use crate::win_detector::evaluate;

const WIN_SCORE: i32 = 10;

/// Board snapshot plus the two sides as seen from the bot.
pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
    pub player_mark: Mark,
}

/// Picks the cell the bot should play next.
///
/// Easy plays uniformly at random, hard always plays the minimax move, and
/// medium blends the two with the configured probability. Calling this on a
/// full board is a turn-sequencing bug in the caller and is reported as an
/// error instead of a quiet no-op.
pub fn select_move(
    difficulty: Difficulty,
    input: &BotInput,
    config: &BotConfig,
    rng: &mut SessionRng,
) -> Result<usize, EngineError> {
    let available = input.board.available_moves();
    if available.is_empty() {
        return Err(EngineError::NoAvailableMoves);
    }

    match difficulty {
        Difficulty::Easy => Ok(random_move(&available, rng)),
        Difficulty::Medium => {
            if rng.random::<f64>() < config.medium_optimal_probability {
                best_move(input).ok_or(EngineError::NoAvailableMoves)
            } else {
                Ok(random_move(&available, rng))
            }
        }
        Difficulty::Hard => best_move(input).ok_or(EngineError::NoAvailableMoves),
    }
}

fn random_move(available: &[usize], rng: &mut SessionRng) -> usize {
    available[rng.random_range(0..available.len())]
}

/// Full minimax over every empty cell. Ties keep the first-found cell in
/// index order, so the choice is deterministic for a given board.
pub fn best_move(input: &BotInput) -> Option<usize> {
    let mut board = input.board;
    let mut best_score = i32::MIN;
    let mut best_index = None;

    for index in input.board.available_moves() {
        let score = board.probe(index, input.bot_mark, |b| {
            minimax(b, 0, false, input.bot_mark, input.player_mark)
        });
        if score > best_score {
            best_score = score;
            best_index = Some(index);
        }
    }

    best_index
}

/// Plain minimax without alpha-beta. Terminal scores are depth-adjusted so
/// the search prefers the fastest win and the slowest loss among otherwise
/// equal branches. The 3x3 tree is at most 9 plies deep, so there is no
/// depth cutoff and no transposition table.
pub fn minimax(
    board: &mut Board,
    depth: i32,
    maximizing: bool,
    bot_mark: Mark,
    player_mark: Mark,
) -> i32 {
    match evaluate(board) {
        Outcome::Win { mark, .. } => {
            return if mark == bot_mark {
                WIN_SCORE - depth
            } else {
                -WIN_SCORE + depth
            };
        }
        Outcome::Draw => return 0,
        Outcome::InProgress => {}
    }

    if maximizing {
        let mut best = i32::MIN;
        for index in board.available_moves() {
            let score = board.probe(index, bot_mark, |b| {
                minimax(b, depth + 1, false, bot_mark, player_mark)
            });
            best = best.max(score);
        }
        best
    } else {
        let mut best = i32::MAX;
        for index in board.available_moves() {
            let score = board.probe(index, player_mark, |b| {
                minimax(b, depth + 1, true, bot_mark, player_mark)
            });
            best = best.min(score);
        }
        best
    }
}
