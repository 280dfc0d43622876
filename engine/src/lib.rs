pub mod board;
pub mod bot;
pub mod config;
pub mod error;
pub mod game_state;
pub mod logger;
pub mod session_rng;
pub mod types;
pub mod win_detector;

pub use board::{Board, CELL_COUNT, LINES};
pub use bot::{BotInput, best_move, select_move};
pub use config::{BotConfig, Validate};
pub use error::EngineError;
pub use game_state::GameState;
pub use session_rng::SessionRng;
pub use types::{Difficulty, GameStatus, Line, Mark, Outcome};
pub use win_detector::evaluate;
