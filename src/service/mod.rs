//! 服務層模組
//!
//! 提供對局狀態機、合法動作查詢、結算與批次模擬

pub mod config;
pub mod errors;
pub mod legal_moves;
pub mod outcome;
pub mod simulation;
pub mod state;
pub mod turns;

pub use config::{default_player_names, GameConfig, SimulationConfig};
pub use errors::{SessionError, SetupError, TurnError};
pub use legal_moves::{legal_moves_from_state, LegalMoves};
pub use outcome::{outcome_from_state, GameOutcome};
pub use simulation::{game_seed, run_ai_game, simulate_batch, BatchSummary, GameReport};
pub use state::{new_game, GameSession, GameState, TurnAction, TurnEvent};
pub use turns::Decision;
