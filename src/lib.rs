//! 夠級（六人四副牌）規則引擎
//!
//! - `game`: 卡牌、牌組、手牌、牌型比較與計分等無狀態規則
//! - `service`: 對局狀態機、合法動作、結算與批次模擬

pub mod game;
pub mod service;

pub use game::{Card, Hand, Phase, Play, Player, PlayerId, Rank, Suit, Team};
pub use service::{
    new_game, simulate_batch, Decision, GameConfig, GameOutcome, GameSession, GameState,
    SessionError, SetupError, SimulationConfig, TurnError,
};
