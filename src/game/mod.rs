//! 遊戲核心模組
//!
//! 包含夠級的核心定義：
//! - `constants`: 遊戲常量
//! - `cards`: 卡牌、花色、點數階梯
//! - `random`: 可注入的隨機來源
//! - `decks`: 牌組構建與發牌
//! - `players`: 玩家、隊伍、手牌
//! - `hand_types`: 牌型（同點數出牌）
//! - `patterns`: 牌型比較與可壓組合枚舉
//! - `phases`: 遊戲階段
//! - `scoring`: 名次計分
//!
//! 注意：回合狀態機在 service 層，這裡只有無狀態的規則

pub mod constants;
pub mod cards;
pub mod random;
pub mod decks;
pub mod players;
pub mod hand_types;
pub mod patterns;
pub mod phases;
pub mod scoring;

// Re-export 常用類型
pub use constants::*;
pub use cards::{Card, Rank, Suit, standard_deck};
pub use random::{RandomSource, ScriptedRandom, SeededRandom};
pub use decks::{build_deck, deal, shuffle_deck, DealError};
pub use players::{Hand, Player, PlayerId, Team};
pub use hand_types::{Play, PlayStrength};
pub use patterns::{can_beat, check_play, find_all_beating_combinations, group_by_rank, PlayRejection};
pub use phases::Phase;
pub use scoring::{score_for_rank, TeamScores};
