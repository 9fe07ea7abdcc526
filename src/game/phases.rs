//! 遊戲階段

use serde::{Deserialize, Serialize};

/// 遊戲階段：發牌 → 出牌 → 結束（終態）
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Dealing,
    Playing,
    GameOver,
}

impl Phase {
    pub fn is_over(&self) -> bool {
        *self == Phase::GameOver
    }

    pub fn to_int(&self) -> i32 {
        match self {
            Phase::Dealing => 0,
            Phase::Playing => 1,
            Phase::GameOver => 2,
        }
    }
}
