//! 合法動作查詢
//!
//! 目前玩家可出的所有組合，以及能否過牌。

use log::trace;
use serde::{Deserialize, Serialize};

use super::state::{GameSession, GameState};
use crate::game::{find_all_beating_combinations, Hand, Phase, Play};

/// 目前玩家的合法動作
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalMoves {
    pub plays: Vec<Play>,
    pub can_pass: bool,
}

/// 依狀態與目前玩家手牌計算合法動作；非 Playing 階段沒有任何動作
pub fn legal_moves_from_state(state: &GameState, hand: &Hand) -> LegalMoves {
    if state.phase != Phase::Playing {
        return LegalMoves::default();
    }
    let plays = find_all_beating_combinations(hand.cards(), state.reference_play.as_ref());
    let can_pass = !state.is_trick_owner(state.current_player);
    trace!(
        "player {}: {} legal plays, pass allowed: {}",
        state.current_player,
        plays.len(),
        can_pass
    );
    LegalMoves { plays, can_pass }
}

impl GameSession {
    /// 目前玩家可出的所有組合（點數由小到大、同點數張數由少到多）
    pub fn current_legal_moves(&self) -> Vec<Play> {
        self.legal_moves().plays
    }

    pub fn legal_moves(&self) -> LegalMoves {
        match self.hands.get(self.state.current_player) {
            Some(hand) => legal_moves_from_state(&self.state, hand),
            None => LegalMoves::default(),
        }
    }
}
