//! 牌組構建與發牌
//!
//! 四副完整撲克（含大小王）合併為 216 張，洗牌後平均發給六位玩家。

use log::{debug, warn};
use thiserror::Error;

use super::cards::{standard_deck, Card};
use super::constants::{DECK_COUNT, PLAYER_COUNT, TOTAL_CARDS};
use super::players::Hand;
use super::random::RandomSource;

// ============================================================================
// 牌組構建
// ============================================================================

/// 創建 4 副牌（每副 52 張常規牌 + 大小王），共 216 張
pub fn build_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(TOTAL_CARDS);
    for origin in 0..DECK_COUNT {
        deck.extend(standard_deck(origin as u8));
    }
    deck
}

/// 均勻洗牌
pub fn shuffle_deck<R: RandomSource + ?Sized>(deck: &mut [Card], rng: &mut R) {
    rng.shuffle(deck);
}

// ============================================================================
// 發牌
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DealError {
    #[error("dealing requires {expected} players, found {actual}")]
    PlayerCount { expected: usize, actual: usize },
}

/// 依順序切片發牌
///
/// 第 i 位玩家拿到 `[i·n, (i+1)·n)`，其中 `n = deck.len() / 6`。
/// 無法整除時多出的牌直接丟棄。成功後牌組清空，回傳每人張數。
pub fn deal(deck: &mut Vec<Card>, hands: &mut [Hand]) -> Result<usize, DealError> {
    if hands.len() != PLAYER_COUNT {
        return Err(DealError::PlayerCount {
            expected: PLAYER_COUNT,
            actual: hands.len(),
        });
    }

    let per_player = deck.len() / PLAYER_COUNT;
    let remainder = deck.len() - per_player * PLAYER_COUNT;
    if remainder > 0 {
        warn!("dropping {} undealt cards", remainder);
    }

    for (i, hand) in hands.iter_mut().enumerate() {
        let start = i * per_player;
        hand.receive(deck[start..start + per_player].iter().copied());
    }
    deck.clear();

    debug!("dealt {} cards to each of {} players", per_player, PLAYER_COUNT);
    Ok(per_player)
}

// ============================================================================
// 單元測試
// ============================================================================
