//! 牌型定義
//!
//! 夠級只有一種牌型：同點數的若干張牌。

use std::fmt;

use serde::{Deserialize, Serialize};

use super::cards::{Card, Rank};

/// 一手出牌
///
/// 可以持有任意牌（例如待驗證的玩家輸入），
/// 只有非空且同點數時才是合法牌型，見 [`Play::is_valid`]。
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    cards: Vec<Card>,
}

/// 牌型強度：(張數, 點數)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayStrength {
    pub count: usize,
    pub rank: Rank,
}

impl Play {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// 所有牌同點數時回傳該點數；空牌組或混合點數回傳 None
    pub fn rank(&self) -> Option<Rank> {
        let first = self.cards.first()?.rank;
        self.cards
            .iter()
            .all(|c| c.rank == first)
            .then_some(first)
    }

    pub fn is_valid(&self) -> bool {
        self.rank().is_some()
    }

    pub fn strength(&self) -> Option<PlayStrength> {
        self.rank().map(|rank| PlayStrength {
            count: self.cards.len(),
            rank,
        })
    }
}

impl From<Vec<Card>> for Play {
    fn from(cards: Vec<Card>) -> Self {
        Self::new(cards)
    }
}

impl fmt::Display for Play {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.cards.iter().map(|c| c.rank.label()).collect();
        f.write_str(&labels.join(" "))
    }
}

// ============================================================================
// 單元測試
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::cards::Suit;

    fn cards(rank: Rank, count: usize) -> Vec<Card> {
        (0..count)
            .map(|i| Card::new(Suit::standard()[i % 4], rank, (i / 4) as u8))
            .collect()
    }

    #[test]
    fn test_play_rank_and_strength() {
        let play = Play::new(cards(Rank::Queen, 3));
        assert_eq!(play.rank(), Some(Rank::Queen));
        assert_eq!(
            play.strength(),
            Some(PlayStrength {
                count: 3,
                rank: Rank::Queen
            })
        );
        assert!(play.is_valid());
    }

    #[test]
    fn test_mixed_and_empty_plays_are_invalid() {
        let mut mixed = cards(Rank::Five, 1);
        mixed.extend(cards(Rank::Six, 1));
        assert_eq!(Play::new(mixed).rank(), None);
        assert!(!Play::default().is_valid());
        assert_eq!(Play::default().strength(), None);
    }

    #[test]
    fn test_play_display() {
        assert_eq!(Play::new(cards(Rank::Ten, 2)).to_string(), "10 10");
    }
}
