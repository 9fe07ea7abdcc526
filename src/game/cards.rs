//! 卡牌、花色與點數定義

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// 花色（王牌獨立一種花色）
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
    Joker,
}

impl Suit {
    /// 四種常規花色
    pub fn standard() -> &'static [Suit] {
        &[Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades]
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
            Suit::Joker => "🃏",
        }
    }
}

/// 點數
///
/// 比較一律使用 [`Rank::value`] 的點數階梯（3→17），
/// 不依賴枚舉宣告順序。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Two,
    SmallJoker, // 小王
    BigJoker,   // 大王
}

impl Rank {
    /// 點數階梯值
    pub fn value(&self) -> u8 {
        match self {
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
            Rank::Ace => 14,
            Rank::Two => 15,
            Rank::SmallJoker => 16,
            Rank::BigJoker => 17,
        }
    }

    /// 顯示用標籤
    pub fn label(&self) -> &'static str {
        match self {
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::SmallJoker => "BJ",
            Rank::BigJoker => "RJ",
        }
    }

    pub fn is_joker(&self) -> bool {
        matches!(self, Rank::SmallJoker | Rank::BigJoker)
    }

    /// 所有點數（由小到大）
    pub fn all() -> &'static [Rank] {
        &[
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
            Rank::Nine,
            Rank::Ten,
            Rank::Jack,
            Rank::Queen,
            Rank::King,
            Rank::Ace,
            Rank::Two,
            Rank::SmallJoker,
            Rank::BigJoker,
        ]
    }

    /// 13 種常規點數（不含大小王）
    pub fn standard() -> &'static [Rank] {
        &Rank::all()[..13]
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 單張牌
///
/// `origin_deck` 只用來區分四副牌中的相同牌，不影響規則。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub origin_deck: u8, // 0..4
}

impl Card {
    pub fn new(suit: Suit, rank: Rank, origin_deck: u8) -> Self {
        Self {
            suit,
            rank,
            origin_deck,
        }
    }

    /// 王牌（花色固定為 Joker）
    pub fn joker(rank: Rank, origin_deck: u8) -> Self {
        Self::new(Suit::Joker, rank, origin_deck)
    }

    pub fn value(&self) -> u8 {
        self.rank.value()
    }

    pub fn is_joker(&self) -> bool {
        self.rank.is_joker()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_joker() {
            write!(f, "{}", self.rank)
        } else {
            write!(f, "{}{}", self.suit.symbol(), self.rank)
        }
    }
}

/// 創建一副 54 張牌（52 張常規牌 + 大小王），標記所屬牌副
pub fn standard_deck(origin_deck: u8) -> Vec<Card> {
    let mut deck = Vec::with_capacity(54);
    for &suit in Suit::standard() {
        for &rank in Rank::standard() {
            deck.push(Card::new(suit, rank, origin_deck));
        }
    }
    deck.push(Card::joker(Rank::SmallJoker, origin_deck));
    deck.push(Card::joker(Rank::BigJoker, origin_deck));
    deck
}

// ============================================================================
// 單元測試
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_rank_ladder_values() {
        let values: Vec<u8> = Rank::all().iter().map(|r| r.value()).collect();
        assert_eq!(values, (3..=17).collect::<Vec<u8>>());
    }

    #[test]
    fn test_rank_ordering_follows_ladder() {
        assert!(Rank::Two > Rank::Ace);
        assert!(Rank::Ace > Rank::King);
        assert!(Rank::SmallJoker > Rank::Two);
        assert!(Rank::BigJoker > Rank::SmallJoker);
        assert!(Rank::Three < Rank::Ten);

        for (i, a) in Rank::all().iter().enumerate() {
            for (j, b) in Rank::all().iter().enumerate() {
                assert_eq!(a.cmp(b), i.cmp(&j));
                if i != j {
                    assert_ne!(a.value(), b.value());
                }
            }
        }
    }

    #[test]
    fn test_standard_ranks_exclude_jokers() {
        assert_eq!(Rank::standard().len(), 13);
        assert!(Rank::standard().iter().all(|r| !r.is_joker()));
    }

    #[test]
    fn test_card_display() {
        assert_eq!(Card::new(Suit::Hearts, Rank::Ace, 0).to_string(), "♥A");
        assert_eq!(Card::new(Suit::Spades, Rank::Ten, 2).to_string(), "♠10");
        assert_eq!(Card::joker(Rank::BigJoker, 1).to_string(), "RJ");
        assert_eq!(Card::joker(Rank::SmallJoker, 1).to_string(), "BJ");
    }

    #[test]
    fn test_standard_deck_is_unique() {
        let deck = standard_deck(3);
        assert_eq!(deck.len(), 54);
        assert!(deck.iter().all(|c| c.origin_deck == 3));

        let seen: HashSet<Card> = deck.iter().copied().collect();
        assert_eq!(seen.len(), 54);
        assert_eq!(deck.iter().filter(|c| c.is_joker()).count(), 2);
        assert!(deck
            .iter()
            .filter(|c| c.is_joker())
            .all(|c| c.suit == Suit::Joker));
    }
}
