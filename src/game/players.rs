//! 玩家、隊伍與手牌

use std::cmp::Reverse;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::cards::{Card, Rank};
use super::hand_types::Play;

/// 玩家座位編號 0..6
pub type PlayerId = usize;

/// 隊伍：偶數座位為 A 隊，奇數座位為 B 隊
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    A,
    B,
}

impl Team {
    pub fn of(player: PlayerId) -> Team {
        if player % 2 == 0 {
            Team::A
        } else {
            Team::B
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::A => f.write_str("A"),
            Team::B => f.write_str("B"),
        }
    }
}

/// 玩家身份（建立後不變，只有手牌會變動）
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub is_human: bool,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, is_human: bool) -> Self {
        Self {
            id,
            name: name.into(),
            is_human,
        }
    }

    pub fn team(&self) -> Team {
        Team::of(self.id)
    }
}

/// 手牌（無序多重集合）
///
/// `sorted` 只是顯示用的快取標記，與規則無關。
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
    sorted: bool,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards,
            sorted: false,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// 發牌時整批放入
    pub fn receive(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
        self.sorted = false;
    }

    pub fn count_rank(&self, rank: Rank) -> usize {
        self.cards.iter().filter(|c| c.rank == rank).count()
    }

    /// 手牌是否包含所有指定的牌（按多重集合計數）
    pub fn contains_all(&self, cards: &[Card]) -> bool {
        cards.iter().all(|wanted| {
            let needed = cards.iter().filter(|c| *c == wanted).count();
            let held = self.cards.iter().filter(|c| *c == wanted).count();
            held >= needed
        })
    }

    /// 移除指定的牌；若有任何一張不在手牌中則不做任何修改並回傳 false
    pub fn remove_cards(&mut self, cards: &[Card]) -> bool {
        if !self.contains_all(cards) {
            return false;
        }
        for card in cards {
            if let Some(pos) = self.cards.iter().position(|c| c == card) {
                self.cards.remove(pos);
            }
        }
        true
    }

    /// 從手牌挑出 `count` 張指定點數的牌組成一手
    ///
    /// 同點數的牌在比較上可以互換，所以取前 `count` 張即可。
    pub fn select(&self, rank: Rank, count: usize) -> Option<Play> {
        if count == 0 {
            return None;
        }
        let picked: Vec<Card> = self
            .cards
            .iter()
            .filter(|c| c.rank == rank)
            .take(count)
            .copied()
            .collect();
        (picked.len() == count).then(|| Play::new(picked))
    }

    /// 顯示排序：大王、小王在前，其餘按點數由大到小
    pub fn sort_for_display(&mut self) {
        if self.sorted {
            return;
        }
        self.cards
            .sort_by_key(|c| (Reverse(c.rank), c.suit as u8, c.origin_deck));
        self.sorted = true;
    }
}

// ============================================================================
// 單元測試
// ============================================================================
