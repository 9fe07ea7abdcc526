//! 隨機來源
//!
//! 規則引擎只在三處使用隨機：洗牌、抽選首位出牌玩家、AI 選擇出牌組合。
//! 三者都經由 [`RandomSource`]，方便測試替換成固定序列。

use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::cards::Card;

pub trait RandomSource {
    /// 均勻隨機排列
    fn shuffle(&mut self, cards: &mut [Card]);

    /// 在 `0..upper` 中均勻選一個索引（`upper` 必須大於 0）
    fn index(&mut self, upper: usize) -> usize;
}

/// 以 `StdRng` 為底的可重現隨機來源
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn shuffle(&mut self, cards: &mut [Card]) {
        cards.shuffle(&mut self.rng);
    }

    fn index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }
}

/// 固定序列的隨機來源
///
/// 洗牌保持原順序；`index` 依序取出腳本值並對 `upper` 取餘，
/// 腳本用完後一律回傳 0。
#[derive(Clone, Debug, Default)]
pub struct ScriptedRandom {
    script: VecDeque<usize>,
}

impl ScriptedRandom {
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn shuffle(&mut self, _cards: &mut [Card]) {}

    fn index(&mut self, upper: usize) -> usize {
        self.script.pop_front().map(|i| i % upper).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::cards::standard_deck;

    #[test]
    fn test_seeded_random_is_reproducible() {
        let mut a = standard_deck(0);
        let mut b = standard_deck(0);
        SeededRandom::new(42).shuffle(&mut a);
        SeededRandom::new(42).shuffle(&mut b);
        assert_eq!(a, b);
        assert_ne!(a, standard_deck(0));
    }

    #[test]
    fn test_seeded_index_in_range() {
        let mut rng = SeededRandom::new(7);
        for upper in 1..50 {
            assert!(rng.index(upper) < upper);
        }
    }

    #[test]
    fn test_scripted_random() {
        let mut rng = ScriptedRandom::new([4, 9, 1]);
        let mut deck = standard_deck(1);
        rng.shuffle(&mut deck);
        assert_eq!(deck, standard_deck(1));

        assert_eq!(rng.index(6), 4);
        assert_eq!(rng.index(6), 3);
        assert_eq!(rng.index(6), 1);
        assert_eq!(rng.index(6), 0);
    }
}
