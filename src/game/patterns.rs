//! 牌型比較引擎
//!
//! 處理出牌合法性判定、大小比較與可壓牌組合枚舉：
//! - `can_beat`: 總是回傳 bool 的比較判定
//! - `check_play`: 同樣的判定，但回傳被拒絕的原因
//! - `find_all_beating_combinations`: 枚舉手牌中所有能壓過參考牌的組合

use std::collections::BTreeMap;
use std::fmt;

use log::trace;
use serde::{Deserialize, Serialize};

use super::cards::{Card, Rank};
use super::hand_types::Play;

/// 出牌被拒絕的原因
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayRejection {
    /// 沒有出任何牌
    Empty,
    /// 一手牌中有不同點數
    MixedRanks,
    /// 張數必須與參考牌相同
    CountMismatch { expected: usize, actual: usize },
    /// 點數必須嚴格大於參考牌
    NotHigher { rank: Rank, to_beat: Rank },
}

impl fmt::Display for PlayRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayRejection::Empty => f.write_str("no cards played"),
            PlayRejection::MixedRanks => f.write_str("all cards must share one rank"),
            PlayRejection::CountMismatch { expected, actual } => {
                write!(f, "expected {} cards, got {}", expected, actual)
            }
            PlayRejection::NotHigher { rank, to_beat } => {
                write!(f, "{} does not beat {}", rank, to_beat)
            }
        }
    }
}

/// 判定 `candidate` 能否壓過 `reference`
///
/// 規則：
/// 1. 參考牌不存在或為空時，任何牌都可以出
/// 2. 張數必須相同
/// 3. 雙方各自必須是同一點數
/// 4. 點數必須嚴格大於參考牌
pub fn can_beat(candidate: &Play, reference: Option<&Play>) -> bool {
    let reference = match reference {
        Some(r) if !r.is_empty() => r,
        _ => return true,
    };

    if candidate.len() != reference.len() {
        return false;
    }

    match (candidate.rank(), reference.rank()) {
        (Some(new), Some(prev)) => new.value() > prev.value(),
        _ => false,
    }
}

/// 與 [`can_beat`] 相同的判定，失敗時說明原因
///
/// 空牌組與混合點數即使在自由出牌時也會被拒絕。
pub fn check_play(candidate: &Play, reference: Option<&Play>) -> Result<(), PlayRejection> {
    if candidate.is_empty() {
        return Err(PlayRejection::Empty);
    }
    let rank = candidate.rank().ok_or(PlayRejection::MixedRanks)?;

    let reference = match reference {
        Some(r) if !r.is_empty() => r,
        _ => return Ok(()),
    };

    if candidate.len() != reference.len() {
        return Err(PlayRejection::CountMismatch {
            expected: reference.len(),
            actual: candidate.len(),
        });
    }

    match reference.rank() {
        Some(to_beat) if rank.value() > to_beat.value() => Ok(()),
        Some(to_beat) => Err(PlayRejection::NotHigher { rank, to_beat }),
        // 參考牌本身不合法時無法被壓過
        None => Err(PlayRejection::MixedRanks),
    }
}

/// 按點數分組（依點數階梯由小到大）
pub fn group_by_rank(cards: &[Card]) -> BTreeMap<Rank, Vec<Card>> {
    let mut groups: BTreeMap<Rank, Vec<Card>> = BTreeMap::new();
    for card in cards {
        groups.entry(card.rank).or_default().push(*card);
    }
    groups
}

/// 找出手牌中所有能壓過參考牌的組合
///
/// 每個點數組取前 1..=n 張（同點數的牌可互換，前綴即等同所有子集）。
/// 沒有參考牌時回傳所有合法的首出組合；回傳空列表代表只能過牌。
pub fn find_all_beating_combinations(hand: &[Card], reference: Option<&Play>) -> Vec<Play> {
    let mut combinations = Vec::new();

    for cards in group_by_rank(hand).values() {
        for count in 1..=cards.len() {
            let candidate = Play::new(cards[..count].to_vec());
            if can_beat(&candidate, reference) {
                combinations.push(candidate);
            }
        }
    }

    trace!(
        "{} beating combinations from {} cards",
        combinations.len(),
        hand.len()
    );
    combinations
}

// ============================================================================
// 單元測試
// ============================================================================
