//! 名次計分
//!
//! 依完成順序給分，再按隊伍（座位奇偶）加總。

use serde::{Deserialize, Serialize};

use super::constants::RANK_SCORES;
use super::players::{PlayerId, Team};

/// 名次（0 為頭名）→ 分數變化；未知名次為 0
pub fn score_for_rank(position: usize) -> i32 {
    RANK_SCORES.get(position).copied().unwrap_or(0)
}

/// 兩隊得分
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamScores {
    pub team_a: i32,
    pub team_b: i32,
}

impl TeamScores {
    /// 從完成順序計算兩隊得分
    ///
    /// 末游（第 6 位）的 -2 即 [`score_for_rank`] 第 5 名的分數，只計一次。
    pub fn from_ranking(finished_order: &[PlayerId]) -> Self {
        let mut scores = Self::default();
        for (position, &player) in finished_order.iter().enumerate() {
            scores.add(Team::of(player), score_for_rank(position));
        }
        scores
    }

    pub fn add(&mut self, team: Team, delta: i32) {
        match team {
            Team::A => self.team_a += delta,
            Team::B => self.team_b += delta,
        }
    }

    pub fn get(&self, team: Team) -> i32 {
        match team {
            Team::A => self.team_a,
            Team::B => self.team_b,
        }
    }

    /// 得分較高的隊伍；平手回傳 None
    pub fn winner(&self) -> Option<Team> {
        match self.team_a.cmp(&self.team_b) {
            std::cmp::Ordering::Greater => Some(Team::A),
            std::cmp::Ordering::Less => Some(Team::B),
            std::cmp::Ordering::Equal => None,
        }
    }
}

// ============================================================================
// 單元測試
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_for_rank_table() {
        let scores: Vec<i32> = (0..6).map(score_for_rank).collect();
        assert_eq!(scores, vec![2, 1, 0, 0, -1, -2]);
        assert_eq!(score_for_rank(6), 0);
        assert_eq!(score_for_rank(100), 0);
    }

    #[test]
    fn test_team_scores_sweep() {
        // A 隊包辦前三名
        let scores = TeamScores::from_ranking(&[0, 2, 4, 1, 3, 5]);
        assert_eq!(scores.team_a, 3);
        assert_eq!(scores.team_b, -3);
        assert_eq!(scores.winner(), Some(Team::A));
    }

    #[test]
    fn test_team_scores_alternating() {
        let scores = TeamScores::from_ranking(&[1, 0, 3, 2, 5, 4]);
        assert_eq!(scores.team_b, 2 + 0 - 1);
        assert_eq!(scores.team_a, 1 + 0 - 2);
        assert_eq!(scores.winner(), Some(Team::B));
        assert_eq!(scores.get(Team::A) + scores.get(Team::B), 0);
    }

    #[test]
    fn test_team_scores_draw() {
        // A: +2 +0 -2 = 0, B: +1 +0 -1 = 0
        let scores = TeamScores::from_ranking(&[0, 1, 2, 3, 5, 4]);
        assert_eq!(scores.team_a, 0);
        assert_eq!(scores.team_b, 0);
        assert_eq!(scores.winner(), None);
    }
}
