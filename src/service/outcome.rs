//! 對局結算

use serde::{Deserialize, Serialize};

use super::state::GameState;
use crate::game::{score_for_rank, PlayerId, Team, TeamScores, PLAYER_COUNT};

/// 結束時的名次、個人分數變化與兩隊得分
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// 完成順序，頭名在前
    pub ranking: Vec<PlayerId>,
    /// 依玩家 id 索引的分數變化
    pub player_deltas: Vec<i32>,
    pub team_scores: TeamScores,
    /// None 表示平手
    pub winner: Option<Team>,
}

impl GameOutcome {
    pub fn from_ranking(ranking: &[PlayerId]) -> Self {
        let mut player_deltas = vec![0; PLAYER_COUNT];
        for (position, &player) in ranking.iter().enumerate() {
            if let Some(delta) = player_deltas.get_mut(player) {
                *delta = score_for_rank(position);
            }
        }
        let team_scores = TeamScores::from_ranking(ranking);
        Self {
            ranking: ranking.to_vec(),
            player_deltas,
            team_scores,
            winner: team_scores.winner(),
        }
    }

    /// 某玩家的名次（0 為頭名）
    pub fn position_of(&self, player: PlayerId) -> Option<usize> {
        self.ranking.iter().position(|&p| p == player)
    }
}

/// 只有 GameOver 才有結算
pub fn outcome_from_state(state: &GameState) -> Option<GameOutcome> {
    if !state.phase.is_over() {
        return None;
    }
    Some(GameOutcome::from_ranking(&state.finished_order))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Phase;

    #[test]
    fn test_no_outcome_before_game_over() {
        let mut state = GameState::new();
        assert!(outcome_from_state(&state).is_none());

        state.phase = Phase::Playing;
        state.finished_order = vec![0, 1, 2];
        assert!(outcome_from_state(&state).is_none());
    }

    #[test]
    fn test_outcome_from_finished_state() {
        let mut state = GameState::new();
        state.phase = Phase::GameOver;
        state.finished_order = vec![3, 0, 5, 2, 1, 4];

        let outcome = outcome_from_state(&state).unwrap();
        assert_eq!(outcome.player_deltas, vec![1, -1, 0, 2, -2, 0]);
        // B: 3(+2) 5(0) 1(-1) = 1, A: 0(+1) 2(0) 4(-2) = -1
        assert_eq!(outcome.team_scores.team_b, 1);
        assert_eq!(outcome.team_scores.team_a, -1);
        assert_eq!(outcome.winner, Some(Team::B));
        assert_eq!(outcome.position_of(4), Some(5));
        assert_eq!(outcome.player_deltas.iter().sum::<i32>(), 0);
    }
}
