//! 批次模擬
//!
//! 多局全 AI 對局並行執行，每局種子由批次種子與局號推導，結果可重現。

use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::config::{GameConfig, SimulationConfig};
use super::errors::SessionError;
use super::outcome::GameOutcome;
use super::state::GameSession;
use crate::game::{Team, PLAYER_COUNT};

/// 單局結果
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameReport {
    pub index: usize,
    pub seed: u64,
    pub turns: usize,
    pub outcome: GameOutcome,
}

/// 批次統計
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub games: usize,
    pub team_a_wins: usize,
    pub team_b_wins: usize,
    pub draws: usize,
    pub team_a_points: i64,
    pub team_b_points: i64,
    pub total_turns: usize,
    /// `finish_counts[player][position]`：該玩家拿到該名次的局數
    pub finish_counts: [[usize; PLAYER_COUNT]; PLAYER_COUNT],
}

impl BatchSummary {
    pub fn record(&mut self, report: &GameReport) {
        let outcome = &report.outcome;
        self.games += 1;
        self.total_turns += report.turns;
        self.team_a_points += i64::from(outcome.team_scores.team_a);
        self.team_b_points += i64::from(outcome.team_scores.team_b);
        match outcome.winner {
            Some(Team::A) => self.team_a_wins += 1,
            Some(Team::B) => self.team_b_wins += 1,
            None => self.draws += 1,
        }
        for (position, &player) in outcome.ranking.iter().enumerate() {
            if player < PLAYER_COUNT && position < PLAYER_COUNT {
                self.finish_counts[player][position] += 1;
            }
        }
    }

    pub fn average_turns(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_turns as f64 / self.games as f64
        }
    }
}

/// 第 `index` 局的種子
pub fn game_seed(batch_seed: u64, index: usize) -> u64 {
    batch_seed.wrapping_add((index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// 以指定種子跑一局全 AI 對局
pub fn run_ai_game(index: usize, seed: u64) -> Result<GameReport, SessionError> {
    let config = GameConfig::default().with_seed(seed);
    let mut session = GameSession::from_config(&config)?;
    let outcome = session.run_to_completion()?;
    Ok(GameReport {
        index,
        seed,
        turns: session.state().turn_count,
        outcome,
    })
}

/// 並行跑多局並彙總
pub fn simulate_batch(config: &SimulationConfig) -> Result<BatchSummary, SessionError> {
    let reports: Vec<GameReport> = (0..config.games)
        .into_par_iter()
        .map(|index| run_ai_game(index, game_seed(config.seed, index)))
        .collect::<Result<_, SessionError>>()?;

    let mut summary = BatchSummary::default();
    for report in &reports {
        summary.record(report);
    }

    info!(
        "simulated {} games: A {} / B {} / draw {}",
        summary.games, summary.team_a_wins, summary.team_b_wins, summary.draws
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_seeds_differ_per_index() {
        assert_eq!(game_seed(7, 0), 7);
        assert_ne!(game_seed(7, 1), game_seed(7, 2));
    }

    #[test]
    fn test_run_ai_game_completes() {
        let report = run_ai_game(0, 2024).unwrap();
        assert_eq!(report.outcome.ranking.len(), PLAYER_COUNT);
        assert!(report.turns > 0);
        assert_eq!(
            report.outcome.team_scores.team_a + report.outcome.team_scores.team_b,
            0
        );
    }

    #[test]
    fn test_batch_is_reproducible() {
        let config = SimulationConfig { games: 8, seed: 99 };
        let first = simulate_batch(&config).unwrap();
        let second = simulate_batch(&config).unwrap();
        assert_eq!(first, second);

        assert_eq!(first.games, 8);
        assert_eq!(first.team_a_wins + first.team_b_wins + first.draws, 8);
        assert_eq!(first.team_a_points + first.team_b_points, 0);
        for player in 0..PLAYER_COUNT {
            assert_eq!(first.finish_counts[player].iter().sum::<usize>(), 8);
        }
        assert!(first.average_turns() > 0.0);
    }

    #[test]
    fn test_empty_batch() {
        let summary = simulate_batch(&SimulationConfig { games: 0, seed: 1 }).unwrap();
        assert_eq!(summary, BatchSummary::default());
        assert_eq!(summary.average_turns(), 0.0);
    }
}
