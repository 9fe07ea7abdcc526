//! 對局設定

use serde::{Deserialize, Serialize};

use super::errors::SetupError;
use crate::game::{Player, PLAYER_COUNT};

/// 單局設定
///
/// 人類玩家佔用座位 `0..human_players`，其餘為 AI。
/// `seed` 為 None 時以系統熵初始化隨機來源。
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub human_players: usize,
    pub player_names: Vec<String>,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_players: 0,
            player_names: default_player_names(),
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn new(human_players: usize) -> Self {
        Self {
            human_players,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_player_names(mut self, names: Vec<String>) -> Self {
        self.player_names = names;
        self
    }

    pub fn validate(&self) -> Result<(), SetupError> {
        if self.human_players > PLAYER_COUNT {
            return Err(SetupError::HumanCount {
                requested: self.human_players,
                max: PLAYER_COUNT,
            });
        }
        Ok(())
    }

    /// 依座位建立玩家（數量與名稱數相同，人數檢查在發牌時進行）
    pub fn build_players(&self) -> Vec<Player> {
        self.player_names
            .iter()
            .enumerate()
            .map(|(id, name)| Player::new(id, name.clone(), id < self.human_players))
            .collect()
    }
}

pub fn default_player_names() -> Vec<String> {
    (0..PLAYER_COUNT).map(|i| format!("Player{}", i)).collect()
}

/// 批次模擬設定
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub games: usize,
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { games: 100, seed: 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.human_players, 0);
        assert_eq!(config.player_names.len(), PLAYER_COUNT);
        assert_eq!(config.player_names[5], "Player5");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_human_seats_come_first() {
        let players = GameConfig::new(2).build_players();
        let humans: Vec<bool> = players.iter().map(|p| p.is_human).collect();
        assert_eq!(humans, vec![true, true, false, false, false, false]);
        assert_eq!(players[3].id, 3);
    }

    #[test]
    fn test_validate_rejects_too_many_humans() {
        assert_eq!(
            GameConfig::new(7).validate(),
            Err(SetupError::HumanCount {
                requested: 7,
                max: 6
            })
        );
        assert!(GameConfig::new(6).validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let names: Vec<String> = ["a", "b", "c", "d", "e", "f"].iter().map(|s| s.to_string()).collect();
        let config = GameConfig::new(1).with_seed(9).with_player_names(names.clone());
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.build_players()[0].name, "a");
        assert!(config.build_players()[0].is_human);
        assert_eq!(config.player_names, names);
    }
}
