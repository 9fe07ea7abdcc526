//! 遊戲狀態管理

use log::info;
use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::errors::SetupError;
use crate::game::{
    build_deck, deal, shuffle_deck, Hand, Phase, Play, Player, PlayerId, RandomSource, SeededRandom,
    PLAYER_COUNT, TOTAL_CARDS,
};

// ============================================================================
// 對局快照
// ============================================================================

/// 回合狀態
///
/// 只由回合控制器修改；對外一律以複本（快照）提供。
/// 仍在場上的玩家 = 全部玩家 − `finished_order`，不另外保存。
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub phase: Phase,
    pub current_player: PlayerId,
    pub starting_player: Option<PlayerId>,
    pub finished_order: Vec<PlayerId>,
    /// 本輪要壓的牌；None 表示自由出牌
    pub reference_play: Option<Play>,
    pub consecutive_passes: usize,
    /// 最近一次有效出牌者（主權）
    pub last_effective_player: Option<PlayerId>,
    pub turn_count: usize,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Dealing,
            current_player: 0,
            starting_player: None,
            finished_order: Vec::with_capacity(PLAYER_COUNT),
            reference_play: None,
            consecutive_passes: 0,
            last_effective_player: None,
            turn_count: 0,
        }
    }

    pub fn is_finished(&self, player: PlayerId) -> bool {
        self.finished_order.contains(&player)
    }

    pub fn is_active(&self, player: PlayerId) -> bool {
        player < PLAYER_COUNT && !self.is_finished(player)
    }

    pub fn active_players(&self) -> Vec<PlayerId> {
        (0..PLAYER_COUNT).filter(|&id| self.is_active(id)).collect()
    }

    pub fn active_count(&self) -> usize {
        PLAYER_COUNT.saturating_sub(self.finished_order.len())
    }

    pub fn is_trick_owner(&self, player: PlayerId) -> bool {
        self.last_effective_player == Some(player)
    }

    /// 逆時針找下一位仍在場上的玩家
    ///
    /// 只剩自己時回傳自己；全部完成時回傳 None。
    pub fn next_active_after(&self, player: PlayerId) -> Option<PlayerId> {
        (1..=PLAYER_COUNT)
            .map(|step| (player + step) % PLAYER_COUNT)
            .find(|&id| self.is_active(id))
    }
}

// ============================================================================
// 出牌紀錄
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnAction {
    Played(Play),
    Passed,
}

/// 一次被接受的行動
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnEvent {
    pub turn: usize,
    pub player: PlayerId,
    pub action: TurnAction,
    /// 此行動後本輪清空
    pub trick_reset: bool,
    /// 此行動使玩家出完手牌時的名次（0 為頭名）
    pub finished_position: Option<usize>,
}

// ============================================================================
// 對局
// ============================================================================

/// 一局夠級：狀態、玩家、手牌與隨機來源
pub struct GameSession {
    pub(crate) state: GameState,
    pub(crate) players: Vec<Player>,
    pub(crate) hands: Vec<Hand>,
    pub(crate) history: Vec<TurnEvent>,
    pub(crate) rng: Box<dyn RandomSource + Send>,
}

impl GameSession {
    /// 建局：建牌、洗牌、發牌，停在 Dealing 階段等待 `advance`
    pub fn with_config(
        config: &GameConfig,
        mut rng: Box<dyn RandomSource + Send>,
    ) -> Result<Self, SetupError> {
        config.validate()?;

        let mut deck = build_deck();
        if deck.len() != TOTAL_CARDS {
            return Err(SetupError::DeckSize {
                expected: TOTAL_CARDS,
                actual: deck.len(),
            });
        }
        shuffle_deck(&mut deck, rng.as_mut());

        let players = config.build_players();
        let mut hands = vec![Hand::new(); players.len()];
        let per_player = deal(&mut deck, &mut hands)?;

        info!(
            "new game: {} human / {} AI, {} cards each",
            config.human_players,
            PLAYER_COUNT - config.human_players,
            per_player
        );

        Ok(Self {
            state: GameState::new(),
            players,
            hands,
            history: Vec::new(),
            rng,
        })
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, SetupError> {
        let rng = match config.seed {
            Some(seed) => SeededRandom::new(seed),
            None => SeededRandom::from_entropy(),
        };
        Self::with_config(config, Box::new(rng))
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    pub fn hand(&self, id: PlayerId) -> Option<&Hand> {
        self.hands.get(id)
    }

    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    pub fn history(&self) -> &[TurnEvent] {
        &self.history
    }

    pub fn has_humans(&self) -> bool {
        self.players.iter().any(|p| p.is_human)
    }

    /// 目前輪到的玩家是否等待人類決定
    pub fn awaiting_human(&self) -> bool {
        self.state.phase == Phase::Playing
            && self
                .players
                .get(self.state.current_player)
                .map_or(false, |p| p.is_human)
    }
}

/// 以預設設定建立一局，座位 `0..human_player_count` 為人類
pub fn new_game(human_player_count: usize) -> Result<GameSession, SetupError> {
    GameSession::from_config(&GameConfig::new(human_player_count))
}

// ============================================================================
// 單元測試
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{ScriptedRandom, CARDS_PER_PLAYER};

    #[test]
    fn test_new_game_deals_full_hands() {
        let session = new_game(1).unwrap();
        assert_eq!(session.state().phase, Phase::Dealing);
        assert_eq!(session.players().len(), PLAYER_COUNT);
        assert!(session.players()[0].is_human);
        assert!(session.players()[1..].iter().all(|p| !p.is_human));

        for id in 0..PLAYER_COUNT {
            assert_eq!(session.hand(id).unwrap().len(), CARDS_PER_PLAYER);
        }
        let total: usize = session.hands().iter().map(|h| h.len()).sum();
        assert_eq!(total, TOTAL_CARDS);
    }

    #[test]
    fn test_new_game_rejects_bad_human_count() {
        assert!(matches!(
            new_game(7),
            Err(SetupError::HumanCount { requested: 7, .. })
        ));
    }

    #[test]
    fn test_wrong_seat_count_fails_setup() {
        let config = GameConfig::default().with_player_names(vec!["solo".into(); 4]);
        let result = GameSession::with_config(&config, Box::new(ScriptedRandom::default()));
        assert!(matches!(result, Err(SetupError::Deal(_))));
    }

    #[test]
    fn test_same_seed_same_deal() {
        let config = GameConfig::default().with_seed(42);
        let a = GameSession::from_config(&config).unwrap();
        let b = GameSession::from_config(&config).unwrap();
        assert_eq!(a.hands(), b.hands());
    }

    #[test]
    fn test_unshuffled_deal_follows_deck_order() {
        let config = GameConfig::default();
        let session = GameSession::with_config(&config, Box::new(ScriptedRandom::default())).unwrap();
        let deck = build_deck();
        assert_eq!(session.hand(0).unwrap().cards(), &deck[..CARDS_PER_PLAYER]);
        assert_eq!(session.hand(5).unwrap().cards(), &deck[5 * CARDS_PER_PLAYER..]);
    }

    #[test]
    fn test_rotation_skips_finished_players() {
        let mut state = GameState::new();
        assert_eq!(state.next_active_after(5), Some(0));

        state.finished_order = vec![0, 1];
        assert_eq!(state.next_active_after(5), Some(2));
        assert_eq!(state.active_players(), vec![2, 3, 4, 5]);
        assert_eq!(state.active_count(), 4);

        state.finished_order = vec![0, 1, 2, 4, 5];
        assert_eq!(state.next_active_after(3), Some(3));
        assert_eq!(state.next_active_after(0), Some(3));

        state.finished_order.push(3);
        assert_eq!(state.next_active_after(3), None);
    }
}
