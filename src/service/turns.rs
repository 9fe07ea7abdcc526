//! 回合控制器
//!
//! 對局狀態機：Dealing → Playing → GameOver。
//! 人類玩家透過 `submit_human_decision` 行動，AI 玩家在 `advance` 中行動；
//! 兩條路徑最終都走同一組接受出牌 / 接受過牌的流程。

use log::{debug, info, trace, warn};
use serde::{Deserialize, Serialize};

use super::errors::{SessionError, TurnError};
use super::outcome::{outcome_from_state, GameOutcome};
use super::state::{GameSession, GameState, TurnAction, TurnEvent};
use crate::game::{
    check_play, find_all_beating_combinations, Phase, Play, PlayerId, MAX_TURNS, PLAYER_COUNT,
};

/// 人類玩家的決定
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    Play(Play),
    Pass,
}

impl GameSession {
    // ========================================================================
    // 對外操作
    // ========================================================================

    /// 推進一步
    ///
    /// - Dealing：隨機決定首家，進入 Playing
    /// - Playing 且輪到 AI：執行一次 AI 回合
    /// - 輪到人類或已結束：不變
    pub fn advance(&mut self) -> GameState {
        match self.state.phase {
            Phase::Dealing => self.start_play(),
            Phase::Playing => {
                let current = self.state.current_player;
                if self.players[current].is_human {
                    trace!("waiting for human player {}", current);
                } else {
                    self.ai_turn(current);
                }
            }
            Phase::GameOver => {}
        }
        self.state.clone()
    }

    /// 接受人類玩家的出牌或過牌
    ///
    /// 被拒絕時狀態完全不變，可重新提交。
    pub fn submit_human_decision(
        &mut self,
        player: PlayerId,
        decision: Decision,
    ) -> Result<GameState, TurnError> {
        if self.state.phase != Phase::Playing {
            return Err(TurnError::WrongPhase {
                phase: self.state.phase,
            });
        }
        let seat = self
            .players
            .get(player)
            .ok_or(TurnError::UnknownPlayer { player })?;
        if player != self.state.current_player {
            return Err(TurnError::NotYourTurn {
                player,
                current: self.state.current_player,
            });
        }
        if !seat.is_human {
            return Err(TurnError::NotHuman { player });
        }

        match decision {
            Decision::Pass => {
                self.check_pass(player)?;
                self.accept_pass(player);
            }
            Decision::Play(play) => {
                if !self.hands[player].contains_all(play.cards()) {
                    return Err(TurnError::CardsNotInHand { player });
                }
                check_play(&play, self.state.reference_play.as_ref())
                    .map_err(|reason| TurnError::IllegalPlay { reason })?;
                self.accept_play(player, play);
            }
        }
        Ok(self.state.clone())
    }

    /// 全 AI 對局跑到結束
    pub fn run_to_completion(&mut self) -> Result<GameOutcome, SessionError> {
        if self.has_humans() {
            return Err(SessionError::HumansSeated);
        }
        for _ in 0..MAX_TURNS {
            if self.state.phase.is_over() {
                break;
            }
            self.advance();
        }
        self.outcome()
            .ok_or(SessionError::TurnLimit { limit: MAX_TURNS })
    }

    /// 結束後的名次與兩隊得分；未結束時為 None
    pub fn outcome(&self) -> Option<GameOutcome> {
        outcome_from_state(&self.state)
    }

    // ========================================================================
    // 內部流程
    // ========================================================================

    fn start_play(&mut self) {
        let starter = self.rng.index(PLAYER_COUNT);
        self.state.phase = Phase::Playing;
        self.state.current_player = starter;
        self.state.starting_player = Some(starter);
        info!("play begins with player {}", starter);
    }

    /// 持有主權者不能過牌
    fn check_pass(&self, player: PlayerId) -> Result<(), TurnError> {
        if self.state.is_trick_owner(player) {
            return Err(TurnError::IllegalPass { player });
        }
        Ok(())
    }

    fn ai_turn(&mut self, player: PlayerId) {
        let mut options =
            find_all_beating_combinations(self.hands[player].cards(), self.state.reference_play.as_ref());

        if options.is_empty() {
            match self.check_pass(player) {
                Ok(()) => self.accept_pass(player),
                Err(err) => warn!("AI player {} has no legal action: {}", player, err),
            }
            return;
        }

        let pick = self.rng.index(options.len());
        let play = options.swap_remove(pick);
        self.accept_play(player, play);
    }

    fn accept_play(&mut self, player: PlayerId, play: Play) {
        if !self.hands[player].remove_cards(play.cards()) {
            warn!("player {} played cards outside the hand: {}", player, play);
            return;
        }
        debug!("player {} plays {}", player, play);

        self.state.reference_play = Some(play.clone());
        self.state.last_effective_player = Some(player);
        self.state.consecutive_passes = 0;

        let finished_position = if self.hands[player].is_empty() {
            Some(self.finish_player(player))
        } else {
            None
        };

        self.record(player, TurnAction::Played(play), false, finished_position);
        self.end_turn(player);
    }

    /// 除了主權者之外全部過牌後，本輪清空
    fn accept_pass(&mut self, player: PlayerId) {
        self.state.consecutive_passes += 1;
        debug!(
            "player {} passes ({} in a row)",
            player, self.state.consecutive_passes
        );

        let threshold = self.state.active_count().saturating_sub(1);
        let trick_reset = self.state.consecutive_passes >= threshold;
        if trick_reset {
            self.state.reference_play = None;
            self.state.consecutive_passes = 0;
            debug!("trick cleared, next player leads freely");
        }

        self.record(player, TurnAction::Passed, trick_reset, None);
        self.end_turn(player);
    }

    fn finish_player(&mut self, player: PlayerId) -> usize {
        let position = self.state.finished_order.len();
        self.state.finished_order.push(player);
        info!("player {} finished in position {}", player, position + 1);
        position
    }

    fn end_turn(&mut self, player: PlayerId) {
        self.state.turn_count += 1;

        if self.state.finished_order.len() + 1 >= PLAYER_COUNT {
            if let Some(last) = self.state.active_players().first().copied() {
                self.finish_player(last);
            }
            self.state.phase = Phase::GameOver;
            info!(
                "game over after {} turns, ranking {:?}",
                self.state.turn_count, self.state.finished_order
            );
            return;
        }

        if let Some(next) = self.state.next_active_after(player) {
            self.state.current_player = next;
        }
    }

    fn record(
        &mut self,
        player: PlayerId,
        action: TurnAction,
        trick_reset: bool,
        finished_position: Option<usize>,
    ) {
        self.history.push(TurnEvent {
            turn: self.state.turn_count,
            player,
            action,
            trick_reset,
            finished_position,
        });
    }
}
