//! 錯誤類型
//!
//! - `SetupError`: 建局失敗，不會產生任何對局
//! - `TurnError`: 單次提交被拒絕，狀態不變，可重新提交
//! - `SessionError`: 無人值守執行（模擬）時的錯誤

use thiserror::Error;

use crate::game::{DealError, Phase, PlayRejection, PlayerId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("human player count must be at most {max}, got {requested}")]
    HumanCount { requested: usize, max: usize },

    #[error(transparent)]
    Deal(#[from] DealError),

    #[error("deck must hold {expected} cards, built {actual}")]
    DeckSize { expected: usize, actual: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TurnError {
    #[error("decisions are only accepted while playing (phase: {phase:?})")]
    WrongPhase { phase: Phase },

    #[error("player {player} does not exist")]
    UnknownPlayer { player: PlayerId },

    #[error("it is player {current}'s turn, not player {player}'s")]
    NotYourTurn { player: PlayerId, current: PlayerId },

    #[error("player {player} is not a human seat")]
    NotHuman { player: PlayerId },

    #[error("player {player} owns the trick and cannot pass")]
    IllegalPass { player: PlayerId },

    #[error("illegal play: {reason}")]
    IllegalPlay { reason: PlayRejection },

    #[error("player {player} does not hold all of the submitted cards")]
    CardsNotInHand { player: PlayerId },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error("session has human seats and cannot run unattended")]
    HumansSeated,

    #[error("game did not finish within {limit} turns")]
    TurnLimit { limit: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Rank;

    #[test]
    fn test_errors_name_the_violated_rule() {
        let pass = TurnError::IllegalPass { player: 3 };
        assert_eq!(pass.to_string(), "player 3 owns the trick and cannot pass");

        let play = TurnError::IllegalPlay {
            reason: PlayRejection::NotHigher {
                rank: Rank::Five,
                to_beat: Rank::King,
            },
        };
        assert_eq!(play.to_string(), "illegal play: 5 does not beat K");
    }

    #[test]
    fn test_deal_error_converts_into_setup_error() {
        let err: SetupError = DealError::PlayerCount {
            expected: 6,
            actual: 4,
        }
        .into();
        assert_eq!(err.to_string(), "dealing requires 6 players, found 4");

        let session: SessionError = err.into();
        assert!(matches!(session, SessionError::Setup(SetupError::Deal(_))));
    }
}
