//! Unified error type surfaced by the session API.
//!
//! Wraps engine failures and adds the turn-discipline errors a host can run
//! into, so callers can bubble everything up with one type.

use battle_core::{BattleError, ErrorSeverity, GameError, UnitId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("previous turn is still awaiting presentation")]
    TurnPending,

    #[error("action source {provided} does not match current unit {expected}")]
    NotYourTurn { expected: UnitId, provided: UnitId },

    #[error("unit {0} is controlled by the AI")]
    AiControlled(UnitId),

    #[error(transparent)]
    Battle(#[from] BattleError),
}

impl GameError for SessionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::TurnPending => ErrorSeverity::Recoverable,
            Self::NotYourTurn { .. } | Self::AiControlled(_) => ErrorSeverity::Validation,
            Self::Battle(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::TurnPending => "SESSION_TURN_PENDING",
            Self::NotYourTurn { .. } => "SESSION_NOT_YOUR_TURN",
            Self::AiControlled(_) => "SESSION_AI_CONTROLLED",
            Self::Battle(error) => error.error_code(),
        }
    }
}

/// Logs `error` at a level matching its severity.
pub(crate) fn log_error(error: &SessionError) {
    let code = error.error_code();
    let severity = error.severity();
    if severity.is_internal() {
        tracing::error!(code, severity = severity.as_str(), "{}", error);
    } else {
        tracing::warn!(code, severity = severity.as_str(), "{}", error);
    }
}
