//! Error types for the battle engine.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{BattleStatus, Side, UnitId};

/// Errors surfaced when the host drives the engine incorrectly.
///
/// In-game failures (cooldowns, energy, fallen targets, misses) are never
/// errors; they are logged as battle events instead.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleError {
    #[error("battle has not been initialized")]
    NotInitialized,

    #[error("battle has already been initialized")]
    AlreadyInitialized,

    #[error("battle is over ({status})")]
    BattleOver { status: BattleStatus },

    #[error("unknown unit id '{0}'")]
    UnknownUnit(UnitId),

    #[error("unit id '{0}' appears more than once")]
    DuplicateUnit(UnitId),

    #[error("{side} roster is empty")]
    EmptyRoster { side: Side },

    #[error("unit '{0}' is not controlled by the AI")]
    NotAiControlled(UnitId),

    #[error("no unit is due to act")]
    NoCurrentUnit,
}

impl GameError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::BattleOver { .. } => ErrorSeverity::Fatal,
            Self::NoCurrentUnit => ErrorSeverity::Internal,
            Self::NotInitialized
            | Self::AlreadyInitialized
            | Self::UnknownUnit(_)
            | Self::DuplicateUnit(_)
            | Self::EmptyRoster { .. }
            | Self::NotAiControlled(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotInitialized => "BATTLE_NOT_INITIALIZED",
            Self::AlreadyInitialized => "BATTLE_ALREADY_INITIALIZED",
            Self::BattleOver { .. } => "BATTLE_OVER",
            Self::UnknownUnit(_) => "BATTLE_UNKNOWN_UNIT",
            Self::DuplicateUnit(_) => "BATTLE_DUPLICATE_UNIT",
            Self::EmptyRoster { .. } => "BATTLE_EMPTY_ROSTER",
            Self::NotAiControlled(_) => "BATTLE_NOT_AI_CONTROLLED",
            Self::NoCurrentUnit => "BATTLE_NO_CURRENT_UNIT",
        }
    }
}
