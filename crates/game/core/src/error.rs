//! Shared error classification for battle-core.
//!
//! Anything a player can trigger during play (a spent cooldown, missing
//! energy, a fallen target) is a battle event, not an error. Errors mean the
//! host drove the engine incorrectly, and each one reports how bad that is so
//! hosts can choose between logging and aborting.
//!
//! Concrete error enums live next to the operations they guard
//! (e.g. [`crate::engine::BattleError`]).

/// How a host should treat an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Retry later with the same request (a turn still awaiting presentation).
    Recoverable,

    /// Bad input; retrying unchanged fails again (unknown unit, wrong side).
    Validation,

    /// The engine's own bookkeeping is inconsistent.
    Internal,

    /// The battle cannot accept further input (it already ended).
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Internal and fatal errors; worth an `error!` rather than a `warn!`.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Implemented by every error enum the engine and its hosts surface.
///
/// Derive `Display`/`Error` with `thiserror`; classify severity by what the
/// caller can do about it, not by impact.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier for the variant, suitable for logs and clients.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_recoverable_is_retryable() {
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert!(!ErrorSeverity::Validation.is_recoverable());
        assert!(ErrorSeverity::Fatal.is_internal());
        assert!(!ErrorSeverity::Validation.is_internal());
        assert_eq!(ErrorSeverity::Internal.as_str(), "internal");
    }
}
