//! The engine's fatal error hierarchy (C12, §7).
//!
//! Grounded on the other-pack repos' `thiserror`-derived top-level error
//! enums (e.g. `mingu600-tapu-simu`'s battle error type); the teacher itself
//! has no fallible boundary worth modeling since its `BattleState` mutations
//! never fail.
//!
//! Only the four fatal conditions named in §7 live here. `InputInvalid` is
//! deliberately absent: a malformed `UserEvent` is a [`crate::creature::LocalInputError`],
//! caught and logged at the turn-state-machine boundary, never escaping as an
//! `EngineError` (§4.11, §7).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A `UserEvent` variant this build of the engine does not implement
    /// (e.g. `GiveUp` reaching a component that does not handle surrender).
    #[error("unsupported event")]
    UnsupportedEvent,

    /// A type named in creature or move data has no row in the loaded
    /// effectiveness table.
    #[error("unsupported type chart entry: {0}")]
    UnsupportedTypeChart(String),

    /// The template provider could not resolve a named template (not found,
    /// or the backing store is unreachable after retries).
    #[error("template unavailable: {0}")]
    TemplateUnavailable(String),

    /// A remote template fetch failed for a reason expected to be transient
    /// (timeout, connection reset); callers may retry.
    #[error("transient network error: {0}")]
    NetworkTransient(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_carry_context() {
        let err = EngineError::TemplateUnavailable("charizard".into());
        assert_eq!(err.to_string(), "template unavailable: charizard");
    }

    #[test]
    fn unsupported_event_has_fixed_message() {
        assert_eq!(EngineError::UnsupportedEvent.to_string(), "unsupported event");
    }
}
