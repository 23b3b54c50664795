//! Crate error type.
//!
//! Every failure here is a precondition violation reported synchronously to
//! the caller. Nothing is retried.

use crate::balls::BallId;

use super::participant::Side;

/// Errors returned by roster building, sessions, registries and config.
#[derive(Debug, thiserror::Error)]
pub enum BattleError {
    /// The caller is neither participant of the battle.
    #[error("You aren't a part of this battle")]
    NotAParticipant,

    /// The caller's side already holds the maximum number of combatants.
    #[error("You can only have {max} countryballs in a battle ({side} is full)")]
    RosterFull { side: Side, max: usize },

    /// A roster has no combatants at all.
    #[error("Both players must add countryballs ({0} is empty)")]
    EmptyRoster(Side),

    /// A living combatant's attack can never deal damage.
    #[error("{name} on {side} cannot deal any damage")]
    Harmless { side: Side, name: String },

    /// No battle session exists for the key.
    #[error("There is no battle going on in the server")]
    NoActiveBattle,

    /// A battle session already exists for the key.
    #[error("There is already a battle going on in this server")]
    BattleInProgress,

    /// No combatant with this name on the caller's side.
    #[error("No countryball named {0:?} in your roster")]
    CombatantNotFound(String),

    /// A ball with this ID is already registered.
    #[error("Ball {0} is already registered")]
    DuplicateBall(BallId),

    /// Configuration values are out of range.
    #[error("Invalid battle config: {0}")]
    InvalidConfig(String),

    /// Configuration could not be parsed.
    #[error("Failed to parse battle config: {0}")]
    Config(#[from] toml::de::Error),
}

impl BattleError {
    /// Returns true if the error was caused by who is calling rather than
    /// by the battle state.
    #[must_use]
    pub const fn is_permission(&self) -> bool {
        matches!(self, Self::NotAParticipant)
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BattleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let full = BattleError::RosterFull { side: Side::A, max: 3 };
        assert_eq!(
            full.to_string(),
            "You can only have 3 countryballs in a battle (side A is full)"
        );
        assert_eq!(
            BattleError::EmptyRoster(Side::B).to_string(),
            "Both players must add countryballs (side B is empty)"
        );
        assert!(BattleError::NotAParticipant.is_permission());
        assert!(!BattleError::NoActiveBattle.is_permission());
    }

    #[test]
    fn test_toml_error_converts() {
        let err: BattleError = toml::from_str::<toml::Value>("= nope").unwrap_err().into();
        assert!(matches!(err, BattleError::Config(_)));
    }
}
