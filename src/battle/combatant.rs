//! Combatants - countryballs fielded in a battle.
//!
//! A `Combatant` is created from a `BallInstance` when a participant adds it
//! to their roster. From then on only `health` and `dead` change.

use serde::{Deserialize, Serialize};

use crate::balls::BallInstance;
use crate::core::participant::Participant;

/// A countryball taking part in a battle.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Combatant {
    /// Display name (the ball's country).
    pub name: String,

    /// Participant who fielded this ball.
    pub owner: Participant,

    /// Remaining health. Never negative once the battle ends.
    pub health: i64,

    /// Attack power.
    pub attack: i64,

    /// Set once health reaches zero. Death is permanent.
    pub dead: bool,
}

impl Combatant {
    /// Create a combatant.
    ///
    /// Starting health at or below zero yields a dead combatant at zero
    /// health, as if it had already been struck down.
    #[must_use]
    pub fn new(name: impl Into<String>, owner: Participant, health: i64, attack: i64) -> Self {
        Self {
            name: name.into(),
            owner,
            health: health.max(0),
            attack,
            dead: health <= 0,
        }
    }

    /// Create a combatant from an owned ball, using its effective stats.
    #[must_use]
    pub fn from_instance(instance: &BallInstance, owner: Participant) -> Self {
        Self::new(
            instance.ball.country.clone(),
            owner,
            instance.health(),
            instance.attack(),
        )
    }

    /// Create a combatant that is already dead.
    #[must_use]
    pub fn fallen(name: impl Into<String>, owner: Participant, attack: i64) -> Self {
        Self::new(name, owner, 0, attack)
    }

    /// Check if this combatant can still act and be targeted.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        !self.dead
    }

    /// Subtract damage, clamping health at zero.
    ///
    /// Returns true if this hit killed the combatant.
    pub fn take_damage(&mut self, damage: i64) -> bool {
        if self.dead {
            return false;
        }
        self.health = self.health.saturating_sub(damage);
        if self.health <= 0 {
            self.health = 0;
            self.dead = true;
        }
        self.dead
    }
}
