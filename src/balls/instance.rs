//! Ball instances - player-owned countryballs.
//!
//! An instance wraps a `BallDefinition` with percentage bonuses rolled when
//! the ball was caught. Effective stats are the base stats scaled by
//! `(100 + bonus) / 100`, truncated toward zero.

use serde::{Deserialize, Serialize};

use super::definition::BallDefinition;

/// A caught countryball.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BallInstance {
    /// Instance number shown to players (`#id`).
    pub instance_id: u64,

    /// Catalog definition.
    pub ball: BallDefinition,

    /// Health bonus in percent (may be negative).
    pub health_bonus: i32,

    /// Attack bonus in percent (may be negative).
    pub attack_bonus: i32,
}

impl BallInstance {
    /// Create an instance with no bonuses.
    #[must_use]
    pub fn new(instance_id: u64, ball: BallDefinition) -> Self {
        Self {
            instance_id,
            ball,
            health_bonus: 0,
            attack_bonus: 0,
        }
    }

    /// Set the percentage bonuses.
    #[must_use]
    pub fn with_bonuses(mut self, health_bonus: i32, attack_bonus: i32) -> Self {
        self.health_bonus = health_bonus;
        self.attack_bonus = attack_bonus;
        self
    }

    /// Effective health after bonus.
    #[must_use]
    pub fn health(&self) -> i64 {
        apply_bonus(self.ball.health, self.health_bonus)
    }

    /// Effective attack after bonus.
    #[must_use]
    pub fn attack(&self) -> i64 {
        apply_bonus(self.ball.attack, self.attack_bonus)
    }

    /// Short description, e.g. `#12 France (+5%/-3%)` (attack bonus first).
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "#{} {} ({}/{})",
            self.instance_id,
            self.ball.country,
            signed_percent(self.attack_bonus),
            signed_percent(self.health_bonus),
        )
    }
}

fn apply_bonus(base: i64, bonus: i32) -> i64 {
    base * (100 + i64::from(bonus)) / 100
}

fn signed_percent(bonus: i32) -> String {
    if bonus >= 0 {
        format!("+{bonus}%")
    } else {
        format!("{bonus}%")
    }
}
