//! Attack events - one resolved attack each.

use serde::{Deserialize, Serialize};

use crate::core::participant::Side;

/// Who took part in an attack, as shown in the log.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fighter {
    pub side: Side,
    /// Position in the side's roster.
    pub index: usize,
    pub name: String,
    pub owner_name: String,
}

impl std::fmt::Display for Fighter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}'s {}", self.owner_name, self.name)
    }
}

/// What an attack did to its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackOutcome {
    /// Target survived with this much damage dealt.
    Damage(i64),
    /// Target was killed; the damage is kept for inspection.
    Kill(i64),
}

impl AttackOutcome {
    /// Damage dealt by the attack.
    #[must_use]
    pub const fn damage(self) -> i64 {
        match self {
            Self::Damage(d) | Self::Kill(d) => d,
        }
    }

    /// Check if the attack killed its target.
    #[must_use]
    pub const fn is_kill(self) -> bool {
        matches!(self, Self::Kill(_))
    }
}

/// One resolved attack.
///
/// `Display` renders the battle log line.
///
/// ```
/// use countryball_battle::battle::{AttackEvent, AttackOutcome, Fighter};
/// use countryball_battle::core::Side;
///
/// let fighter = |side, name: &str, owner: &str| Fighter {
///     side,
///     index: 0,
///     name: name.into(),
///     owner_name: owner.into(),
/// };
/// let event = AttackEvent {
///     attacker: fighter(Side::A, "France", "alice"),
///     defender: fighter(Side::B, "Italy", "bob"),
///     outcome: AttackOutcome::Damage(12),
/// };
/// assert_eq!(event.to_string(), "alice's France has dealt 12 damage to bob's Italy");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttackEvent {
    pub attacker: Fighter,
    pub defender: Fighter,
    pub outcome: AttackOutcome,
}

impl std::fmt::Display for AttackEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.outcome {
            AttackOutcome::Kill(_) => write!(f, "{} has killed {}", self.attacker, self.defender),
            AttackOutcome::Damage(d) => write!(
                f,
                "{} has dealt {} damage to {}",
                self.attacker, d, self.defender
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fighter(side: Side, name: &str, owner: &str) -> Fighter {
        Fighter {
            side,
            index: 0,
            name: name.to_string(),
            owner_name: owner.to_string(),
        }
    }

    #[test]
    fn test_kill_line() {
        let event = AttackEvent {
            attacker: fighter(Side::B, "Italy", "bob"),
            defender: fighter(Side::A, "France", "alice"),
            outcome: AttackOutcome::Kill(40),
        };
        assert_eq!(event.to_string(), "bob's Italy has killed alice's France");
        assert!(event.outcome.is_kill());
        assert_eq!(event.outcome.damage(), 40);
    }

    #[test]
    fn test_damage_outcome() {
        let outcome = AttackOutcome::Damage(7);
        assert!(!outcome.is_kill());
        assert_eq!(outcome.damage(), 7);
    }
}
