//! Battle configuration.
//!
//! Hosting bots configure the engine at startup with a `BattleConfig`,
//! either built in code or loaded from a TOML table:
//!
//! ```toml
//! max_roster_size = 3
//! min_damage_multiplier = 0.5
//! max_damage_multiplier = 1.5
//! ```

use serde::{Deserialize, Serialize};

use super::error::{BattleError, Result};

/// Default number of combatants each side may field.
pub const DEFAULT_MAX_ROSTER_SIZE: usize = 3;

/// Default lower bound of the damage multiplier.
pub const DEFAULT_MIN_DAMAGE_MULTIPLIER: f64 = 0.5;

/// Default upper bound of the damage multiplier.
pub const DEFAULT_MAX_DAMAGE_MULTIPLIER: f64 = 1.5;

/// Tunable battle rules.
///
/// ## Example
///
/// ```
/// use countryball_battle::core::BattleConfig;
///
/// let config = BattleConfig::default().with_max_roster_size(5);
/// assert_eq!(config.max_roster_size, 5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// Maximum combatants per side. A proposal is rejected once a side holds
    /// this many.
    pub max_roster_size: usize,

    /// Lower bound (inclusive) of the uniform damage multiplier.
    pub min_damage_multiplier: f64,

    /// Upper bound (exclusive) of the uniform damage multiplier.
    pub max_damage_multiplier: f64,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            max_roster_size: DEFAULT_MAX_ROSTER_SIZE,
            min_damage_multiplier: DEFAULT_MIN_DAMAGE_MULTIPLIER,
            max_damage_multiplier: DEFAULT_MAX_DAMAGE_MULTIPLIER,
        }
    }
}

impl BattleConfig {
    /// Parse and validate a config from TOML. Missing keys take defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the roster cap.
    #[must_use]
    pub fn with_max_roster_size(mut self, max: usize) -> Self {
        self.max_roster_size = max;
        self
    }

    /// Set the damage multiplier range.
    #[must_use]
    pub fn with_damage_multiplier(mut self, min: f64, max: f64) -> Self {
        self.min_damage_multiplier = min;
        self.max_damage_multiplier = max;
        self
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<()> {
        if self.max_roster_size == 0 {
            return Err(BattleError::InvalidConfig(
                "max_roster_size must be at least 1".to_string(),
            ));
        }
        let (min, max) = (self.min_damage_multiplier, self.max_damage_multiplier);
        if !min.is_finite() || !max.is_finite() || min < 0.0 || min > max {
            return Err(BattleError::InvalidConfig(format!(
                "damage multiplier range [{min}, {max}) is invalid"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BattleConfig::default();
        assert_eq!(config.max_roster_size, 3);
        assert_eq!(config.min_damage_multiplier, 0.5);
        assert_eq!(config.max_damage_multiplier, 1.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml_partial() {
        let config = BattleConfig::from_toml_str("max_roster_size = 5").unwrap();
        assert_eq!(config.max_roster_size, 5);
        assert_eq!(config.min_damage_multiplier, 0.5);

        let config = BattleConfig::from_toml_str("").unwrap();
        assert_eq!(config, BattleConfig::default());
    }

    #[test]
    fn test_from_toml_rejects_invalid() {
        assert!(matches!(
            BattleConfig::from_toml_str("max_roster_size = 0"),
            Err(BattleError::InvalidConfig(_))
        ));
        assert!(matches!(
            BattleConfig::from_toml_str("min_damage_multiplier = 2.0"),
            Err(BattleError::InvalidConfig(_))
        ));
        assert!(matches!(
            BattleConfig::from_toml_str("max_roster_size = \"three\""),
            Err(BattleError::Config(_))
        ));
    }

    #[test]
    fn test_builder() {
        let config = BattleConfig::default()
            .with_max_roster_size(1)
            .with_damage_multiplier(1.0, 1.0);
        assert_eq!(config.max_roster_size, 1);
        assert_eq!(config.min_damage_multiplier, 1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_serde_json() {
        let config = BattleConfig::default().with_max_roster_size(4);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: BattleConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
