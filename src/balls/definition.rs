//! Ball definitions - static countryball data.
//!
//! `BallDefinition` holds the catalog stats of a countryball type: base
//! health and attack, economy, and its ability ("capacity"). These are the
//! stat records the merge feature blends.
//!
//! Player-owned copies with percentage bonuses are `BallInstance`s.

use serde::{Deserialize, Serialize};

/// Unique identifier for a ball definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BallId(pub u32);

impl BallId {
    /// Create a new ball ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for BallId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ball({})", self.0)
    }
}

/// Static ball definition.
///
/// ## Example
///
/// ```
/// use countryball_battle::balls::{BallDefinition, BallId};
///
/// let france = BallDefinition::new(BallId::new(1), "France")
///     .with_stats(1200, 900)
///     .with_capacity("Revolution", "Deals damage to Germany when attacked");
///
/// assert_eq!(france.short_name, "France");
/// assert_eq!(france.attack, 900);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BallDefinition {
    /// Unique identifier for this definition.
    pub id: BallId,

    /// Full country name.
    pub country: String,

    /// Shortened display name. Defaults to the country name.
    pub short_name: String,

    /// Base health.
    pub health: i64,

    /// Base attack.
    pub attack: i64,

    /// Economy label. Carried through merges unchanged.
    #[serde(default)]
    pub economy: Option<String>,

    /// Ability name.
    #[serde(default)]
    pub capacity_name: String,

    /// Ability description.
    #[serde(default)]
    pub capacity_description: String,
}

impl BallDefinition {
    /// Create a new definition with zero stats and no ability.
    #[must_use]
    pub fn new(id: BallId, country: impl Into<String>) -> Self {
        let country = country.into();
        Self {
            id,
            short_name: country.clone(),
            country,
            health: 0,
            attack: 0,
            economy: None,
            capacity_name: String::new(),
            capacity_description: String::new(),
        }
    }

    /// Set the short display name.
    #[must_use]
    pub fn with_short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = short_name.into();
        self
    }

    /// Set base health and attack.
    #[must_use]
    pub fn with_stats(mut self, health: i64, attack: i64) -> Self {
        self.health = health;
        self.attack = attack;
        self
    }

    /// Set the economy label.
    #[must_use]
    pub fn with_economy(mut self, economy: impl Into<String>) -> Self {
        self.economy = Some(economy.into());
        self
    }

    /// Set the ability name and description.
    #[must_use]
    pub fn with_capacity(
        mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.capacity_name = name.into();
        self.capacity_description = description.into();
        self
    }
}
