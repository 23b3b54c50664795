//! Ball registry for definition lookup.
//!
//! The `BallRegistry` stores the countryball catalog a bot loads at startup.
//! It provides fast lookup by `BallId` and by country name.

use rustc_hash::FxHashMap;

use super::definition::{BallDefinition, BallId};
use crate::core::error::{BattleError, Result};

/// Registry of ball definitions.
///
/// ## Example
///
/// ```
/// use countryball_battle::balls::{BallDefinition, BallId, BallRegistry};
///
/// let mut registry = BallRegistry::new();
/// registry.register(BallDefinition::new(BallId::new(1), "France")).unwrap();
///
/// assert_eq!(registry.get(BallId::new(1)).unwrap().country, "France");
/// assert!(registry.find_by_country("france").is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct BallRegistry {
    balls: FxHashMap<BallId, BallDefinition>,
}

impl BallRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a ball definition.
    ///
    /// Fails if a ball with the same ID already exists.
    pub fn register(&mut self, ball: BallDefinition) -> Result<()> {
        if self.balls.contains_key(&ball.id) {
            return Err(BattleError::DuplicateBall(ball.id));
        }
        self.balls.insert(ball.id, ball);
        Ok(())
    }

    /// Get a ball definition by ID.
    #[must_use]
    pub fn get(&self, id: BallId) -> Option<&BallDefinition> {
        self.balls.get(&id)
    }

    /// Find a ball by country name, ignoring case.
    #[must_use]
    pub fn find_by_country(&self, country: &str) -> Option<&BallDefinition> {
        self.balls
            .values()
            .find(|b| b.country.eq_ignore_ascii_case(country))
    }

    /// Check if a ball ID is registered.
    #[must_use]
    pub fn contains(&self, id: BallId) -> bool {
        self.balls.contains_key(&id)
    }

    /// Get the number of registered balls.
    #[must_use]
    pub fn len(&self) -> usize {
        self.balls.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    /// Iterate over all ball definitions.
    pub fn iter(&self) -> impl Iterator<Item = &BallDefinition> {
        self.balls.values()
    }
}

impl FromIterator<BallDefinition> for BallRegistry {
    /// Later definitions with a duplicate ID replace earlier ones.
    fn from_iter<I: IntoIterator<Item = BallDefinition>>(iter: I) -> Self {
        Self {
            balls: iter.into_iter().map(|b| (b.id, b)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut registry = BallRegistry::new();
        registry
            .register(BallDefinition::new(BallId::new(1), "France").with_stats(10, 5))
            .unwrap();

        assert!(registry.contains(BallId::new(1)));
        assert!(!registry.contains(BallId::new(2)));
        assert_eq!(registry.get(BallId::new(1)).unwrap().health, 10);
        assert!(registry.get(BallId::new(2)).is_none());
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut registry = BallRegistry::new();
        registry.register(BallDefinition::new(BallId::new(1), "France")).unwrap();

        let err = registry
            .register(BallDefinition::new(BallId::new(1), "Germany"))
            .unwrap_err();
        assert!(matches!(err, BattleError::DuplicateBall(id) if id == BallId::new(1)));
        assert_eq!(registry.get(BallId::new(1)).unwrap().country, "France");
    }

    #[test]
    fn test_find_by_country() {
        let registry: BallRegistry = vec![
            BallDefinition::new(BallId::new(1), "France"),
            BallDefinition::new(BallId::new(2), "Germany"),
        ]
        .into_iter()
        .collect();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.find_by_country("GERMANY").unwrap().id, BallId::new(2));
        assert!(registry.find_by_country("Spain").is_none());
    }

    #[test]
    fn test_empty() {
        let registry = BallRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.iter().count(), 0);
    }
}
