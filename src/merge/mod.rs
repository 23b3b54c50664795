//! Merging two countryballs into a new one.
//!
//! Two stat records go in, one comes out:
//!
//! - **Name**: `blend_names` of the short names
//! - **Health, attack**: integer average
//! - **Ability name**: `blend_ability_names`
//! - **Ability description**: `splice_descriptions`, the only random part
//! - **ID, country, economy**: taken from the first ball
//!
//! The result is a new definition for card rendering. Neither input is
//! modified.

pub mod ability;
pub mod name;

pub use ability::{splice_descriptions, AbilityComponents};
pub use name::{blend_ability_names, blend_names};

use crate::balls::BallDefinition;
use crate::core::rng::RandomSource;

/// Merge two ball definitions.
///
/// ```
/// use countryball_battle::balls::{BallDefinition, BallId};
/// use countryball_battle::core::BattleRng;
/// use countryball_battle::merge::merge_balls;
///
/// let france = BallDefinition::new(BallId::new(1), "France").with_stats(1000, 400);
/// let germany = BallDefinition::new(BallId::new(2), "Germany").with_stats(1201, 601);
///
/// let merged = merge_balls(&france, &germany, &mut BattleRng::new(1));
/// assert_eq!(merged.short_name, "Francey");
/// assert_eq!(merged.health, 1100);
/// assert_eq!(merged.attack, 500);
/// ```
pub fn merge_balls<R: RandomSource + ?Sized>(
    first: &BallDefinition,
    second: &BallDefinition,
    rng: &mut R,
) -> BallDefinition {
    let merged = BallDefinition {
        short_name: blend_names(&first.short_name, &second.short_name),
        health: (first.health + second.health).div_euclid(2),
        attack: (first.attack + second.attack).div_euclid(2),
        capacity_name: blend_ability_names(&first.capacity_name, &second.capacity_name),
        capacity_description: splice_descriptions(
            &first.capacity_description,
            &second.capacity_description,
            rng,
        ),
        ..first.clone()
    };

    tracing::debug!(
        first = %first.short_name,
        second = %second.short_name,
        merged = %merged.short_name,
        "balls merged"
    );
    merged
}
