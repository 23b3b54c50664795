//! # countryball-battle
//!
//! Turn-based countryball battles, per-server battle sessions, and ball
//! merging for a collectible bot. Transport (slash commands, embeds, card
//! images) belongs to the hosting bot; this crate only produces data and
//! plain text for it.
//!
//! ## Design Principles
//!
//! 1. **Injectable Randomness**: Every random draw goes through
//!    `RandomSource`, so battles and merges replay exactly under a seed.
//!
//! 2. **Lazy Battles**: `BattleSimulation` yields one attack per `next`
//!    and has no side effects beyond the `RosterPair` it borrows.
//!
//! 3. **Explicit Sessions**: One `SessionStore` owns every in-progress
//!    battle, keyed by server, mutated through `&mut self` only.
//!
//! ## Modules
//!
//! - `core`: Participants, sides, RNG, configuration, errors
//! - `balls`: Ball definitions, owned instances, registry
//! - `battle`: Combatants, rosters, simulator, report
//! - `session`: Per-server battle lifecycle
//! - `merge`: Blending two balls into a new one

pub mod balls;
pub mod battle;
pub mod core;
pub mod merge;
pub mod session;

// Re-export commonly used types
pub use crate::balls::{BallDefinition, BallId, BallInstance, BallRegistry};
pub use crate::battle::{
    validate_proposal, AttackEvent, AttackOutcome, BattleReport, BattleResult, BattleSimulation,
    Combatant, RosterBuilder, RosterPair,
};
pub use crate::core::{
    BattleConfig, BattleError, BattleRng, Participant, ParticipantId, RandomSource, Result, Side,
    SideMap,
};
pub use crate::merge::merge_balls;
pub use crate::session::{BattleSession, SessionKey, SessionStore};
