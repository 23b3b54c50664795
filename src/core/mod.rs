//! Core types: participants, sides, RNG, configuration, errors.

pub mod config;
pub mod error;
pub mod participant;
pub mod rng;

pub use config::BattleConfig;
pub use error::{BattleError, Result};
pub use participant::{Participant, ParticipantId, Side, SideMap};
pub use rng::{BattleRng, RandomSource};
