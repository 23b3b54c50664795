//! Countryball catalog: definitions, owned instances, and registry.
//!
//! ## Key Types
//!
//! - `BallId`: Identifier for ball definitions
//! - `BallDefinition`: Catalog stats and ability text
//! - `BallInstance`: A player's copy with percentage bonuses
//! - `BallRegistry`: Definition lookup

pub mod definition;
pub mod instance;
pub mod registry;

pub use definition::{BallDefinition, BallId};
pub use instance::BallInstance;
pub use registry::BallRegistry;
