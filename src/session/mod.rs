//! Battle sessions: one proposed battle per server.

pub mod store;

pub use store::{BattleSession, SessionKey, SessionStore};
