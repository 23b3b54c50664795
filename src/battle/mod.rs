//! Battles: combatants, rosters, the simulator, and its report.
//!
//! ## Flow
//!
//! 1. `RosterBuilder` accumulates each participant's combatants, enforcing
//!    ownership routing and the roster cap.
//! 2. `BattleSimulation` consumes the `RosterPair`, yielding one
//!    `AttackEvent` per attack and stamping the winner when exhausted.
//! 3. `BattleReport` renders the events and result as text.

pub mod builder;
pub mod combatant;
pub mod event;
pub mod report;
pub mod roster;
pub mod simulator;

pub use builder::{validate_proposal, RosterBuilder};
pub use combatant::Combatant;
pub use event::{AttackEvent, AttackOutcome, Fighter};
pub use report::{BattleReport, LOG_FILE_NAME};
pub use roster::{BattleResult, Roster, RosterPair};
pub use simulator::{resolve_attack, BattleSimulation};
