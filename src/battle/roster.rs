//! Roster pair - both sides of one battle plus its outcome.
//!
//! Rosters are built incrementally (see `RosterBuilder`), then consumed once
//! by `BattleSimulation`, which mutates combatants in place and stamps
//! `winner` and `turns` when the battle ends.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::combatant::Combatant;
use crate::core::participant::{ParticipantId, Side, SideMap};

/// One side's combatants, in the order they were added.
///
/// SmallVec keeps typical rosters (capped at a handful) off the heap.
pub type Roster = SmallVec<[Combatant; 4]>;

/// Outcome of a finished battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BattleResult {
    /// Owner of the surviving side.
    pub winner: ParticipantId,
    /// Number of attacks resolved.
    pub turns: u32,
}

/// The two opposing rosters and the derived result fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterPair {
    /// Side A (battle author).
    pub side_a: Roster,
    /// Side B (opponent).
    pub side_b: Roster,
    /// Set when a simulation has been drained. `None` before.
    pub winner: Option<ParticipantId>,
    /// Attacks resolved by the simulation. Zero until drained.
    pub turns: u32,
}

impl RosterPair {
    /// Create an empty pair.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pair from two prepared rosters.
    pub fn from_rosters(
        side_a: impl IntoIterator<Item = Combatant>,
        side_b: impl IntoIterator<Item = Combatant>,
    ) -> Self {
        Self {
            side_a: side_a.into_iter().collect(),
            side_b: side_b.into_iter().collect(),
            winner: None,
            turns: 0,
        }
    }

    /// Get a side's roster.
    #[must_use]
    pub fn roster(&self, side: Side) -> &Roster {
        match side {
            Side::A => &self.side_a,
            Side::B => &self.side_b,
        }
    }

    /// Get a side's roster mutably.
    pub fn roster_mut(&mut self, side: Side) -> &mut Roster {
        match side {
            Side::A => &mut self.side_a,
            Side::B => &mut self.side_b,
        }
    }

    /// Borrow `side`'s roster and its opponent's roster at once.
    pub fn split_mut(&mut self, side: Side) -> (&mut Roster, &mut Roster) {
        match side {
            Side::A => (&mut self.side_a, &mut self.side_b),
            Side::B => (&mut self.side_b, &mut self.side_a),
        }
    }

    /// Append a combatant to a side.
    pub fn push(&mut self, side: Side, combatant: Combatant) {
        self.roster_mut(side).push(combatant);
    }

    /// Number of combatants on each side, dead or alive.
    #[must_use]
    pub fn sizes(&self) -> SideMap<usize> {
        SideMap::from_pair(self.side_a.len(), self.side_b.len())
    }

    /// Positions of the living combatants on a side.
    #[must_use]
    pub fn alive_indices(&self, side: Side) -> SmallVec<[usize; 4]> {
        alive_indices(self.roster(side))
    }

    /// A side is defeated iff every combatant on it is dead.
    ///
    /// An empty side counts as defeated.
    #[must_use]
    pub fn is_defeated(&self, side: Side) -> bool {
        self.roster(side).iter().all(|c| c.dead)
    }

    /// The stamped result, once a simulation has finished.
    #[must_use]
    pub fn result(&self) -> Option<BattleResult> {
        self.winner.map(|winner| BattleResult {
            winner,
            turns: self.turns,
        })
    }
}

pub(crate) fn alive_indices(roster: &[Combatant]) -> SmallVec<[usize; 4]> {
    roster
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_alive())
        .map(|(i, _)| i)
        .collect()
}
