//! Roster building - who may add which ball to which side.
//!
//! `validate_proposal` is the whole policy: route a proposal to the
//! proposer's side and reject it if the proposer is not a participant or
//! their side is already full. `RosterBuilder` applies that policy while
//! accumulating combatants for one battle.

use super::combatant::Combatant;
use super::roster::RosterPair;
use crate::balls::BallInstance;
use crate::core::config::BattleConfig;
use crate::core::error::{BattleError, Result};
use crate::core::participant::{Participant, ParticipantId, Side, SideMap};

/// Decide which side a proposed combatant joins.
///
/// The author's side takes priority when author and opponent are the same
/// participant. A side is full once it holds `max_roster_size` combatants.
///
/// ```
/// use countryball_battle::battle::validate_proposal;
/// use countryball_battle::core::{ParticipantId, Side, SideMap};
///
/// let (alice, bob) = (ParticipantId::new(1), ParticipantId::new(2));
/// let sizes = SideMap::from_pair(3, 1);
///
/// assert_eq!(validate_proposal(bob, alice, bob, &sizes, 3).unwrap(), Side::B);
/// assert!(validate_proposal(alice, alice, bob, &sizes, 3).is_err());
/// ```
pub fn validate_proposal(
    proposer: ParticipantId,
    author: ParticipantId,
    opponent: ParticipantId,
    sizes: &SideMap<usize>,
    max_roster_size: usize,
) -> Result<Side> {
    let side = if proposer == author {
        Side::A
    } else if proposer == opponent {
        Side::B
    } else {
        return Err(BattleError::NotAParticipant);
    };

    if sizes[side] >= max_roster_size {
        return Err(BattleError::RosterFull {
            side,
            max: max_roster_size,
        });
    }

    Ok(side)
}

/// Accumulates both rosters for one battle.
#[derive(Clone, Debug)]
pub struct RosterBuilder {
    participants: SideMap<Participant>,
    pair: RosterPair,
    max_roster_size: usize,
}

impl RosterBuilder {
    /// Start an empty battle between `author` (side A) and `opponent` (side B).
    #[must_use]
    pub fn new(author: Participant, opponent: Participant, config: &BattleConfig) -> Self {
        Self {
            participants: SideMap::from_pair(author, opponent),
            pair: RosterPair::new(),
            max_roster_size: config.max_roster_size,
        }
    }

    /// The participant owning a side.
    #[must_use]
    pub fn participant(&self, side: Side) -> &Participant {
        &self.participants[side]
    }

    /// Both participants.
    #[must_use]
    pub fn participants(&self) -> &SideMap<Participant> {
        &self.participants
    }

    /// The side a participant plays on, if any.
    #[must_use]
    pub fn side_of(&self, id: ParticipantId) -> Option<Side> {
        Side::BOTH
            .into_iter()
            .find(|&side| self.participants[side].id == id)
    }

    /// Add a ball to the proposer's side.
    ///
    /// The resulting combatant is owned by the proposer. Rejections leave the
    /// rosters untouched.
    pub fn propose(&mut self, proposer: ParticipantId, instance: &BallInstance) -> Result<Side> {
        let side = validate_proposal(
            proposer,
            self.participants[Side::A].id,
            self.participants[Side::B].id,
            &self.pair.sizes(),
            self.max_roster_size,
        )?;

        let combatant = Combatant::from_instance(instance, self.participants[side].clone());
        tracing::debug!(
            proposer = proposer.raw(),
            ?side,
            ball = %instance.summary(),
            "combatant added"
        );
        self.pair.push(side, combatant);
        Ok(side)
    }

    /// Remove the first combatant named `name` from the proposer's side.
    pub fn withdraw(&mut self, proposer: ParticipantId, name: &str) -> Result<Combatant> {
        let side = self.side_of(proposer).ok_or(BattleError::NotAParticipant)?;
        let roster = self.pair.roster_mut(side);
        let position = roster
            .iter()
            .position(|c| c.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| BattleError::CombatantNotFound(name.to_string()))?;

        tracing::debug!(proposer = proposer.raw(), ?side, name, "combatant withdrawn");
        Ok(roster.remove(position))
    }

    /// Both sides have at least one combatant.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.first_empty_side().is_none()
    }

    /// The first side (A before B) with no combatants.
    #[must_use]
    pub fn first_empty_side(&self) -> Option<Side> {
        Side::BOTH
            .into_iter()
            .find(|&side| self.pair.roster(side).is_empty())
    }

    /// Current rosters.
    #[must_use]
    pub fn pair(&self) -> &RosterPair {
        &self.pair
    }

    /// Hand the participants and rosters over for simulation.
    #[must_use]
    pub fn into_parts(self) -> (SideMap<Participant>, RosterPair) {
        (self.participants, self.pair)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balls::{BallDefinition, BallId};

    fn alice() -> Participant {
        Participant::new(1, "alice")
    }

    fn bob() -> Participant {
        Participant::new(2, "bob")
    }

    fn ball(country: &str) -> BallInstance {
        BallInstance::new(1, BallDefinition::new(BallId::new(1), country).with_stats(100, 10))
    }

    #[test]
    fn test_validate_routes_by_proposer() {
        let sizes = SideMap::with_value(0);
        let (a, b) = (alice().id, bob().id);

        assert_eq!(validate_proposal(a, a, b, &sizes, 3).unwrap(), Side::A);
        assert_eq!(validate_proposal(b, a, b, &sizes, 3).unwrap(), Side::B);
        assert!(matches!(
            validate_proposal(ParticipantId::new(9), a, b, &sizes, 3),
            Err(BattleError::NotAParticipant)
        ));
    }

    #[test]
    fn test_validate_cap_is_exclusive() {
        let (a, b) = (alice().id, bob().id);

        let sizes = SideMap::from_pair(2, 3);
        assert_eq!(validate_proposal(a, a, b, &sizes, 3).unwrap(), Side::A);
        assert!(matches!(
            validate_proposal(b, a, b, &sizes, 3),
            Err(BattleError::RosterFull { side: Side::B, max: 3 })
        ));
    }

    #[test]
    fn test_self_battle_routes_to_author() {
        let sizes = SideMap::with_value(0);
        let a = alice().id;
        assert_eq!(validate_proposal(a, a, a, &sizes, 3).unwrap(), Side::A);
    }

    #[test]
    fn test_propose_fourth_ball_rejected() {
        let mut builder = RosterBuilder::new(alice(), bob(), &BattleConfig::default());

        for country in ["France", "Spain", "Italy"] {
            assert_eq!(builder.propose(alice().id, &ball(country)).unwrap(), Side::A);
        }
        let err = builder.propose(alice().id, &ball("Greece")).unwrap_err();
        assert!(matches!(err, BattleError::RosterFull { side: Side::A, max: 3 }));
        assert_eq!(builder.pair().side_a.len(), 3);

        // Opponent's side is unaffected by the author's cap
        assert_eq!(builder.propose(bob().id, &ball("Greece")).unwrap(), Side::B);
    }

    #[test]
    fn test_propose_sets_owner() {
        let mut builder = RosterBuilder::new(alice(), bob(), &BattleConfig::default());
        builder.propose(bob().id, &ball("Peru")).unwrap();

        let combatant = &builder.pair().side_b[0];
        assert_eq!(combatant.owner, bob());
        assert_eq!(combatant.name, "Peru");
    }

    #[test]
    fn test_outsider_rejected_without_mutation() {
        let mut builder = RosterBuilder::new(alice(), bob(), &BattleConfig::default());
        let err = builder.propose(ParticipantId::new(3), &ball("Peru")).unwrap_err();
        assert!(err.is_permission());
        assert_eq!(builder.pair().sizes(), SideMap::with_value(0));
    }

    #[test]
    fn test_withdraw() {
        let mut builder = RosterBuilder::new(alice(), bob(), &BattleConfig::default());
        builder.propose(alice().id, &ball("France")).unwrap();
        builder.propose(alice().id, &ball("Spain")).unwrap();

        let removed = builder.withdraw(alice().id, "france").unwrap();
        assert_eq!(removed.name, "France");
        assert_eq!(builder.pair().side_a.len(), 1);

        assert!(matches!(
            builder.withdraw(alice().id, "France"),
            Err(BattleError::CombatantNotFound(_))
        ));
        assert!(matches!(
            builder.withdraw(bob().id, "Spain"),
            Err(BattleError::CombatantNotFound(_))
        ));
        assert!(matches!(
            builder.withdraw(ParticipantId::new(3), "Spain"),
            Err(BattleError::NotAParticipant)
        ));
    }

    #[test]
    fn test_readiness() {
        let mut builder = RosterBuilder::new(alice(), bob(), &BattleConfig::default());
        assert_eq!(builder.first_empty_side(), Some(Side::A));

        builder.propose(alice().id, &ball("France")).unwrap();
        assert_eq!(builder.first_empty_side(), Some(Side::B));
        assert!(!builder.is_ready());

        builder.propose(bob().id, &ball("Italy")).unwrap();
        assert!(builder.is_ready());
        assert_eq!(builder.side_of(bob().id), Some(Side::B));
    }
}
