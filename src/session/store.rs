//! Per-server battle sessions.
//!
//! A server hosts at most one battle at a time. A session lives from `open`
//! until `start` (which runs the battle and frees the server) or `cancel`.
//! The store is mutated through `&mut self` only, so each session has a
//! single writer; hosts sharing a store across tasks wrap it in a mutex.

use rustc_hash::FxHashMap;

use crate::balls::BallInstance;
use crate::battle::{BattleReport, BattleSimulation, Combatant, RosterBuilder};
use crate::core::config::BattleConfig;
use crate::core::error::{BattleError, Result};
use crate::core::participant::{Participant, ParticipantId, Side};
use crate::core::rng::RandomSource;

/// Session key: the server (guild) a battle belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionKey(pub u64);

impl SessionKey {
    /// Create a new session key.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for SessionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Session({})", self.0)
    }
}

/// A battle being proposed in one server.
#[derive(Clone, Debug)]
pub struct BattleSession {
    builder: RosterBuilder,
}

impl BattleSession {
    /// The participant who opened the battle.
    #[must_use]
    pub fn author(&self) -> &Participant {
        self.builder.participant(Side::A)
    }

    /// The challenged participant.
    #[must_use]
    pub fn opponent(&self) -> &Participant {
        self.builder.participant(Side::B)
    }

    /// Rosters proposed so far.
    #[must_use]
    pub fn builder(&self) -> &RosterBuilder {
        &self.builder
    }

    fn ensure_participant(&self, id: ParticipantId) -> Result<Side> {
        self.builder.side_of(id).ok_or(BattleError::NotAParticipant)
    }
}

/// All in-progress battles, keyed by server.
///
/// ## Example
///
/// ```
/// use countryball_battle::balls::{BallDefinition, BallId, BallInstance};
/// use countryball_battle::core::{BattleConfig, BattleRng, Participant};
/// use countryball_battle::session::{SessionKey, SessionStore};
///
/// let mut store = SessionStore::new(BattleConfig::default());
/// let guild = SessionKey::new(10);
/// let alice = Participant::new(1, "alice");
/// let bob = Participant::new(2, "bob");
///
/// store.open(guild, alice.clone(), bob.clone()).unwrap();
/// let strong = BallDefinition::new(BallId::new(1), "France").with_stats(1, 1000);
/// let weak = BallDefinition::new(BallId::new(2), "Italy").with_stats(1, 1);
/// store.propose(guild, alice.id, &BallInstance::new(1, strong)).unwrap();
/// store.propose(guild, bob.id, &BallInstance::new(2, weak)).unwrap();
///
/// let report = store.start(guild, bob.id, BattleRng::new(7)).unwrap();
/// assert_eq!(report.summary, "alice vs bob\nWinner: alice");
/// assert!(store.get(guild).is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct SessionStore {
    sessions: FxHashMap<SessionKey, BattleSession>,
    config: BattleConfig,
}

impl SessionStore {
    /// Create an empty store using `config` for every battle.
    #[must_use]
    pub fn new(config: BattleConfig) -> Self {
        Self {
            sessions: FxHashMap::default(),
            config,
        }
    }

    /// The config battles are run with.
    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// Open a battle in a server.
    pub fn open(
        &mut self,
        key: SessionKey,
        author: Participant,
        opponent: Participant,
    ) -> Result<&BattleSession> {
        if self.sessions.contains_key(&key) {
            return Err(BattleError::BattleInProgress);
        }

        tracing::info!(
            session = key.0,
            author = author.id.raw(),
            opponent = opponent.id.raw(),
            "battle opened"
        );
        let session = BattleSession {
            builder: RosterBuilder::new(author, opponent, &self.config),
        };
        Ok(self.sessions.entry(key).or_insert(session))
    }

    /// Get a server's session.
    #[must_use]
    pub fn get(&self, key: SessionKey) -> Option<&BattleSession> {
        self.sessions.get(&key)
    }

    /// Add a ball to the proposer's side.
    pub fn propose(
        &mut self,
        key: SessionKey,
        proposer: ParticipantId,
        instance: &BallInstance,
    ) -> Result<Side> {
        self.session_mut(key)?.builder.propose(proposer, instance)
    }

    /// Remove a ball from the proposer's side.
    pub fn withdraw(
        &mut self,
        key: SessionKey,
        proposer: ParticipantId,
        name: &str,
    ) -> Result<Combatant> {
        self.session_mut(key)?.builder.withdraw(proposer, name)
    }

    /// Run the battle and close the session.
    ///
    /// Only a participant may start it, and both sides need a ball. On
    /// rejection the session stays open.
    pub fn start<R: RandomSource>(
        &mut self,
        key: SessionKey,
        requester: ParticipantId,
        rng: R,
    ) -> Result<BattleReport> {
        let session = self.session_mut(key)?;
        session.ensure_participant(requester)?;
        if let Some(side) = session.builder.first_empty_side() {
            return Err(BattleError::EmptyRoster(side));
        }

        let session = self
            .sessions
            .remove(&key)
            .ok_or(BattleError::NoActiveBattle)?;
        let (participants, mut pair) = session.builder.clone().into_parts();

        let simulation = match BattleSimulation::new(&mut pair, rng, &self.config) {
            Ok(simulation) => simulation,
            Err(err) => {
                self.sessions.insert(key, session);
                return Err(err);
            }
        };
        let (events, result) = simulation.run_with_log();
        let report = BattleReport::new(&participants, &events, result);

        tracing::info!(
            session = key.0,
            winner = result.winner.raw(),
            turns = result.turns,
            "battle finished"
        );
        Ok(report)
    }

    /// Abandon a battle. Only a participant may cancel it.
    pub fn cancel(&mut self, key: SessionKey, requester: ParticipantId) -> Result<()> {
        self.session_mut(key)?.ensure_participant(requester)?;
        self.sessions.remove(&key);
        tracing::info!(session = key.0, requester = requester.raw(), "battle cancelled");
        Ok(())
    }

    /// Number of open sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Check if no session is open.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn session_mut(&mut self, key: SessionKey) -> Result<&mut BattleSession> {
        self.sessions
            .get_mut(&key)
            .ok_or(BattleError::NoActiveBattle)
    }
}
