//! Battle simulation.
//!
//! `BattleSimulation` is a lazy iterator over a `RosterPair`: every call to
//! `next` resolves exactly one attack and yields its `AttackEvent`.
//!
//! ## Rounds
//!
//! While both sides have a living combatant, a sub-round snapshots the
//! living combatants of each side and pairs them positionally (the shorter
//! side truncates the pairing). For each pair side A's member attacks first,
//! then side B's, each only if still alive. The sub-round stops early as
//! soon as an attack leaves the opposing side defeated.
//!
//! ## Attacks
//!
//! The target is a uniformly random living enemy. Damage is
//! `attack * U(min, max)` truncated to an integer, with the multiplier range
//! taken from `BattleConfig`.
//!
//! ## Result
//!
//! When the iterator is exhausted the winner and turn count are stamped on
//! the `RosterPair`. Dropping the iterator early leaves them unset.
//!
//! Side A's defeat is checked first: if both sides were ever defeated at
//! once, side B's owner would win. A single attack only ever hits one
//! target, so this cannot happen through the iterator.

use std::collections::VecDeque;

use super::combatant::Combatant;
use super::event::{AttackEvent, AttackOutcome, Fighter};
use super::roster::{alive_indices, BattleResult, RosterPair};
use crate::core::config::BattleConfig;
use crate::core::error::{BattleError, Result};
use crate::core::participant::{ParticipantId, Side, SideMap};
use crate::core::rng::RandomSource;

/// Lazy battle over a borrowed `RosterPair`.
///
/// ## Example
///
/// ```
/// use countryball_battle::battle::{BattleSimulation, Combatant, RosterPair};
/// use countryball_battle::core::{BattleConfig, BattleRng, Participant};
///
/// let alice = Participant::new(1, "alice");
/// let bob = Participant::new(2, "bob");
/// let mut pair = RosterPair::from_rosters(
///     vec![Combatant::new("France", alice.clone(), 1, 1000)],
///     vec![Combatant::new("Italy", bob, 1, 1)],
/// );
///
/// let mut rng = BattleRng::new(42);
/// let sim = BattleSimulation::new(&mut pair, &mut rng, &BattleConfig::default()).unwrap();
/// let log: Vec<String> = sim.map(|e| e.to_string()).collect();
///
/// assert_eq!(log, vec!["alice's France has killed bob's Italy"]);
/// assert_eq!(pair.winner, Some(alice.id));
/// assert_eq!(pair.turns, 1);
/// ```
#[derive(Debug)]
pub struct BattleSimulation<'a, R: RandomSource> {
    pair: &'a mut RosterPair,
    rng: R,
    multiplier: (f64, f64),
    /// Owner of each side's first combatant, named as winner.
    owners: SideMap<ParticipantId>,
    /// Attackers still to act in the current sub-round.
    pending: VecDeque<(Side, usize)>,
    turns: u32,
    result: Option<BattleResult>,
}

impl<'a, R: RandomSource> BattleSimulation<'a, R> {
    /// Prepare a battle.
    ///
    /// Fails with `EmptyRoster` if either side has no combatants at all.
    /// Sides whose combatants are all dead are accepted and simply lose.
    ///
    /// Fails with `Harmless` if a living combatant can never deal damage,
    /// since two such combatants paired together would fight forever.
    ///
    /// Fails with `InvalidConfig` if `config` does not validate.
    pub fn new(pair: &'a mut RosterPair, rng: R, config: &BattleConfig) -> Result<Self> {
        config.validate()?;

        let owner_of = |side: Side| {
            pair.roster(side)
                .first()
                .map(|c| c.owner.id)
                .ok_or(BattleError::EmptyRoster(side))
        };
        let owners = SideMap::from_pair(owner_of(Side::A)?, owner_of(Side::B)?);

        let multiplier = (config.min_damage_multiplier, config.max_damage_multiplier);
        for side in Side::BOTH {
            if let Some(c) = pair
                .roster(side)
                .iter()
                .find(|c| c.is_alive() && !can_wound(c.attack, multiplier))
            {
                return Err(BattleError::Harmless {
                    side,
                    name: c.name.clone(),
                });
            }
        }

        Ok(Self {
            pair,
            rng,
            multiplier,
            owners,
            pending: VecDeque::new(),
            turns: 0,
            result: None,
        })
    }

    /// Attacks resolved so far.
    #[must_use]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// The result, once the iterator has been exhausted.
    #[must_use]
    pub fn result(&self) -> Option<BattleResult> {
        self.result
    }

    /// Read-only view of the rosters mid-battle.
    #[must_use]
    pub fn pair(&self) -> &RosterPair {
        self.pair
    }

    /// Drain the battle, discarding events, and return the result.
    pub fn run(mut self) -> BattleResult {
        while self.next().is_some() {}
        self.finish()
    }

    /// Drain the battle, keeping every event.
    pub fn run_with_log(mut self) -> (Vec<AttackEvent>, BattleResult) {
        let events: Vec<AttackEvent> = self.by_ref().collect();
        let result = self.finish();
        (events, result)
    }

    fn plan_sub_round(&mut self) {
        let alive_a = self.pair.alive_indices(Side::A);
        let alive_b = self.pair.alive_indices(Side::B);

        for (a, b) in alive_a.into_iter().zip(alive_b) {
            self.pending.push_back((Side::A, a));
            self.pending.push_back((Side::B, b));
        }
    }

    fn finish(&mut self) -> BattleResult {
        if let Some(result) = self.result {
            return result;
        }

        let winner = if self.pair.is_defeated(Side::A) {
            self.owners[Side::B]
        } else {
            self.owners[Side::A]
        };
        let result = BattleResult {
            winner,
            turns: self.turns,
        };

        self.pair.winner = Some(winner);
        self.pair.turns = self.turns;
        self.result = Some(result);

        tracing::debug!(winner = winner.raw(), turns = self.turns, "battle finished");
        result
    }
}

impl<R: RandomSource> Iterator for BattleSimulation<'_, R> {
    type Item = AttackEvent;

    fn next(&mut self) -> Option<AttackEvent> {
        if self.result.is_some() {
            return None;
        }

        loop {
            let Some((side, index)) = self.pending.pop_front() else {
                if self.pair.is_defeated(Side::A) || self.pair.is_defeated(Side::B) {
                    self.finish();
                    return None;
                }
                self.plan_sub_round();
                continue;
            };

            if !self.pair.roster(side)[index].is_alive() {
                continue;
            }

            let (own, enemies) = self.pair.split_mut(side);
            let Some(event) = resolve_attack(
                side,
                index,
                &own[index],
                enemies,
                &mut self.rng,
                self.multiplier,
            ) else {
                // Opponent already defeated: the sub-round is over.
                self.pending.clear();
                continue;
            };

            self.turns += 1;
            if self.pair.is_defeated(side.opponent()) {
                self.pending.clear();
            }

            tracing::trace!(turn = self.turns, "{event}");
            return Some(event);
        }
    }
}

/// Whether some multiplier in `[low, high)` turns `attack` into at least 1 damage.
fn can_wound(attack: i64, (low, high): (f64, f64)) -> bool {
    let attack = attack as f64;
    if low >= high {
        attack * low >= 1.0
    } else {
        attack * high > 1.0
    }
}

/// Resolve one attack by `attacker` against a random living enemy.
///
/// Returns `None` when no enemy is alive.
pub fn resolve_attack<R: RandomSource + ?Sized>(
    side: Side,
    index: usize,
    attacker: &Combatant,
    enemies: &mut [Combatant],
    rng: &mut R,
    (low, high): (f64, f64),
) -> Option<AttackEvent> {
    let alive = alive_indices(enemies);
    if alive.is_empty() {
        return None;
    }
    let target = alive[rng.pick_index(alive.len())];

    let damage = (attacker.attack as f64 * rng.damage_multiplier(low, high)) as i64;
    let defender = &mut enemies[target];
    let outcome = if defender.take_damage(damage) {
        AttackOutcome::Kill(damage)
    } else {
        AttackOutcome::Damage(damage)
    };

    Some(AttackEvent {
        attacker: Fighter {
            side,
            index,
            name: attacker.name.clone(),
            owner_name: attacker.owner.name.clone(),
        },
        defender: Fighter {
            side: side.opponent(),
            index: target,
            name: defender.name.clone(),
            owner_name: defender.owner.name.clone(),
        },
        outcome,
    })
}
