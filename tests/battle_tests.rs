//! Battle simulation integration tests.
//!
//! These tests drive full battles through the public API with both seeded
//! and scripted randomness.

mod common;

use countryball_battle::battle::{BattleSimulation, Combatant, RosterPair};
use countryball_battle::core::{
    BattleConfig, BattleError, BattleRng, Participant, RandomSource, Side,
};

fn alice() -> Participant {
    Participant::new(1, "alice")
}

fn bob() -> Participant {
    Participant::new(2, "bob")
}

/// Replays a fixed list of target picks, always with multiplier 1.0.
struct Scripted {
    picks: Vec<usize>,
    next: usize,
}

impl Scripted {
    fn new(picks: Vec<usize>) -> Self {
        Self { picks, next: 0 }
    }
}

impl RandomSource for Scripted {
    fn pick_index(&mut self, len: usize) -> usize {
        let pick = self.picks.get(self.next).copied().unwrap_or(0);
        self.next += 1;
        pick.min(len - 1)
    }

    fn damage_multiplier(&mut self, _low: f64, _high: f64) -> f64 {
        1.0
    }
}

// =============================================================================
// Concrete Scenarios
// =============================================================================

#[test]
fn test_overwhelming_attack_ends_in_one_turn() {
    common::init_tracing();
    for seed in 0..50 {
        let mut pair = RosterPair::from_rosters(
            vec![Combatant::new("France", alice(), 1, 1000)],
            vec![Combatant::new("Italy", bob(), 1, 1)],
        );
        let sim = BattleSimulation::new(&mut pair, BattleRng::new(seed), &BattleConfig::default())
            .unwrap();
        let events: Vec<_> = sim.collect();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].to_string(), "alice's France has killed bob's Italy");
        assert!(events[0].outcome.damage() >= 500);
        assert_eq!(pair.winner, Some(alice().id));
        assert_eq!(pair.turns, 1);
    }
}

#[test]
fn test_all_dead_side_loses_without_events() {
    let mut pair = RosterPair::from_rosters(
        vec![
            Combatant::fallen("Prussia", alice(), 50),
            Combatant::fallen("Austria-Hungary", alice(), 50),
        ],
        vec![Combatant::new("Italy", bob(), 10, 10)],
    );
    let config = BattleConfig::default();
    let sim = BattleSimulation::new(&mut pair, BattleRng::new(1), &config).unwrap();

    assert_eq!(sim.count(), 0);
    assert_eq!(pair.winner, Some(bob().id));
    assert_eq!(pair.turns, 0);
}

#[test]
fn test_single_heavy_hitter_clears_crowd() {
    let crowd: Vec<Combatant> = ["Monaco", "Andorra", "Malta", "Liechtenstein", "Vatican"]
        .into_iter()
        .map(|name| Combatant::new(name, bob(), 5, 1))
        .collect();
    let mut pair = RosterPair::from_rosters(
        vec![Combatant::new("China", alice(), 10_000, 100)],
        crowd,
    );

    let config = BattleConfig::default();
    let sim = BattleSimulation::new(&mut pair, BattleRng::new(99), &config).unwrap();
    let result = sim.run();

    assert_eq!(result.winner, alice().id);
    assert!(pair.is_defeated(Side::B));
    assert!(pair.side_b.iter().all(|c| c.dead && c.health == 0));
    assert!(pair.side_a[0].is_alive());
}

#[test]
fn test_scripted_targets_are_respected() {
    // France always aims at the second living enemy while there is one.
    let mut pair = RosterPair::from_rosters(
        vec![Combatant::new("France", alice(), 100, 10)],
        vec![
            Combatant::new("Italy", bob(), 10, 1),
            Combatant::new("Spain", bob(), 10, 1),
        ],
    );
    let config = BattleConfig::default().with_damage_multiplier(1.0, 1.0);
    let mut sim = BattleSimulation::new(&mut pair, Scripted::new(vec![1, 0, 0]), &config).unwrap();

    let first = sim.next().unwrap();
    assert_eq!(first.defender.name, "Spain");
    assert!(first.outcome.is_kill());

    // Italy (paired with France) strikes back, then France finishes Italy
    let second = sim.next().unwrap();
    assert_eq!(second.attacker.name, "Italy");
    let third = sim.next().unwrap();
    assert_eq!(third.defender.name, "Italy");
    assert!(sim.next().is_none());
    assert_eq!(sim.result().unwrap().turns, 3);
}

#[test]
fn test_rejects_empty_roster() {
    let mut pair = RosterPair::from_rosters(Vec::new(), vec![Combatant::new("Italy", bob(), 1, 1)]);
    let err = BattleSimulation::new(&mut pair, BattleRng::new(1), &BattleConfig::default())
        .unwrap_err();
    assert!(matches!(err, BattleError::EmptyRoster(Side::A)));
    assert!(pair.winner.is_none());
}

// =============================================================================
// Determinism
// =============================================================================

fn three_vs_three() -> RosterPair {
    RosterPair::from_rosters(
        vec![
            Combatant::new("France", alice(), 120, 30),
            Combatant::new("Spain", alice(), 90, 40),
            Combatant::new("Portugal", alice(), 80, 25),
        ],
        vec![
            Combatant::new("Germany", bob(), 130, 35),
            Combatant::new("Italy", bob(), 70, 30),
            Combatant::new("Greece", bob(), 60, 20),
        ],
    )
}

#[test]
fn test_same_seed_same_battle() {
    common::init_tracing();
    let config = BattleConfig::default();

    let mut pair1 = three_vs_three();
    let (log1, result1) = BattleSimulation::new(&mut pair1, BattleRng::new(2024), &config)
        .unwrap()
        .run_with_log();

    let mut pair2 = three_vs_three();
    let (log2, result2) = BattleSimulation::new(&mut pair2, BattleRng::new(2024), &config)
        .unwrap()
        .run_with_log();

    assert_eq!(log1, log2);
    assert_eq!(result1, result2);
    assert_eq!(pair1, pair2);
}

#[test]
fn test_turns_match_event_count() {
    for seed in 0..20 {
        let mut pair = three_vs_three();
        let config = BattleConfig::default();
        let (events, result) = BattleSimulation::new(&mut pair, BattleRng::new(seed), &config)
            .unwrap()
            .run_with_log();

        assert_eq!(events.len() as u32, result.turns);
        assert_eq!(pair.turns, result.turns);
    }
}
