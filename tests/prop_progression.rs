//! Property-based tests for the progression rules.
//!
//! These tests check the decision laws of each rule over random rosters,
//! maps, and round counts.
//! Run with: cargo test --release prop_progression

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use warband::game::{Coord, History, Map, Tile, Warrior};
use warband::progression::{
    from_fn, LastStanding, Outcome, Progression, ReachExit, RoundLimit,
};

/// Lay warriors out on a single row: warrior `i` stands on column `i`, which
/// is an exit tile when `on_exit` is set.
fn arena(specs: &[(bool, bool)]) -> (Map, Vec<Warrior>) {
    let width = u16::try_from(specs.len().max(1)).unwrap();
    let mut map = Map::new(width, 1).unwrap();
    let mut roster = Vec::with_capacity(specs.len());

    for (i, &(alive, on_exit)) in specs.iter().enumerate() {
        let x = u16::try_from(i).unwrap();
        let coord = Coord::new(x, 0);
        if on_exit {
            map.set(coord, Tile::Exit);
        }
        let health = if alive { 10 } else { 0 };
        roster.push(
            Warrior::new(u32::from(x) + 1, format!("w{x}"), coord).with_health(health),
        );
    }

    (map, roster)
}

/// Roster for rules that never look at it.
const NOBODY: &[Warrior] = &[];

fn history_with_rounds(rounds: u32) -> History {
    let mut history = History::new();
    for _ in 0..rounds {
        history.end_round();
    }
    history
}

fn fixed(kind: u8) -> Outcome<Warrior> {
    match kind {
        0 => Outcome::Advance(vec![Warrior::new(99, "fixed", Coord::new(0, 0))]),
        1 => Outcome::GameOver,
        _ => Outcome::Undecided,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    /// Reach-exit advances the full roster, decides game over only when all
    /// are dead and none is on an exit, and is undecided otherwise.
    #[test]
    fn prop_reach_exit_decision_table(
        specs in prop::collection::vec((any::<bool>(), any::<bool>()), 0..12),
        rounds in 0u32..50,
    ) {
        let (map, roster) = arena(&specs);
        let history = history_with_rounds(rounds);
        let outcome = ReachExit.evaluate(&roster, &map, &history);

        let anyone_on_exit = specs.iter().any(|&(_, on_exit)| on_exit);
        let all_dead = specs.iter().all(|&(alive, _)| !alive);

        if anyone_on_exit {
            prop_assert_eq!(outcome, Outcome::Advance(roster.clone()));
        } else if all_dead {
            prop_assert_eq!(outcome, Outcome::GameOver);
        } else {
            prop_assert_eq!(outcome, Outcome::Undecided);
        }
    }

    /// Last-standing depends on roster size alone.
    #[test]
    fn prop_last_standing_cardinality(
        specs in prop::collection::vec((any::<bool>(), any::<bool>()), 0..12),
    ) {
        let (map, roster) = arena(&specs);
        let outcome = LastStanding.evaluate(&roster, &map, &History::new());

        match roster.len() {
            0 => prop_assert_eq!(outcome, Outcome::GameOver),
            1 => prop_assert_eq!(outcome, Outcome::Advance(roster.clone())),
            _ => prop_assert_eq!(outcome, Outcome::Undecided),
        }
    }

    /// A round limit never overrides a decision.
    #[test]
    fn prop_round_limit_passes_decisions_through(
        kind in 0u8..2,
        limit in any::<u32>(),
        rounds in 0u32..500,
    ) {
        let map = Map::new(1, 1).unwrap();
        let inner = from_fn(move |_: &[Warrior], _: &Map, _: &History| fixed(kind));
        let rule = RoundLimit::new(limit, inner);

        let outcome = rule.evaluate(NOBODY, &map, &history_with_rounds(rounds));
        prop_assert_eq!(outcome, fixed(kind));
    }

    /// An undecided inner rule becomes game over exactly at the limit.
    #[test]
    fn prop_round_limit_trigger(limit in 0u32..300, rounds in 0u32..300) {
        let map = Map::new(1, 1).unwrap();
        let inner = from_fn(|_: &[Warrior], _: &Map, _: &History| Outcome::Undecided);
        let rule = RoundLimit::new(limit, inner);

        let outcome = rule.evaluate(NOBODY, &map, &history_with_rounds(rounds));
        if rounds >= limit {
            prop_assert_eq!(outcome, Outcome::GameOver);
        } else {
            prop_assert_eq!(outcome, Outcome::Undecided);
        }
    }

    /// Nested limits behave like one limit at the smaller value.
    #[test]
    fn prop_nested_limits_match_smaller(
        outer in 0u32..200,
        inner_limit in 0u32..200,
        rounds in 0u32..250,
    ) {
        let map = Map::new(1, 1).unwrap();
        let stalemate = || from_fn(|_: &[Warrior], _: &Map, _: &History| Outcome::Undecided);

        let nested = RoundLimit::new(outer, RoundLimit::new(inner_limit, stalemate()));
        let single = RoundLimit::new(outer.min(inner_limit), stalemate());

        let history = history_with_rounds(rounds);
        prop_assert_eq!(
            nested.evaluate(NOBODY, &map, &history),
            single.evaluate(NOBODY, &map, &history)
        );
    }

    /// Rules never reorder or mutate the roster they are given.
    #[test]
    fn prop_roster_untouched(
        specs in prop::collection::vec((any::<bool>(), any::<bool>()), 0..12),
    ) {
        let (map, roster) = arena(&specs);
        let before = roster.clone();
        let history = History::new();

        let _ = ReachExit.evaluate(&roster, &map, &history);
        let _ = RoundLimit::new(0, LastStanding).evaluate(&roster, &map, &history);

        prop_assert_eq!(roster, before);
    }
}

#[test]
fn scenario_exit_carries_fallen_teammate() {
    let (map, roster) = arena(&[(true, true), (false, false)]);
    assert_eq!(
        ReachExit.evaluate(&roster, &map, &History::new()),
        Outcome::Advance(roster.clone())
    );
}

#[test]
fn scenario_everyone_fallen() {
    let (map, roster) = arena(&[(false, false), (false, false)]);
    assert_eq!(
        ReachExit.evaluate(&roster, &map, &History::new()),
        Outcome::GameOver
    );
}

#[test]
fn scenario_sole_survivor() {
    let (map, roster) = arena(&[(true, false)]);
    assert_eq!(
        LastStanding.evaluate(&roster, &map, &History::new()),
        Outcome::Advance(roster.clone())
    );
}

#[test]
fn scenario_round_limit_boundary() {
    let map = Map::new(1, 1).unwrap();
    let history = history_with_rounds(10);
    let stalemate = || from_fn(|_: &[Warrior], _: &Map, _: &History| Outcome::Undecided);

    assert_eq!(
        RoundLimit::new(10, stalemate()).evaluate(NOBODY, &map, &history),
        Outcome::GameOver
    );
    assert_eq!(
        RoundLimit::new(11, stalemate()).evaluate(NOBODY, &map, &history),
        Outcome::Undecided
    );
}
