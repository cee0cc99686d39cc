//! Round limit layered over another rule.

use super::{Outcome, Progression, RoundLog};

/// Ends undecided runs once enough rounds have been played.
///
/// The wrapped rule is always evaluated first. Its decisions pass through
/// untouched; only [`Outcome::Undecided`] is inspected, and it becomes
/// [`Outcome::GameOver`] when `rounds_played >= limit`. A limit of zero
/// therefore ends any undecided run immediately.
///
/// Limits nest: wrapping a limited rule in another limit behaves like a single
/// limit at the smaller of the two values.
///
/// ```
/// use warband::game::{History, Map, Warrior};
/// use warband::progression::{from_fn, Outcome, Progression, RoundLimit};
///
/// let stalemate = from_fn(|_: &[Warrior], _: &Map, _: &History| Outcome::Undecided);
/// let rule = RoundLimit::new(2, stalemate);
/// let map = Map::from_ascii(&["."]).unwrap();
/// let nobody: &[Warrior] = &[];
///
/// let mut history = History::new();
/// history.end_round();
/// assert_eq!(rule.evaluate(nobody, &map, &history), Outcome::Undecided);
///
/// history.end_round();
/// assert_eq!(rule.evaluate(nobody, &map, &history), Outcome::GameOver);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundLimit<P> {
    /// Rounds after which an undecided run is over.
    limit: u32,
    /// The rule being limited.
    inner: P,
}

impl<P> RoundLimit<P> {
    /// Wraps `inner` with a round limit.
    #[must_use]
    pub fn new(limit: u32, inner: P) -> Self {
        Self { limit, inner }
    }

    /// The configured round limit.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// The wrapped rule.
    #[must_use]
    pub const fn inner(&self) -> &P {
        &self.inner
    }

    /// Unwraps the limit, returning the inner rule.
    #[must_use]
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<W, M, H, P> Progression<W, M, H> for RoundLimit<P>
where
    H: RoundLog,
    P: Progression<W, M, H>,
{
    fn evaluate(&self, roster: &[W], map: &M, history: &H) -> Outcome<W> {
        match self.inner.evaluate(roster, map, history) {
            Outcome::Undecided if history.rounds_played() >= self.limit => Outcome::GameOver,
            decided => decided,
        }
    }
}

/// Wraps `inner` with a round limit. Shorthand for [`RoundLimit::new`].
#[must_use]
pub fn with_round_limit<P>(limit: u32, inner: P) -> RoundLimit<P> {
    RoundLimit::new(limit, inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::{from_fn, LastStanding, ReachExit};

    struct Rounds(u32);

    impl RoundLog for Rounds {
        fn rounds_played(&self) -> u32 {
            self.0
        }
    }

    #[derive(Debug)]
    struct Fixed(Outcome<u8>);

    impl Progression<u8, (), Rounds> for Fixed {
        fn evaluate(&self, _roster: &[u8], _map: &(), _history: &Rounds) -> Outcome<u8> {
            self.0.clone()
        }
    }

    fn eval<P: Progression<u8, (), Rounds>>(rule: &P, rounds: u32) -> Outcome<u8> {
        rule.evaluate(&[1, 2], &(), &Rounds(rounds))
    }

    #[test]
    fn test_limit_reached_ends_undecided_run() {
        let rule = RoundLimit::new(10, Fixed(Outcome::Undecided));
        assert_eq!(eval(&rule, 10), Outcome::GameOver);
        assert_eq!(eval(&rule, 11), Outcome::GameOver);
    }

    #[test]
    fn test_below_limit_stays_undecided() {
        let rule = RoundLimit::new(11, Fixed(Outcome::Undecided));
        assert_eq!(eval(&rule, 10), Outcome::Undecided);
        assert_eq!(eval(&rule, 0), Outcome::Undecided);
    }

    #[test]
    fn test_zero_limit_ends_immediately() {
        let rule = with_round_limit(0, Fixed(Outcome::Undecided));
        assert_eq!(eval(&rule, 0), Outcome::GameOver);
    }

    #[test]
    fn test_decisions_pass_through() {
        let advance = RoundLimit::new(0, Fixed(Outcome::Advance(vec![1])));
        assert_eq!(eval(&advance, 500), Outcome::Advance(vec![1]));

        let over = RoundLimit::new(u32::MAX, Fixed(Outcome::GameOver));
        assert_eq!(eval(&over, 0), Outcome::GameOver);
    }

    #[test]
    fn test_nested_limits_use_smaller() {
        let inner = RoundLimit::new(5, Fixed(Outcome::Undecided));
        let outer = RoundLimit::new(8, inner);
        assert_eq!(eval(&outer, 4), Outcome::Undecided);
        assert_eq!(eval(&outer, 5), Outcome::GameOver);

        let inner = RoundLimit::new(8, Fixed(Outcome::Undecided));
        let outer = RoundLimit::new(5, inner);
        assert_eq!(eval(&outer, 4), Outcome::Undecided);
        assert_eq!(eval(&outer, 5), Outcome::GameOver);
    }

    #[test]
    fn test_wraps_closures_and_builtins() {
        let closure = RoundLimit::new(3, from_fn(|_: &[u8], _: &(), _: &Rounds| Outcome::Undecided));
        assert_eq!(eval(&closure, 3), Outcome::GameOver);

        let last = RoundLimit::new(3, LastStanding);
        assert_eq!(eval(&last, 3), Outcome::GameOver);
        assert_eq!(last.evaluate(&[9], &(), &Rounds(3)), Outcome::Advance(vec![9]));
    }

    #[test]
    fn test_wraps_boxed_rule() {
        let boxed: Box<dyn Progression<u8, (), Rounds>> = Box::new(Fixed(Outcome::Undecided));
        let rule = RoundLimit::new(1, boxed);
        assert_eq!(eval(&rule, 1), Outcome::GameOver);
    }

    #[test]
    fn test_accessors() {
        let rule = RoundLimit::new(7, ReachExit);
        assert_eq!(rule.limit(), 7);
        assert_eq!(*rule.inner(), ReachExit);
        assert_eq!(rule.into_inner(), ReachExit);
    }
}
