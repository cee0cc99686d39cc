//! End-of-round progression rules.
//!
//! After every round the driving game loop asks a [`Progression`] rule what
//! happens next. The rule inspects the roster, the map, and the turn history
//! and answers with an [`Outcome`]:
//!
//! - [`Outcome::Advance`]: the listed warriors proceed to the next map
//! - [`Outcome::GameOver`]: the run has ended in defeat
//! - [`Outcome::Undecided`]: keep playing the current map
//!
//! Rules are pure. They never mutate their inputs, never fail, and keep no
//! state between calls; anything that spans rounds (such as the round count)
//! is read back out of the history.
//!
//! # Built-in rules
//!
//! - [`ReachExit`]: the whole roster advances once anyone stands on an exit
//! - [`LastStanding`]: the sole remaining warrior advances
//! - [`RoundLimit`]: wraps another rule and ends undecided runs after a
//!   number of rounds
//!
//! # Collaborators
//!
//! Rules only see the world through four narrow queries, so they work with any
//! warrior, map, and history types that implement them:
//!
//! | Trait | Query |
//! |---|---|
//! | [`Combatant`] | is this warrior still in play? |
//! | [`Terrain`] | which tile is beneath this warrior? |
//! | [`ExitTile`] | is this tile an exit? |
//! | [`RoundLog`] | how many rounds have been completed? |
//!
//! # Example
//!
//! ```
//! use warband::game::{Coord, History, Map, Warrior};
//! use warband::progression::{Outcome, Progression, ReachExit, RoundLimit};
//!
//! let map = Map::from_ascii(&["..>"]).unwrap();
//! let roster = vec![
//!     Warrior::new(1, "Ash", Coord::new(2, 0)),
//!     Warrior::new(2, "Birch", Coord::new(0, 0)),
//! ];
//!
//! let rule = RoundLimit::new(50, ReachExit);
//! let outcome = rule.evaluate(&roster, &map, &History::new());
//! assert_eq!(outcome, Outcome::Advance(roster));
//! ```

mod config;
mod last_standing;
mod outcome;
mod reach_exit;
mod round_limit;

pub use config::{ParseRuleError, ProgressionConfig, RuleKind};
pub use last_standing::LastStanding;
pub use outcome::Outcome;
pub use reach_exit::ReachExit;
pub use round_limit::{with_round_limit, RoundLimit};

use std::fmt;

/// A warrior as seen by the progression rules.
pub trait Combatant {
    /// Returns `true` while the warrior is still in play.
    fn is_alive(&self) -> bool;
}

/// A tile as seen by the progression rules.
pub trait ExitTile {
    /// Returns `true` if standing on this tile can complete the map.
    fn is_exit(&self) -> bool;
}

/// A map that can report what lies beneath a warrior.
pub trait Terrain<W> {
    /// The tile type returned by [`Terrain::look_down`].
    type Tile: ExitTile;

    /// Returns the tile under the warrior's current position.
    ///
    /// Must be callable for every warrior in a roster, including warriors
    /// the map no longer tracks.
    fn look_down(&self, warrior: &W) -> Self::Tile;
}

/// A turn history that can report how far the current map run has gone.
pub trait RoundLog {
    /// Number of completed rounds. Never decreases during a run.
    fn rounds_played(&self) -> u32;
}

/// An end-of-round decision rule.
///
/// Implementations must be total: every call returns exactly one
/// [`Outcome`] and nothing is mutated. The trait is object safe, so rules can
/// be boxed, stored, and wrapped by [`RoundLimit`] without special cases.
///
/// # Example
///
/// ```
/// use warband::game::{History, Map, Warrior};
/// use warband::progression::{Outcome, Progression};
///
/// #[derive(Debug)]
/// struct NeverEnds;
///
/// impl Progression<Warrior, Map, History> for NeverEnds {
///     fn evaluate(&self, _roster: &[Warrior], _map: &Map, _history: &History) -> Outcome<Warrior> {
///         Outcome::Undecided
///     }
/// }
///
/// let boxed: Box<dyn Progression<Warrior, Map, History>> = Box::new(NeverEnds);
/// let map = Map::from_ascii(&["."]).unwrap();
/// assert!(boxed.evaluate(&[], &map, &History::new()).is_undecided());
/// ```
pub trait Progression<W, M, H>: fmt::Debug + Send + Sync {
    /// Decides what happens after the round that just ended.
    fn evaluate(&self, roster: &[W], map: &M, history: &H) -> Outcome<W>;
}

impl<W, M, H, P> Progression<W, M, H> for Box<P>
where
    P: Progression<W, M, H> + ?Sized,
{
    fn evaluate(&self, roster: &[W], map: &M, history: &H) -> Outcome<W> {
        (**self).evaluate(roster, map, history)
    }
}

/// A rule built from a closure. See [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnProgression<F> {
    func: F,
}

impl<F> fmt::Debug for FnProgression<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnProgression").finish_non_exhaustive()
    }
}

impl<W, M, H, F> Progression<W, M, H> for FnProgression<F>
where
    F: Fn(&[W], &M, &H) -> Outcome<W> + Send + Sync,
{
    fn evaluate(&self, roster: &[W], map: &M, history: &H) -> Outcome<W> {
        (self.func)(roster, map, history)
    }
}

/// Turns a closure into a [`Progression`] rule.
///
/// Handy for one-off victory conditions and for tests.
///
/// ```
/// use warband::game::{History, Map, Warrior};
/// use warband::progression::{from_fn, Outcome, Progression};
///
/// let everyone_wins = from_fn(|roster: &[Warrior], _map: &Map, _history: &History| {
///     Outcome::Advance(roster.to_vec())
/// });
/// let map = Map::from_ascii(&["."]).unwrap();
/// let nobody: &[Warrior] = &[];
/// assert!(everyone_wins.evaluate(nobody, &map, &History::new()).is_decided());
/// ```
#[must_use]
pub fn from_fn<W, M, H, F>(func: F) -> FnProgression<F>
where
    F: Fn(&[W], &M, &H) -> Outcome<W> + Send + Sync,
{
    FnProgression { func }
}
