//! Last warrior standing.

use super::{Outcome, Progression};

/// Advances the sole remaining roster member.
///
/// Only the roster's size matters:
///
/// | Roster | Outcome |
/// |---|---|
/// | empty | [`Outcome::GameOver`] |
/// | one warrior | [`Outcome::Advance`] with that warrior |
/// | two or more | [`Outcome::Undecided`] |
///
/// Aliveness is not checked. The game loop is expected to drop defeated
/// warriors from the roster before asking, so a single dead entry still
/// advances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LastStanding;

impl<W, M, H> Progression<W, M, H> for LastStanding
where
    W: Clone,
{
    fn evaluate(&self, roster: &[W], _map: &M, _history: &H) -> Outcome<W> {
        match roster {
            [] => Outcome::GameOver,
            [victor] => Outcome::Advance(vec![victor.clone()]),
            [_, _, ..] => Outcome::Undecided,
        }
    }
}
