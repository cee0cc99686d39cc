//! The result of evaluating end-of-round state.

use serde::{Deserialize, Serialize};

/// What the game loop should do after a round.
///
/// Exactly one variant is produced per evaluation. Outcomes are plain values:
/// built fresh by a rule and consumed immediately by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "roster", rename_all = "snake_case")]
pub enum Outcome<W> {
    /// These warriors proceed to the next map, or win outright if no map is
    /// left. Order matches the roster the rule was given.
    Advance(Vec<W>),
    /// The run has ended in defeat.
    GameOver,
    /// No decision yet; keep playing the current map.
    Undecided,
}

impl<W> Outcome<W> {
    /// Returns `true` for [`Outcome::Advance`] and [`Outcome::GameOver`].
    #[must_use]
    pub const fn is_decided(&self) -> bool {
        !self.is_undecided()
    }

    /// Returns `true` for [`Outcome::Undecided`].
    #[must_use]
    pub const fn is_undecided(&self) -> bool {
        matches!(self, Self::Undecided)
    }

    /// Returns `true` for [`Outcome::GameOver`].
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        matches!(self, Self::GameOver)
    }

    /// The advancing warriors, if any.
    #[must_use]
    pub fn advancing(&self) -> Option<&[W]> {
        match self {
            Self::Advance(roster) => Some(roster),
            Self::GameOver | Self::Undecided => None,
        }
    }

    /// Consumes the outcome, returning the advancing warriors, if any.
    #[must_use]
    pub fn into_advancing(self) -> Option<Vec<W>> {
        match self {
            Self::Advance(roster) => Some(roster),
            Self::GameOver | Self::Undecided => None,
        }
    }

    /// Short lowercase name of the variant.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Advance(_) => "advance",
            Self::GameOver => "game over",
            Self::Undecided => "undecided",
        }
    }
}
