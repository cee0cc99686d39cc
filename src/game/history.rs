//! Append-only turn history.

use serde::{Deserialize, Serialize};

use crate::game::{Direction, WarriorId};
use crate::progression::RoundLog;

/// What a warrior did with its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "direction", rename_all = "snake_case")]
pub enum Action {
    /// Step one tile.
    Walk(Direction),
    /// Strike the adjacent tile.
    Attack(Direction),
    /// Stay put and recover.
    Rest,
}

/// A single logged turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Zero-based round the turn was taken in.
    pub round: u32,
    /// The warrior who acted.
    pub warrior: WarriorId,
    /// What it did.
    pub action: Action,
}

/// Turn log for the current map run.
///
/// Turns are only ever appended, and the round counter only moves forward,
/// so [`History::rounds_played`] never decreases.
///
/// A deserialized log is ordered by round, and its counter is raised to the
/// latest logged round, so turns recorded afterwards never sort before it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "HistoryRecord")]
pub struct History {
    /// Every turn taken so far, oldest first.
    turns: Vec<TurnRecord>,
    /// Number of completed rounds.
    rounds_played: u32,
}

/// History as written in a snapshot, before it is normalised.
#[derive(Deserialize)]
struct HistoryRecord {
    #[serde(default)]
    turns: Vec<TurnRecord>,
    #[serde(default)]
    rounds_played: u32,
}

impl From<HistoryRecord> for History {
    fn from(record: HistoryRecord) -> Self {
        let HistoryRecord {
            mut turns,
            rounds_played,
        } = record;
        turns.sort_by_key(|turn| turn.round);
        let latest = turns.last().map_or(0, |turn| turn.round);
        Self {
            turns,
            rounds_played: rounds_played.max(latest),
        }
    }
}

impl History {
    /// Create an empty history at round zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Log a turn in the round currently being played.
    pub fn record(&mut self, warrior: WarriorId, action: Action) {
        self.turns.push(TurnRecord {
            round: self.rounds_played,
            warrior,
            action,
        });
    }

    /// Close the current round.
    pub fn end_round(&mut self) {
        self.rounds_played = self.rounds_played.saturating_add(1);
    }

    /// Number of completed rounds.
    #[must_use]
    pub const fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// All logged turns, oldest first.
    #[must_use]
    pub fn turns(&self) -> &[TurnRecord] {
        &self.turns
    }

    /// Turns logged during `round`.
    pub fn turns_in_round(&self, round: u32) -> impl Iterator<Item = &TurnRecord> + '_ {
        self.turns.iter().filter(move |turn| turn.round == round)
    }

    /// Number of logged turns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Returns `true` if no turn has been logged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

impl RoundLog for History {
    fn rounds_played(&self) -> u32 {
        self.rounds_played
    }
}
