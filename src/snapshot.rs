//! End-of-round snapshots.
//!
//! A snapshot freezes the three inputs a progression rule needs (map, roster,
//! history) into a JSON document, so a decision can be reproduced or checked
//! outside the game loop:
//!
//! ```json
//! {
//!   "map": ["#####", "#..>#", "#####"],
//!   "roster": [{ "id": 1, "name": "Ash", "position": { "x": 3, "y": 1 } }],
//!   "history": { "turns": [], "rounds_played": 4 }
//! }
//! ```
//!
//! Snapshots are immutable once loaded, so a batch can be evaluated in
//! parallel.

use std::fs;
use std::path::Path;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{LoadError, MapParseError};
use crate::game::{History, Map, Warrior};
use crate::progression::{Outcome, Progression};

/// Frozen end-of-round state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The map as ASCII rows (see [`Map::from_ascii`]).
    pub map: Vec<String>,
    /// Warriors in turn order.
    pub roster: Vec<Warrior>,
    /// Turn log for the current map run.
    #[serde(default)]
    pub history: History,
}

impl Snapshot {
    /// Capture the given state.
    #[must_use]
    pub fn new(map: &Map, roster: Vec<Warrior>, history: History) -> Self {
        Self {
            map: map.to_ascii(),
            roster,
            history,
        }
    }

    /// Parse a snapshot from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid snapshot.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, LoadError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a snapshot from a JSON file.
    ///
    /// The map is parsed eagerly so a malformed map is reported here rather
    /// than at evaluation time.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a valid snapshot,
    /// or holds a malformed map.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let json = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot = Self::from_json(&json)?;
        snapshot.parse_map()?;

        tracing::debug!(
            path = %path.display(),
            warriors = snapshot.roster.len(),
            rounds = snapshot.history.rounds_played(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }

    /// Save the snapshot as a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file I/O fails.
    pub fn save(&self, path: &Path) -> Result<(), LoadError> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "saved snapshot");
        Ok(())
    }

    /// Parse the stored map.
    ///
    /// # Errors
    ///
    /// Returns an error if the map rows are malformed.
    pub fn parse_map(&self) -> Result<Map, MapParseError> {
        Map::from_ascii(self.map.as_slice())
    }

    /// Run a progression rule against this snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error only if the stored map is malformed; the rule itself
    /// cannot fail.
    pub fn evaluate<P>(&self, rule: &P) -> Result<Outcome<Warrior>, MapParseError>
    where
        P: Progression<Warrior, Map, History> + ?Sized,
    {
        let map = self.parse_map()?;
        Ok(rule.evaluate(&self.roster, &map, &self.history))
    }
}

/// Evaluate a batch of snapshots in parallel.
///
/// Results are returned in the same order as `snapshots`.
pub fn evaluate_all<P>(snapshots: &[Snapshot], rule: &P) -> Vec<Result<Outcome<Warrior>, MapParseError>>
where
    P: Progression<Warrior, Map, History> + ?Sized,
{
    snapshots
        .par_iter()
        .map(|snapshot| snapshot.evaluate(rule))
        .collect()
}
