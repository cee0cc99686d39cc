//! Serializable rule selection.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{LastStanding, Progression, ReachExit, RoundLimit};
use crate::error::LoadError;
use crate::game::{History, Map, Warrior};

/// The built-in base rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// [`ReachExit`]: the team advances when anyone reaches an exit.
    ReachExit,
    /// [`LastStanding`]: the sole remaining warrior advances.
    LastStanding,
}

impl RuleKind {
    /// All rule kinds, in display order.
    pub const ALL: [Self; 2] = [Self::ReachExit, Self::LastStanding];

    /// Command-line spelling of the rule.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ReachExit => "reach-exit",
            Self::LastStanding => "last-standing",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a rule name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRuleError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for ParseRuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown rule '{}' (expected one of: reach-exit, last-standing)",
            self.input
        )
    }
}

impl std::error::Error for ParseRuleError {}

impl FromStr for RuleKind {
    type Err = ParseRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| ParseRuleError {
                input: s.to_string(),
            })
    }
}

/// Which rule a run uses, and whether it is round limited.
///
/// Stored as JSON:
///
/// ```json
/// { "rule": "reach_exit", "round_limit": 200 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProgressionConfig {
    /// The base rule.
    pub rule: RuleKind,
    /// Rounds after which an undecided run ends. `None` means no limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round_limit: Option<u32>,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self::new(RuleKind::ReachExit)
    }
}

impl ProgressionConfig {
    /// Unlimited configuration for the given rule.
    #[must_use]
    pub const fn new(rule: RuleKind) -> Self {
        Self {
            rule,
            round_limit: None,
        }
    }

    /// Returns the configuration with a round limit applied.
    #[must_use]
    pub const fn with_round_limit(mut self, limit: u32) -> Self {
        self.round_limit = Some(limit);
        self
    }

    /// Builds the configured rule for the game's own collaborator types.
    #[must_use]
    pub fn build(&self) -> Box<dyn Progression<Warrior, Map, History>> {
        tracing::debug!(rule = %self.rule, round_limit = ?self.round_limit, "building progression rule");

        let base: Box<dyn Progression<Warrior, Map, History>> = match self.rule {
            RuleKind::ReachExit => Box::new(ReachExit),
            RuleKind::LastStanding => Box::new(LastStanding),
        };

        match self.round_limit {
            Some(limit) => Box::new(RoundLimit::new(limit, base)),
            None => base,
        }
    }

    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid configuration.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid
    /// configuration.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let json = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), rule = %config.rule, "loaded progression config");
        Ok(config)
    }
}
