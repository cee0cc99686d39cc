//! CLI command implementations for Warband.

pub(crate) mod batch;
pub(crate) mod check_map;
pub(crate) mod evaluate;

mod output;

use clap::ValueEnum;
use std::error::Error;
use std::fmt;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::Level;
use warband::{LoadError, MapParseError, ProgressionConfig, RuleKind};

/// Output format for the `evaluate` and `batch` commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Base rule selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum RuleArg {
    /// Everyone advances once a warrior stands on an exit.
    ReachExit,
    /// The sole remaining warrior advances.
    LastStanding,
}

impl From<RuleArg> for RuleKind {
    fn from(arg: RuleArg) -> Self {
        match arg {
            RuleArg::ReachExit => Self::ReachExit,
            RuleArg::LastStanding => Self::LastStanding,
        }
    }
}

/// Rule selection shared by commands that evaluate snapshots.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct RuleArgs {
    /// Base progression rule
    #[arg(short, long, value_enum, default_value = "reach-exit")]
    rule: RuleArg,

    /// End undecided runs after this many rounds
    #[arg(short = 'l', long)]
    round_limit: Option<u32>,

    /// Read the rule from a JSON config file instead
    #[arg(short, long, conflicts_with_all = ["rule", "round_limit"])]
    config: Option<PathBuf>,
}

impl RuleArgs {
    /// Resolve the flags (or config file) into a progression config.
    pub(crate) fn resolve(&self) -> Result<ProgressionConfig, CliError> {
        if let Some(path) = &self.config {
            return Ok(ProgressionConfig::load(path)?);
        }

        let config = ProgressionConfig::new(self.rule.into());
        Ok(match self.round_limit {
            Some(limit) => config.with_round_limit(limit),
            None => config,
        })
    }
}

/// Log level for a `-v` count.
fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Colour codes only go to a terminal.
fn wants_ansi(stream: &impl IsTerminal) -> bool {
    stream.is_terminal()
}

/// Install the stderr log subscriber.
pub(crate) fn init_tracing(verbosity: u8) {
    tracing_subscriber::fmt()
        .with_max_level(level_for(verbosity))
        .with_writer(std::io::stderr)
        .with_ansi(wants_ansi(&std::io::stderr()))
        .with_target(false)
        .init();
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<LoadError> for CliError {
    fn from(e: LoadError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<MapParseError> for CliError {
    fn from(e: MapParseError) -> Self {
        Self::new(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warband::{Coord, History, Map, Outcome, Progression, Warrior};

    fn flags(rule: RuleArg, round_limit: Option<u32>) -> RuleArgs {
        RuleArgs {
            rule,
            round_limit,
            config: None,
        }
    }

    #[test]
    fn test_resolve_plain_rule() {
        let config = flags(RuleArg::LastStanding, None).resolve().unwrap();
        assert_eq!(config, ProgressionConfig::new(RuleKind::LastStanding));
    }

    #[test]
    fn test_resolve_round_limit_wraps_rule() {
        let config = flags(RuleArg::ReachExit, Some(5)).resolve().unwrap();
        assert_eq!(config.rule, RuleKind::ReachExit);
        assert_eq!(config.round_limit, Some(5));

        let map = Map::from_ascii(&["..>"]).unwrap();
        let roster = vec![Warrior::new(1, "Ash", Coord::new(0, 0))];
        let mut history = History::new();
        for _ in 0..5 {
            history.end_round();
        }
        assert_eq!(config.build().evaluate(&roster, &map, &history), Outcome::GameOver);
    }

    #[test]
    fn test_resolve_reads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rule.json");
        std::fs::write(&path, r#"{"rule":"last_standing","round_limit":3}"#).unwrap();

        let args = RuleArgs {
            rule: RuleArg::ReachExit,
            round_limit: None,
            config: Some(path),
        };
        assert_eq!(
            args.resolve().unwrap(),
            ProgressionConfig::new(RuleKind::LastStanding).with_round_limit(3)
        );
    }

    #[test]
    fn test_resolve_missing_config_file() {
        let args = RuleArgs {
            rule: RuleArg::ReachExit,
            round_limit: None,
            config: Some(PathBuf::from("/nonexistent/rule.json")),
        };
        let err = args.resolve().unwrap_err();
        assert!(err.to_string().contains("rule.json"));
    }

    #[test]
    fn test_log_levels() {
        assert_eq!(level_for(0), Level::WARN);
        assert_eq!(level_for(1), Level::DEBUG);
        assert_eq!(level_for(7), Level::TRACE);
    }

    #[test]
    fn test_no_ansi_when_not_a_terminal() {
        let file = tempfile::tempfile().unwrap();
        assert!(!wants_ansi(&file));
    }

    #[test]
    fn test_rule_arg_maps_to_kind() {
        assert_eq!(RuleKind::from(RuleArg::ReachExit), RuleKind::ReachExit);
        assert_eq!(RuleKind::from(RuleArg::LastStanding), RuleKind::LastStanding);
    }
}
