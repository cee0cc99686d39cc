//! Output formatting utilities for CLI.

use std::path::Path;

use serde::Serialize;
use warband::{Outcome, ProgressionConfig, Warrior};

/// JSON-serializable single evaluation.
#[derive(Debug, Serialize)]
pub(super) struct JsonEvaluation<'a> {
    /// Rule that was applied.
    pub(super) rule: ProgressionConfig,
    /// Completed rounds recorded in the snapshot.
    pub(super) rounds_played: u32,
    /// The decision.
    pub(super) result: &'a Outcome<Warrior>,
}

/// JSON-serializable batch entry.
#[derive(Debug, Serialize)]
pub(super) struct JsonBatchEntry<'a> {
    /// Snapshot file.
    pub(super) snapshot: String,
    /// The decision (null if the snapshot failed to load).
    pub(super) result: Option<&'a Outcome<Warrior>>,
    /// Load error (null on success).
    pub(super) error: Option<&'a str>,
}

/// JSON-serializable batch result.
#[derive(Debug, Serialize)]
pub(super) struct JsonBatchResult<'a> {
    /// Rule that was applied.
    pub(super) rule: ProgressionConfig,
    /// Per-snapshot results, in argument order.
    pub(super) entries: Vec<JsonBatchEntry<'a>>,
    /// Aggregated counts.
    pub(super) totals: BatchStats,
}

/// Outcome counts for a batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub(super) struct BatchStats {
    /// Snapshots whose roster advances.
    pub(super) advanced: u64,
    /// Snapshots that ended the run.
    pub(super) game_over: u64,
    /// Snapshots still undecided.
    pub(super) undecided: u64,
    /// Snapshots that could not be evaluated.
    pub(super) failed: u64,
}

impl BatchStats {
    /// Count one evaluation.
    pub(super) fn add(&mut self, result: &Result<Outcome<Warrior>, String>) {
        match result {
            Ok(Outcome::Advance(_)) => self.advanced += 1,
            Ok(Outcome::GameOver) => self.game_over += 1,
            Ok(Outcome::Undecided) => self.undecided += 1,
            Err(_) => self.failed += 1,
        }
    }

    /// Total snapshots counted.
    pub(super) fn total(&self) -> u64 {
        self.advanced + self.game_over + self.undecided + self.failed
    }
}

/// Human-readable rule description.
pub(super) fn describe_rule(config: &ProgressionConfig) -> String {
    match config.round_limit {
        Some(limit) => format!("{} (round limit {limit})", config.rule),
        None => config.rule.to_string(),
    }
}

/// One-line summary of a warrior.
fn describe_warrior(warrior: &Warrior) -> String {
    if warrior.is_alive() {
        format!("{} (#{}, {} hp)", warrior.name, warrior.id, warrior.health)
    } else {
        format!("{} (#{}, defeated)", warrior.name, warrior.id)
    }
}

/// Format a single evaluation as human-readable text.
pub(super) fn format_outcome(
    config: &ProgressionConfig,
    rounds_played: u32,
    outcome: &Outcome<Warrior>,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Rule: {}\n", describe_rule(config)));
    output.push_str(&format!("Rounds played: {rounds_played}\n"));
    output.push_str(&format!("Outcome: {}\n", outcome.label()));

    if let Some(roster) = outcome.advancing() {
        output.push_str("Advancing:\n");
        for warrior in roster {
            output.push_str(&format!("  {}\n", describe_warrior(warrior)));
        }
    }

    output
}

/// Format a batch as human-readable text.
pub(super) fn format_batch_text(
    config: &ProgressionConfig,
    paths: &[impl AsRef<Path>],
    results: &[Result<Outcome<Warrior>, String>],
    stats: &BatchStats,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Rule: {}\n\n", describe_rule(config)));

    for (path, result) in paths.iter().zip(results) {
        let path = path.as_ref().display();
        match result {
            Ok(outcome) => {
                output.push_str(&format!("  {path}: {}", outcome.label()));
                if let Some(roster) = outcome.advancing() {
                    output.push_str(&format!(" ({} warriors)", roster.len()));
                }
                output.push('\n');
            }
            Err(e) => output.push_str(&format!("  {path}: error: {e}\n")),
        }
    }

    output.push_str(&format!(
        "\nTotal: {}  advance: {}  game over: {}  undecided: {}  failed: {}\n",
        stats.total(),
        stats.advanced,
        stats.game_over,
        stats.undecided,
        stats.failed
    ));

    output
}
