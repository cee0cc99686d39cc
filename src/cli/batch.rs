//! Batch command implementation.

use super::output::{format_batch_text, BatchStats, JsonBatchEntry, JsonBatchResult};
use super::{CliError, OutputFormat, RuleArgs};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::PathBuf;
use std::time::Instant;
use warband::{evaluate_all, History, Map, Outcome, Progression, Snapshot, Warrior};

/// Execute the batch command.
///
/// Snapshots that fail to load are reported alongside the others rather than
/// aborting the batch.
///
/// # Errors
///
/// Returns an error if the rule cannot be resolved or output fails.
pub(crate) fn execute(
    snapshots: &[PathBuf],
    rule_args: &RuleArgs,
    threads: Option<usize>,
    format: OutputFormat,
    progress: bool,
) -> Result<(), CliError> {
    let config = rule_args.resolve()?;
    let rule = config.build();

    // Set thread pool size if specified
    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .ok(); // Ignore error if already initialized
    }

    // Progress bar
    let pb = if progress {
        let pb = ProgressBar::new(snapshots.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} snapshots")
            .map_err(|e| CliError::new(format!("Invalid progress template: {e}")))?
            .progress_chars("=>-");
        pb.set_style(style);
        Some(pb)
    } else {
        None
    };

    let start = Instant::now();

    // Loading is the I/O-bound part, so the bar ticks per file read.
    let loaded: Vec<Result<Snapshot, String>> = snapshots
        .par_iter()
        .map(|path| {
            let result = Snapshot::load(path).map_err(|e| e.to_string());
            if let Some(pb) = &pb {
                pb.inc(1);
            }
            result
        })
        .collect();

    let results = evaluate_loaded(loaded, &*rule);

    if let Some(pb) = pb {
        pb.finish_with_message("done");
    }

    let mut stats = BatchStats::default();
    for (path, result) in snapshots.iter().zip(&results) {
        if let Err(e) = result {
            tracing::warn!(snapshot = %path.display(), error = %e, "snapshot skipped");
        }
        stats.add(result);
    }

    tracing::info!(
        snapshots = stats.total(),
        advanced = stats.advanced,
        game_over = stats.game_over,
        undecided = stats.undecided,
        failed = stats.failed,
        elapsed = ?start.elapsed(),
        "batch complete"
    );

    match format {
        OutputFormat::Text => {
            print!("{}", format_batch_text(&config, snapshots, &results, &stats));
        }
        OutputFormat::Json => {
            let entries = snapshots
                .iter()
                .zip(&results)
                .map(|(path, result)| JsonBatchEntry {
                    snapshot: path.display().to_string(),
                    result: result.as_ref().ok(),
                    error: result.as_ref().err().map(String::as_str),
                })
                .collect();
            let json_result = JsonBatchResult {
                rule: config,
                entries,
                totals: stats,
            };
            let json = serde_json::to_string_pretty(&json_result)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}

/// Evaluate the snapshots that loaded, keeping load failures in place.
fn evaluate_loaded<P>(
    loaded: Vec<Result<Snapshot, String>>,
    rule: &P,
) -> Vec<Result<Outcome<Warrior>, String>>
where
    P: Progression<Warrior, Map, History> + ?Sized,
{
    let mut ready = Vec::with_capacity(loaded.len());
    let slots: Vec<Result<(), String>> = loaded
        .into_iter()
        .map(|result| result.map(|snapshot| ready.push(snapshot)))
        .collect();

    let mut outcomes = evaluate_all(&ready, rule).into_iter();
    slots
        .into_iter()
        .map(|slot| {
            slot.and_then(|()| match outcomes.next() {
                Some(outcome) => outcome.map_err(|e| e.to_string()),
                None => Err("snapshot was not evaluated".to_string()),
            })
        })
        .collect()
}
