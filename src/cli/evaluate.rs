//! Evaluate command implementation.

use super::output::{format_outcome, JsonEvaluation};
use super::{CliError, OutputFormat, RuleArgs};
use std::path::Path;
use warband::Snapshot;

/// Execute the evaluate command.
///
/// # Errors
///
/// Returns an error if the rule or snapshot cannot be loaded.
pub(crate) fn execute(
    snapshot_path: &Path,
    rule_args: &RuleArgs,
    format: OutputFormat,
) -> Result<(), CliError> {
    let config = rule_args.resolve()?;
    let snapshot = Snapshot::load(snapshot_path)?;
    let rule = config.build();

    let outcome = snapshot.evaluate(&*rule)?;
    let rounds_played = snapshot.history.rounds_played();

    tracing::info!(
        snapshot = %snapshot_path.display(),
        outcome = outcome.label(),
        rounds_played,
        "evaluated snapshot"
    );

    match format {
        OutputFormat::Text => {
            print!("{}", format_outcome(&config, rounds_played, &outcome));
        }
        OutputFormat::Json => {
            let json_result = JsonEvaluation {
                rule: config,
                rounds_played,
                result: &outcome,
            };
            let json = serde_json::to_string_pretty(&json_result)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}
