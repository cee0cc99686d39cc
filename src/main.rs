//! Warband CLI - Command-line interface for checking progression decisions.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Warband - progression engine for a turn-based warrior combat simulator
#[derive(Parser, Debug)]
#[command(name = "warband")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a progression rule against one snapshot
    Evaluate {
        /// Snapshot file (.json)
        #[arg(required = true)]
        snapshot: PathBuf,

        #[command(flatten)]
        rule: cli::RuleArgs,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Evaluate a progression rule against many snapshots in parallel
    Batch {
        /// Snapshot files (.json)
        #[arg(required = true, num_args = 1..)]
        snapshots: Vec<PathBuf>,

        #[command(flatten)]
        rule: cli::RuleArgs,

        /// Parallel threads (default: CPU count)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Show progress bar
        #[arg(short, long)]
        progress: bool,
    },

    /// Parse an ASCII map file and report what it contains
    CheckMap {
        /// Map file (one row per line)
        #[arg(required = true)]
        map: PathBuf,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    cli::init_tracing(args.verbose);

    let result = match args.command {
        Commands::Evaluate {
            snapshot,
            rule,
            format,
        } => cli::evaluate::execute(&snapshot, &rule, format),

        Commands::Batch {
            snapshots,
            rule,
            threads,
            format,
            progress,
        } => cli::batch::execute(&snapshots, &rule, threads, format, progress),

        Commands::CheckMap { map } => cli::check_map::execute(&map),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
