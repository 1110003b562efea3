//! Command-line parsing for the `orm` binary.
//!
//! Parsing is kept apart from dispatch (`app`) and from the math (`formulas`).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::Formula;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "orm", version, about = "One-rep max estimates and rep predictions")]
pub struct Cli {
    /// Decimal places in text output, 0 to 10 (overrides ORM_PRECISION).
    #[arg(short = 'p', long, global = true, value_parser = crate::config::parse_precision)]
    pub precision: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Estimate a 1RM from a weight lifted for a number of reps.
    Estimate(EstimateArgs),
    /// Predict how many reps a known 1RM allows at a given weight.
    Predict(PredictArgs),
    /// Estimate 1RMs for every set in a CSV file.
    ///
    /// Required columns: `weight`, `reps`. Optional: `id`, `formula`.
    Batch(BatchArgs),
}

#[derive(Debug, Parser, Clone)]
#[command(allow_negative_numbers = true)]
pub struct EstimateArgs {
    /// Weight lifted (any unit; the estimate comes back in the same unit).
    #[arg(short = 'w', long)]
    pub weight: f64,

    /// Repetitions performed.
    #[arg(short = 'r', long)]
    pub reps: f64,

    /// Formula to use (overrides ORM_FORMULA).
    #[arg(short = 'f', long, value_enum)]
    pub formula: Option<Formula>,

    /// Show every named formula side by side.
    #[arg(long, conflicts_with = "formula")]
    pub all: bool,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Parser, Clone)]
#[command(allow_negative_numbers = true)]
pub struct PredictArgs {
    /// Known one-rep max.
    #[arg(long = "rm1", value_name = "RM1")]
    pub rm1: f64,

    /// Target weight.
    #[arg(short = 'w', long)]
    pub weight: f64,

    /// Formula to invert (overrides ORM_FORMULA; `default` means Epley here).
    #[arg(short = 'f', long, value_enum)]
    pub formula: Option<Formula>,

    /// Show every named formula side by side.
    #[arg(long, conflicts_with = "formula")]
    pub all: bool,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Parser, Clone)]
pub struct BatchArgs {
    /// CSV file with one set per row.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Formula for rows without a `formula` value (overrides ORM_FORMULA).
    #[arg(short = 'f', long, value_enum)]
    pub formula: Option<Formula>,

    /// Write per-set results to this CSV file.
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}
