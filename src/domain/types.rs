//! Shared domain types.
//!
//! Everything here is a plain value: formula tags, lifted sets read from a
//! batch file, and the result structs that get printed or serialized to JSON.

use std::collections::HashMap;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which 1RM regression to apply.
///
/// `Default` is not a formula of its own. In forward estimation it picks one of
/// the named formulas by rep count; in rep prediction it falls back to Epley.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Formula {
    /// Most accurate between 1 and 10 reps.
    Epley,
    /// Usually preferred between 1 and 5 reps.
    Brzycki,
    /// Typically used for higher rep ranges of 10+.
    Lombardi,
    /// Derived from a bench press study.
    Mayhew,
    /// A more conservative take on Mayhew.
    Wathan,
    /// Choose by rep range (forward) or Epley (inverse).
    Default,
}

impl Formula {
    /// The five concrete formulas, in presentation order.
    pub const NAMED: [Formula; 5] = [
        Formula::Epley,
        Formula::Brzycki,
        Formula::Lombardi,
        Formula::Mayhew,
        Formula::Wathan,
    ];

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            Formula::Epley => "Epley",
            Formula::Brzycki => "Brzycki",
            Formula::Lombardi => "Lombardi",
            Formula::Mayhew => "Mayhew",
            Formula::Wathan => "Wathan",
            Formula::Default => "Default",
        }
    }

    /// Lowercase tag used in CSV files and the environment.
    pub fn tag(self) -> &'static str {
        match self {
            Formula::Epley => "epley",
            Formula::Brzycki => "brzycki",
            Formula::Lombardi => "lombardi",
            Formula::Mayhew => "mayhew",
            Formula::Wathan => "wathan",
            Formula::Default => "default",
        }
    }

    /// Strict, case-insensitive tag lookup. Returns `None` for unknown tags.
    pub fn parse(tag: &str) -> Option<Formula> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "epley" => Some(Formula::Epley),
            "brzycki" => Some(Formula::Brzycki),
            "lombardi" => Some(Formula::Lombardi),
            "mayhew" => Some(Formula::Mayhew),
            "wathan" => Some(Formula::Wathan),
            "default" => Some(Formula::Default),
            _ => None,
        }
    }

    /// Lenient tag lookup: anything unrecognized becomes `Default`.
    ///
    /// Forward dispatch then applies the rep-range policy, while inverse
    /// dispatch lands on Epley.
    pub fn from_tag(tag: &str) -> Formula {
        Formula::parse(tag).unwrap_or(Formula::Default)
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Result of running a pair through every named formula.
pub type FormulaValues = HashMap<Formula, f64>;

/// One lifted set from a batch file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiftSet {
    /// Free-form label (row id, exercise, date...). Empty when absent.
    pub id: String,
    pub weight: f64,
    pub reps: f64,
    /// Per-row formula override.
    pub formula: Option<Formula>,
}

/// A single forward estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub weight: f64,
    pub reps: f64,
    pub formula: Formula,
    pub one_rep_max: f64,
}

/// A single rep prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub one_rep_max: f64,
    pub weight: f64,
    pub formula: Formula,
    pub reps: f64,
}

/// Side-by-side values for every named formula.
///
/// `inputs` holds the two arguments in call order: `(weight, reps)` for
/// estimates, `(one_rep_max, weight)` for predictions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub inputs: (f64, f64),
    pub values: FormulaValues,
}

/// Batch output for one set: the selected estimate plus every named formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetEstimate {
    pub set: LiftSet,
    /// Formula actually requested for this row (row override or run default).
    pub formula: Formula,
    pub one_rep_max: f64,
    pub all: FormulaValues,
}
