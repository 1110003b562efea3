//! Reporting: terminal text and JSON output.

pub mod format;

pub use format::*;

use serde::Serialize;

use crate::error::AppError;

/// Serialize any report value as pretty JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| AppError::input(format!("Failed to serialize JSON output: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Comparison, Estimate, Formula};
    use crate::formulas::estimate_1rm_all;

    #[test]
    fn estimate_json_has_lowercase_formula() {
        let e = Estimate {
            weight: 100.0,
            reps: 5.0,
            formula: Formula::Brzycki,
            one_rep_max: 112.5,
        };
        let json = to_json(&e).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["formula"], "brzycki");
        assert_eq!(v["one_rep_max"], 112.5);
    }

    #[test]
    fn comparison_json_is_keyed_by_formula() {
        let c = Comparison {
            inputs: (100.0, 5.0),
            values: estimate_1rm_all(100.0, 5.0),
        };
        let json = to_json(&c).unwrap();
        let back: Comparison = serde_json::from_str(&json).unwrap();
        assert_eq!(back.values.len(), 5);
        for f in Formula::NAMED {
            assert!((back.values[&f] - c.values[&f]).abs() < 1e-9);
        }
    }
}
