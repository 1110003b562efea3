//! Batch pipeline shared by text, JSON and CSV output.
//!
//! CSV ingest -> per-set estimates (parallel) -> results in input order.

use rayon::prelude::*;

use crate::domain::{Formula, LiftSet, SetEstimate};
use crate::formulas::{estimate_1rm, estimate_1rm_all};
use crate::io::ingest::{IngestedSets, RowError};

/// All computed outputs of a single `orm batch` run.
#[derive(Debug, Clone)]
pub struct BatchOutput {
    pub results: Vec<SetEstimate>,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
}

/// Estimate every set. Rows without their own formula use `fallback`.
pub fn estimate_sets(sets: &[LiftSet], fallback: Formula) -> Vec<SetEstimate> {
    sets.par_iter()
        .map(|set| {
            let formula = set.formula.unwrap_or(fallback);
            SetEstimate {
                one_rep_max: estimate_1rm(set.weight, set.reps, formula),
                all: estimate_1rm_all(set.weight, set.reps),
                formula,
                set: set.clone(),
            }
        })
        .collect()
}

/// Run the batch over already-ingested sets.
pub fn run_batch(ingested: IngestedSets, fallback: Formula) -> BatchOutput {
    log::debug!("estimating {} set(s), fallback formula {fallback}", ingested.sets.len());
    let results = estimate_sets(&ingested.sets, fallback);
    BatchOutput {
        results,
        row_errors: ingested.row_errors,
        rows_read: ingested.rows_read,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formulas::{estimate_1rm_brzycki, estimate_1rm_default, estimate_1rm_mayhew};

    fn set(id: &str, weight: f64, reps: f64, formula: Option<Formula>) -> LiftSet {
        LiftSet {
            id: id.to_string(),
            weight,
            reps,
            formula,
        }
    }

    #[test]
    fn row_formula_overrides_fallback() {
        let sets = vec![
            set("a", 100.0, 3.0, None),
            set("b", 100.0, 3.0, Some(Formula::Mayhew)),
        ];
        let out = estimate_sets(&sets, Formula::Brzycki);
        assert_eq!(out[0].formula, Formula::Brzycki);
        assert_eq!(out[0].one_rep_max, estimate_1rm_brzycki(100.0, 3.0));
        assert_eq!(out[1].formula, Formula::Mayhew);
        assert_eq!(out[1].one_rep_max, estimate_1rm_mayhew(100.0, 3.0));
        assert!(out.iter().all(|r| r.all.len() == 5));
    }

    #[test]
    fn preserves_input_order() {
        let sets: Vec<LiftSet> = (0..200)
            .map(|i| set(&format!("s{i}"), 50.0 + i as f64, (i % 12) as f64, None))
            .collect();
        let out = estimate_sets(&sets, Formula::Default);
        assert_eq!(out.len(), 200);
        for (i, r) in out.iter().enumerate() {
            assert_eq!(r.set.id, format!("s{i}"));
            assert_eq!(r.one_rep_max, estimate_1rm_default(r.set.weight, r.set.reps));
        }
    }

    #[test]
    fn run_batch_carries_row_errors() {
        let ingested = IngestedSets {
            sets: vec![set("a", 100.0, 8.0, None)],
            row_errors: vec![RowError {
                line: 3,
                id: None,
                message: "invalid weight value 'x'".to_string(),
            }],
            rows_read: 2,
        };
        let out = run_batch(ingested, Formula::Default);
        assert_eq!(out.results.len(), 1);
        assert_eq!(out.row_errors.len(), 1);
        assert_eq!(out.rows_read, 2);
    }
}
