//! Terminal formatting for estimates, predictions and batch runs.
//!
//! Formatting lives here so the math stays free of presentation concerns.
//! Tables are always ordered by `Formula::NAMED`; the underlying maps are not.

use crate::app::pipeline::BatchOutput;
use crate::domain::{Comparison, Estimate, Formula, Prediction};
use crate::formulas::default_formula_for;

/// One line: the chosen formula and its 1RM estimate.
pub fn format_estimate(estimate: &Estimate, precision: usize) -> String {
    format!(
        "{} 1RM for {} x {}: {:.*}",
        formula_label(estimate.formula, estimate.reps),
        fmt_num(estimate.weight),
        fmt_num(estimate.reps),
        precision,
        estimate.one_rep_max,
    )
}

/// One line: the chosen inverse and its predicted reps.
pub fn format_prediction(prediction: &Prediction, precision: usize) -> String {
    let label = match prediction.formula {
        Formula::Default => "Default (Epley)".to_string(),
        f => f.display_name().to_string(),
    };
    format!(
        "{label} reps at {} with a 1RM of {}: {:.*}",
        fmt_num(prediction.weight),
        fmt_num(prediction.one_rep_max),
        precision,
        prediction.reps,
    )
}

/// A two-column table of every named formula.
pub fn format_comparison(title: &str, value_header: &str, comparison: &Comparison, precision: usize) -> String {
    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    out.push_str(format!("{:<10} {:>12}", "formula", value_header).trim_end());
    out.push('\n');
    out.push_str(&format!("{:-<10} {:-<12}\n", "", ""));

    for f in Formula::NAMED {
        let value = comparison
            .values
            .get(&f)
            .map(|v| format!("{v:.precision$}"))
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!("{:<10} {:>12}\n", f.display_name(), value));
    }

    out
}

/// The batch table followed by a summary of skipped rows.
pub fn format_batch(output: &BatchOutput, precision: usize) -> String {
    let mut out = String::new();

    out.push_str(format!(
        "{:<20} {:>9} {:>6} {:<18} {:>10}",
        "id", "weight", "reps", "formula", "1rm"
    )
    .trim_end());
    out.push('\n');
    out.push_str(&format!("{:-<20} {:-<9} {:-<6} {:-<18} {:-<10}\n", "", "", "", "", ""));

    for r in &output.results {
        out.push_str(
            format!(
                "{:<20} {:>9} {:>6} {:<18} {:>10.*}",
                truncate(&r.set.id, 20),
                fmt_num(r.set.weight),
                fmt_num(r.set.reps),
                formula_label(r.formula, r.set.reps),
                precision,
                r.one_rep_max,
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out.push_str(&format!(
        "\nRows: read={} used={} skipped={}\n",
        output.rows_read,
        output.results.len(),
        output.row_errors.len()
    ));
    for e in &output.row_errors {
        match &e.id {
            Some(id) => out.push_str(&format!("  line {} ({id}): {}\n", e.line, e.message)),
            None => out.push_str(&format!("  line {}: {}\n", e.line, e.message)),
        }
    }

    out
}

/// `Default` is shown with the formula the rep-range policy resolved to.
fn formula_label(formula: Formula, reps: f64) -> String {
    match formula {
        Formula::Default => match default_formula_for(reps) {
            Some(resolved) => format!("Default ({resolved})"),
            None => "Default (as lifted)".to_string(),
        },
        f => f.display_name().to_string(),
    }
}

/// Inputs print without trailing zeros (`100`, `2.5`).
fn fmt_num(v: f64) -> String {
    format!("{v}")
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('.');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LiftSet, SetEstimate};
    use crate::formulas::{estimate_1rm_all, predict_reps_all};
    use crate::io::ingest::RowError;

    #[test]
    fn estimate_line_uses_precision() {
        let e = Estimate {
            weight: 100.0,
            reps: 5.0,
            formula: Formula::Epley,
            one_rep_max: 116.666_666,
        };
        assert_eq!(format_estimate(&e, 2), "Epley 1RM for 100 x 5: 116.67");
        assert_eq!(format_estimate(&e, 0), "Epley 1RM for 100 x 5: 117");
    }

    #[test]
    fn default_label_shows_resolved_formula() {
        assert_eq!(formula_label(Formula::Default, 3.0), "Default (Brzycki)");
        assert_eq!(formula_label(Formula::Default, 8.0), "Default (Epley)");
        assert_eq!(formula_label(Formula::Default, 12.0), "Default (Wathan)");
        assert_eq!(formula_label(Formula::Default, 1.0), "Default (as lifted)");
        assert_eq!(formula_label(Formula::Mayhew, 3.0), "Mayhew");
    }

    #[test]
    fn prediction_default_is_labelled_epley() {
        let p = Prediction {
            one_rep_max: 130.0,
            weight: 100.0,
            formula: Formula::Default,
            reps: 9.0,
        };
        assert_eq!(
            format_prediction(&p, 1),
            "Default (Epley) reps at 100 with a 1RM of 130: 9.0"
        );
    }

    #[test]
    fn comparison_lists_formulas_in_fixed_order() {
        let c = Comparison {
            inputs: (130.0, 100.0),
            values: predict_reps_all(130.0, 100.0),
        };
        let text = format_comparison("Predicted reps", "reps", &c, 2);
        let names: Vec<&str> = text
            .lines()
            .skip(3)
            .map(|l| l.split_whitespace().next().unwrap())
            .collect();
        assert_eq!(names, vec!["Epley", "Brzycki", "Lombardi", "Mayhew", "Wathan"]);
        assert!(text.contains("Epley              9.00"));
    }

    #[test]
    fn batch_table_reports_skipped_rows() {
        let output = BatchOutput {
            results: vec![SetEstimate {
                set: LiftSet {
                    id: "a-very-long-set-identifier-here".to_string(),
                    weight: 100.0,
                    reps: 8.0,
                    formula: None,
                },
                formula: Formula::Default,
                one_rep_max: 126.666_666,
                all: estimate_1rm_all(100.0, 8.0),
            }],
            row_errors: vec![RowError {
                line: 3,
                id: Some("b".to_string()),
                message: "invalid weight value 'x'".to_string(),
            }],
            rows_read: 2,
        };
        let text = format_batch(&output, 1);
        assert!(text.contains("a-very-long-set-ide."));
        assert!(text.contains("Default (Epley)"));
        assert!(text.contains("126.7"));
        assert!(text.contains("Rows: read=2 used=1 skipped=1"));
        assert!(text.contains("line 3 (b): invalid weight value 'x'"));
    }

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate("squat", 20), "squat");
        assert_eq!(truncate("abcdef", 4), "abc.");
    }
}
