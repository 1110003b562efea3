//! Export per-set batch results to CSV.
//!
//! One row per input set, with the selected estimate followed by every named
//! formula so the file can be compared in a spreadsheet.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::{Formula, SetEstimate};
use crate::error::AppError;

/// Write batch results to a CSV file.
pub fn write_results_csv(path: &Path, results: &[SetEstimate]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::input(format!("Failed to create export CSV '{}': {e}", path.display())))?;
    write_results(file, results)?;
    log::info!("wrote {} result row(s) to {}", results.len(), path.display());
    Ok(())
}

/// Write batch results as CSV to any writer.
pub fn write_results<W: Write>(sink: W, results: &[SetEstimate]) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_writer(sink);

    let mut header = vec!["id", "weight", "reps", "formula", "estimate"];
    header.extend(Formula::NAMED.iter().map(|f| f.tag()));
    writer
        .write_record(&header)
        .map_err(|e| AppError::input(format!("Failed to write export CSV header: {e}")))?;

    for r in results {
        let mut row = vec![
            r.set.id.clone(),
            format!("{}", r.set.weight),
            format!("{}", r.set.reps),
            r.formula.tag().to_string(),
            format!("{:.4}", r.one_rep_max),
        ];
        row.extend(
            Formula::NAMED
                .iter()
                .map(|f| r.all.get(f).map(|v| format!("{v:.4}")).unwrap_or_default()),
        );
        writer
            .write_record(&row)
            .map_err(|e| AppError::input(format!("Failed to write export CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::input(format!("Failed to flush export CSV: {e}")))?;

    Ok(())
}
