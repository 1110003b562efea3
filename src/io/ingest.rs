//! CSV ingest for batch runs.
//!
//! Input is a headered CSV with one lifted set per row:
//!
//! ```text
//! id,weight,reps,formula
//! squat-top,140,5,
//! bench-amrap,90,11,wathan
//! ```
//!
//! `weight` and `reps` are required columns; `id` and `formula` are optional.
//! Bad rows are skipped and reported, a missing required column is fatal.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::domain::{Formula, LiftSet};
use crate::error::AppError;

/// A row-level problem encountered during ingest.
#[derive(Debug, Clone, PartialEq)]
pub struct RowError {
    pub line: usize,
    pub id: Option<String>,
    pub message: String,
}

/// Parsed sets plus whatever was skipped along the way.
#[derive(Debug, Clone)]
pub struct IngestedSets {
    pub sets: Vec<LiftSet>,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
}

/// Open `path` and read sets from it.
pub fn load_sets(path: &Path) -> Result<IngestedSets, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::input(format!("Failed to open CSV '{}': {e}", path.display())))?;
    let ingested = read_sets(file)?;
    log::info!(
        "read {} row(s) from {}: {} usable, {} skipped",
        ingested.rows_read,
        path.display(),
        ingested.sets.len(),
        ingested.row_errors.len()
    );
    Ok(ingested)
}

/// Read sets from any CSV source.
pub fn read_sets<R: Read>(source: R) -> Result<IngestedSets, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader
        .headers()
        .map_err(|e| AppError::input(format!("Failed to read CSV headers: {e}")))?
        .clone();
    let header_map = build_header_map(&headers);

    for required in ["weight", "reps"] {
        if !header_map.contains_key(required) {
            return Err(AppError::input(format!("Missing required column '{required}'.")));
        }
    }

    let mut sets = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // Line 1 is the header.
        let line = idx + 2;
        rows_read += 1;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                row_errors.push(RowError {
                    line,
                    id: None,
                    message: format!("CSV parse error: {e}"),
                });
                continue;
            }
        };

        match parse_row(&record, &header_map) {
            Ok(set) => sets.push(set),
            Err(message) => {
                let id = field(&record, &header_map, "id").map(str::to_string);
                log::warn!("skipping line {line}: {message}");
                row_errors.push(RowError { line, id, message });
            }
        }
    }

    Ok(IngestedSets {
        sets,
        row_errors,
        rows_read,
    })
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, h)| (h.trim().to_ascii_lowercase(), i))
        .collect()
}

fn field<'a>(record: &'a StringRecord, header_map: &HashMap<String, usize>, name: &str) -> Option<&'a str> {
    header_map
        .get(name)
        .and_then(|&i| record.get(i))
        .filter(|v| !v.is_empty())
}

fn parse_row(record: &StringRecord, header_map: &HashMap<String, usize>) -> Result<LiftSet, String> {
    let weight = parse_number(record, header_map, "weight")?;
    if !(weight.is_finite() && weight > 0.0) {
        return Err(format!("weight must be positive, got {weight}"));
    }

    let reps = parse_number(record, header_map, "reps")?;
    if !(reps.is_finite() && reps >= 0.0) {
        return Err(format!("reps must be non-negative, got {reps}"));
    }

    let formula = field(record, header_map, "formula").map(|raw| {
        let f = Formula::from_tag(raw);
        if Formula::parse(raw).is_none() {
            log::warn!("unknown formula '{raw}', using the default policy");
        }
        f
    });

    Ok(LiftSet {
        id: field(record, header_map, "id").unwrap_or_default().to_string(),
        weight,
        reps,
        formula,
    })
}

fn parse_number(record: &StringRecord, header_map: &HashMap<String, usize>, name: &str) -> Result<f64, String> {
    let raw = field(record, header_map, name).ok_or_else(|| format!("missing {name}"))?;
    raw.parse::<f64>()
        .map_err(|_| format!("invalid {name} value '{raw}'"))
}
