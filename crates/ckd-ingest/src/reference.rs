//! Reference statistics loader.
//!
//! Reads the reference dataset (feature columns plus one `Class` label
//! column) and derives the per-feature minimum and maximum used for
//! normalization. The result is held as a value by the caller; re-reading
//! the file only happens through an explicit [`load_reference_stats`] call.

use std::collections::BTreeMap;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, info};

use ckd_model::{CkdError, FeatureRange, FeatureSchema, ReferenceStats, Result};

/// Name of the diagnosis label column dropped before deriving statistics.
pub const LABEL_COLUMN: &str = "Class";

/// Load per-feature (min, max) statistics from a reference CSV.
///
/// # Errors
///
/// - [`CkdError::Io`] when the file is missing or unreadable
/// - [`CkdError::MissingLabelColumn`] when the `Class` column is absent
/// - [`CkdError::SchemaMismatch`] when the remaining columns differ from
///   the feature schema
/// - [`CkdError::InvalidCell`] when a cell is empty or non-numeric
/// - [`CkdError::EmptyReference`] when the file has headers but no rows
pub fn load_reference_stats(path: &Path) -> Result<ReferenceStats> {
    let schema = FeatureSchema::expected();
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|error| csv_error(path, &error))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|error| csv_error(path, &error))?
        .iter()
        .map(|h| h.trim_matches('\u{feff}').trim().to_string())
        .collect();

    let label_index = headers
        .iter()
        .position(|h| h == LABEL_COLUMN)
        .ok_or_else(|| CkdError::MissingLabelColumn {
            path: path.to_path_buf(),
            label: LABEL_COLUMN.to_string(),
        })?;

    let feature_columns: Vec<String> = headers
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != label_index)
        .map(|(_, name)| name.clone())
        .collect();
    schema.validate_columns("reference data", &feature_columns)?;

    let mut ranges: BTreeMap<String, FeatureRange> = BTreeMap::new();
    let mut row_count = 0usize;
    for (row_idx, record) in reader.records().enumerate() {
        let record = record.map_err(|error| csv_error(path, &error))?;
        row_count += 1;
        for (col_idx, raw) in record.iter().enumerate() {
            if col_idx == label_index {
                continue;
            }
            let column = &headers[col_idx];
            let value = parse_cell(path, column, row_idx, raw)?;
            ranges
                .entry(column.clone())
                .and_modify(|range| {
                    range.min = range.min.min(value);
                    range.max = range.max.max(value);
                })
                .or_insert_with(|| FeatureRange::new(value, value));
        }
    }

    if row_count == 0 {
        return Err(CkdError::EmptyReference {
            path: path.to_path_buf(),
        });
    }

    info!(
        path = %path.display(),
        rows = row_count,
        features = ranges.len(),
        "loaded reference statistics"
    );
    for (name, range) in &ranges {
        debug!(feature = %name, min = range.min, max = range.max, "reference range");
    }

    ReferenceStats::new(&schema, ranges)
}

fn parse_cell(path: &Path, column: &str, row_idx: usize, raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    let value = trimmed.parse::<f64>().ok();
    match value {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(CkdError::InvalidCell {
            path: path.to_path_buf(),
            column: column.to_string(),
            // Header is row 1 in the file, first record is row 2.
            row: row_idx + 2,
            value: trimmed.to_string(),
        }),
    }
}

fn csv_error(path: &Path, error: &csv::Error) -> CkdError {
    if let csv::ErrorKind::Io(io) = error.kind() {
        return CkdError::io(path, std::io::Error::new(io.kind(), io.to_string()));
    }
    CkdError::Csv {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}
