use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info};

use cdash_model::{CaseRecord, DashError, Dataset, Result};

/// Path the CLI falls back to when no dataset argument is given.
pub const DEFAULT_DATA_PATH: &str = "data/dataset.csv";

const COUNTRY_COLUMN: &str = "Country/Region";

/// Column positions of the required fields within the source header.
struct ColumnIndex {
    country: usize,
    confirmed: usize,
    deaths: usize,
    recovered: usize,
    active: usize,
}

fn normalize_header(raw: &str) -> &str {
    raw.trim().trim_matches('\u{feff}')
}

fn resolve_columns(headers: &StringRecord) -> Result<ColumnIndex> {
    let find = |name: &str| {
        headers
            .iter()
            .position(|header| normalize_header(header) == name)
            .ok_or_else(|| DashError::Parse(format!("missing required column: {name}")))
    };
    Ok(ColumnIndex {
        country: find(COUNTRY_COLUMN)?,
        confirmed: find("Confirmed")?,
        deaths: find("Deaths")?,
        recovered: find("Recovered")?,
        active: find("Active")?,
    })
}

/// Parse a trimmed, non-empty metric cell.
///
/// The stored schema is unsigned counts: fractional values truncate toward
/// zero and negative values clamp to zero. Returns `None` for text that is
/// not numeric at all.
fn parse_count(trimmed: &str) -> Option<u64> {
    if let Ok(value) = trimmed.parse::<u64>() {
        return Some(value);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(if value > 0.0 { value as u64 } else { 0 }),
        _ => None,
    }
}

fn parse_error(path: &Path, error: impl std::fmt::Display) -> DashError {
    DashError::Parse(format!("{}: {error}", path.display()))
}

/// Load the case table from a delimited file with a header row.
///
/// Fails with `NotFound` when the path is not an existing file and with
/// `Parse` when the content is not tabular or a required column is absent.
/// Metric cells that are missing or unparseable become zero; the country
/// cell is kept verbatim, including when empty.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    if !path.is_file() {
        return Err(DashError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|error| parse_error(path, error))?;
    let headers = reader
        .headers()
        .map_err(|error| parse_error(path, error))?
        .clone();
    let columns = resolve_columns(&headers)?;

    let mut records = Vec::new();
    let mut coerced = 0usize;
    for record in reader.records() {
        let record = record.map_err(|error| parse_error(path, error))?;
        let mut metric = |index: usize| -> u64 {
            let raw = record.get(index).unwrap_or("").trim();
            if raw.is_empty() {
                coerced += 1;
                return 0;
            }
            match parse_count(raw) {
                Some(value) => value,
                None => {
                    coerced += 1;
                    0
                }
            }
        };
        let confirmed = metric(columns.confirmed);
        let deaths = metric(columns.deaths);
        let recovered = metric(columns.recovered);
        let active = metric(columns.active);
        records.push(CaseRecord {
            country: record.get(columns.country).unwrap_or("").trim().to_string(),
            confirmed,
            deaths,
            recovered,
            active,
        });
    }

    let dataset = Dataset::new(records);
    info!(
        path = %path.display(),
        rows = dataset.len(),
        "dataset loaded"
    );
    if coerced > 0 {
        debug!(coerced, "metric cells coerced to zero");
    }
    Ok(dataset)
}
