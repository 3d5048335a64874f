//! CSV ingest for external current profiles.
//!
//! Expected format: a header row containing a `t_s` column (seconds) and an
//! `I_A` column (amperes, positive = discharge); any additional columns are
//! ignored. Validation is eager: the whole file is read and checked before a
//! profile is returned, so a caller never observes a partially valid profile.

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use ecn_core::Real;
use tracing::debug;

use crate::error::{ProfileError, ProfileResult};
use crate::profile::CurrentProfile;

/// Required time column, in seconds.
pub const TIME_COLUMN: &str = "t_s";
/// Required current column, in amperes.
pub const CURRENT_COLUMN: &str = "I_A";

/// Load and validate a current profile from a CSV file.
///
/// Row numbers in errors are 1-based counting the header as row 1, so the
/// first data row is row 2. `NaN`/`inf` cells parse as numbers and are
/// rejected afterwards by the profile factory's finiteness check, matching
/// the taxonomy split between `ParseError` and `NonFiniteValue`.
pub fn load_profile_csv(path: &Path) -> ProfileResult<CurrentProfile> {
    if !path.exists() {
        return Err(ProfileError::MissingFile {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(file);

    let headers = reader.headers()?.clone();
    let header_map = build_header_map(&headers);

    let missing: Vec<String> = [TIME_COLUMN, CURRENT_COLUMN]
        .iter()
        .filter(|name| !header_map.contains_key(**name))
        .copied()
        .map(|name| name.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ProfileError::SchemaError { missing });
    }
    let time_idx = header_map[TIME_COLUMN];
    let current_idx = header_map[CURRENT_COLUMN];

    let mut times_s: Vec<Real> = Vec::new();
    let mut currents_a: Vec<Real> = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        // Header is row 1, so the first data row reports as row 2.
        let row = idx + 2;
        let record = result?;
        times_s.push(parse_field(&record, time_idx, TIME_COLUMN, row)?);
        currents_a.push(parse_field(&record, current_idx, CURRENT_COLUMN, row)?);
    }

    if times_s.is_empty() {
        return Err(ProfileError::EmptyDataset);
    }

    debug!(samples = times_s.len(), path = %path.display(), "parsed profile CSV");
    CurrentProfile::new(times_s, currents_a)
}

fn parse_field(
    record: &StringRecord,
    idx: usize,
    field: &'static str,
    row: usize,
) -> ProfileResult<Real> {
    let cell = record.get(idx).unwrap_or("");
    cell.parse::<Real>().map_err(|_| ProfileError::ParseError {
        row,
        field,
        value: cell.to_string(),
    })
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header(name), idx))
        .collect()
}

fn normalize_header(name: &str) -> String {
    // Excel sometimes emits UTF-8 CSVs with a BOM prefix on the first header;
    // without stripping it, schema validation would report `t_s` as missing.
    name.trim().trim_start_matches('\u{feff}').to_string()
}
