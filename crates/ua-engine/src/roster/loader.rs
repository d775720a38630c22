//! Roster loading: column resolution, row admission, status filtering and
//! case-insensitive deduplication.

use crate::roster::columns::RosterColumns;
use crate::{EngineError, EngineResult};

use ua_core::{Identity, StatusClass, StatusFilter, normalize_email};

use std::collections::HashSet;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use log::info;

pub(crate) const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Counters gathered while loading a roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadStats {
    /// Rows with a non-empty email
    pub admitted: usize,
    /// Rows left after status filtering
    pub kept: usize,
    /// Rows dropped by status filtering
    pub excluded: usize,
    /// Rows dropped as case-insensitive duplicates
    pub duplicates: usize,
    /// False when the filter was skipped (no status column, or `All`)
    pub filtered: bool,
    pub filter: StatusFilter,
    /// Header names of the resolved columns
    pub columns: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct LoadedRoster {
    pub identities: Vec<Identity>,
    pub stats: LoadStats,
}

pub fn load_roster(path: &Path, filter: StatusFilter) -> EngineResult<LoadedRoster> {
    let data = std::fs::read(path).map_err(|e| EngineError::io(path, e))?;
    let loaded = parse_roster(path, &data, filter)?;

    let stats = &loaded.stats;
    info!("Found columns: {}", stats.columns.join(", "));
    if stats.filtered {
        info!(
            "Filtering by status: {} {} from {} (excluded {})",
            stats.kept,
            stats.filter.describe(),
            stats.admitted,
            stats.excluded
        );
    } else {
        info!("Status filter not applied, processing all {} rows", stats.admitted);
    }
    info!(
        "Loaded {} users from {}",
        loaded.identities.len(),
        path.display()
    );

    Ok(loaded)
}

pub(crate) fn strip_bom(data: &[u8]) -> &[u8] {
    data.strip_prefix(UTF8_BOM).unwrap_or(data)
}

/// Parse roster bytes; `path` is only used for error context.
pub(crate) fn parse_roster(
    path: &Path,
    data: &[u8],
    filter: StatusFilter,
) -> EngineResult<LoadedRoster> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(strip_bom(data));

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| EngineError::csv(path, e))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    let columns = RosterColumns::resolve(&headers)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| EngineError::csv(path, e))?;
        if !cell(&record, Some(columns.email)).is_empty() {
            rows.push(record);
        }
    }
    let admitted = rows.len();

    let filtered = columns.status.is_some() && filter != StatusFilter::All;
    if filtered {
        rows.retain(|row| filter.admits(StatusClass::classify(cell(row, columns.status))));
    }
    let kept = rows.len();

    let mut seen = HashSet::new();
    let identities: Vec<Identity> = rows
        .iter()
        .filter(|row| seen.insert(normalize_email(cell(row, Some(columns.email)))))
        .map(|row| to_identity(row, &columns))
        .collect();

    let stats = LoadStats {
        admitted,
        kept,
        excluded: admitted - kept,
        duplicates: kept - identities.len(),
        filtered,
        filter,
        columns: columns.names(&headers),
    };

    Ok(LoadedRoster { identities, stats })
}

fn cell(record: &StringRecord, index: Option<usize>) -> &str {
    index
        .and_then(|i| record.get(i))
        .map(str::trim)
        .unwrap_or("")
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn to_identity(record: &StringRecord, columns: &RosterColumns) -> Identity {
    Identity {
        account_id: non_empty(cell(record, columns.account_id)),
        display_name: non_empty(cell(record, columns.display_name)),
        status: StatusClass::classify(cell(record, columns.status)).account_status(),
        ..Identity::new(cell(record, Some(columns.email)))
    }
}
