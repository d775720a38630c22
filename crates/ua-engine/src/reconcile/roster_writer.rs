//! Writes what a run learned back into the roster.
//!
//! Only rows of successful results are touched: the status cell gets the
//! operation's target status, and the id and name cells are filled when
//! empty. Every other cell is written back as it was read.

use crate::roster::columns::{
    ACCOUNT_ID_ALIASES, DEFAULT_ACCOUNT_ID_COLUMN, DEFAULT_NAME_COLUMN, DEFAULT_STATUS_COLUMN,
    EMAIL_ALIASES, NAME_ALIASES, STATUS_ALIASES, find_column,
};
use crate::roster::loader::{UTF8_BOM, strip_bom};
use crate::{EngineError, EngineResult};

use ua_core::{Operation, OperationResult, normalize_email};

use std::io::Write;
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use log::{debug, info};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterUpdate {
    /// Rows updated from a successful result
    pub matched: usize,
    /// Columns added to the header
    pub appended_columns: Vec<String>,
    /// False when nothing matched and the file was left untouched
    pub written: bool,
}

pub fn rewrite_roster(
    path: &Path,
    operation: Operation,
    results: &[OperationResult],
) -> EngineResult<RosterUpdate> {
    let data = std::fs::read(path).map_err(|e| EngineError::io(path, e))?;
    let had_bom = data.starts_with(UTF8_BOM);

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(strip_bom(&data));

    let mut table: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| EngineError::csv(path, e))?;
        table.push(record.iter().map(str::to_string).collect());
    }

    if table.is_empty() {
        return Err(EngineError::configuration(format!(
            "Cannot update {}: file has no header row",
            path.display()
        )));
    }
    let mut rows = table.split_off(1);
    let mut headers = table.remove(0);

    let email_col = find_column(&headers, EMAIL_ALIASES).ok_or_else(|| {
        EngineError::configuration(format!(
            "Cannot update {}: email column not found",
            path.display()
        ))
    })?;

    // Cells past the header have no column name; appending columns would
    // overwrite them.
    if let Some(index) = rows.iter().position(|row| row.len() > headers.len()) {
        return Err(EngineError::configuration(format!(
            "Cannot update {}: line {} has {} cells but the header has {}",
            path.display(),
            index + 2,
            rows[index].len(),
            headers.len()
        )));
    }

    let mut update = RosterUpdate::default();
    let status_col = ensure_column(&mut headers, STATUS_ALIASES, DEFAULT_STATUS_COLUMN, &mut update);
    let id_col = ensure_column(&mut headers, ACCOUNT_ID_ALIASES, DEFAULT_ACCOUNT_ID_COLUMN, &mut update);
    let name_col = ensure_column(&mut headers, NAME_ALIASES, DEFAULT_NAME_COLUMN, &mut update);

    for row in rows.iter_mut() {
        if row.len() < headers.len() {
            row.resize(headers.len(), String::new());
        }
    }

    for result in results.iter().filter(|r| r.success) {
        let wanted = normalize_email(&result.email);
        let Some(row) = rows
            .iter_mut()
            .find(|row| normalize_email(&row[email_col]) == wanted)
        else {
            debug!("{} not present in roster, skipping", result.email);
            continue;
        };

        row[status_col] = operation.roster_status().to_string();

        let account_id = result
            .identity
            .account_id
            .as_deref()
            .or(result.account_id.as_deref());
        fill_cell(&mut row[id_col], account_id);
        fill_cell(&mut row[name_col], result.identity.display_name.as_deref());

        update.matched += 1;
    }

    if update.matched == 0 {
        return Ok(update);
    }

    write_atomically(path, had_bom, &headers, &rows)?;
    update.written = true;

    info!("Updated data for {} users in {}", update.matched, path.display());
    Ok(update)
}

fn ensure_column(
    headers: &mut Vec<String>,
    aliases: &[&str],
    default: &str,
    update: &mut RosterUpdate,
) -> usize {
    find_column(headers, aliases).unwrap_or_else(|| {
        headers.push(default.to_string());
        update.appended_columns.push(default.to_string());
        headers.len() - 1
    })
}

fn fill_cell(cell: &mut String, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty())
        && cell.trim().is_empty()
    {
        *cell = value.to_string();
    }
}

fn write_atomically(
    path: &Path,
    bom: bool,
    headers: &[String],
    rows: &[Vec<String>],
) -> EngineResult<()> {
    let mut buffer = Vec::new();
    if bom {
        buffer.extend_from_slice(UTF8_BOM);
    }

    {
        let mut writer = WriterBuilder::new().flexible(true).from_writer(&mut buffer);
        writer
            .write_record(headers)
            .map_err(|e| EngineError::csv(path, e))?;
        for row in rows {
            writer.write_record(row).map_err(|e| EngineError::csv(path, e))?;
        }
        writer.flush().map_err(|e| EngineError::io(path, e))?;
    }

    let tmp = path.with_extension("csv.tmp");
    let mut file = std::fs::File::create(&tmp).map_err(|e| EngineError::io(&tmp, e))?;
    file.write_all(&buffer)
        .and_then(|_| file.sync_all())
        .map_err(|e| EngineError::io(&tmp, e))?;
    drop(file);

    std::fs::rename(&tmp, path).map_err(|e| EngineError::io(path, e))
}
