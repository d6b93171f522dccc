//! Game catalog backed by a spreadsheet.
//!
//! The first worksheet's first row names the columns; every following
//! non-empty row becomes one ordered JSON object. The workbook is re-read
//! on every call.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, DataType, Range, Reader};
use chrono::NaiveDateTime;
use serde_json::{Map, Number, Value};
use tracing::debug;

use crate::error::{HsError, Result};

/// Date cells are sent as ISO 8601 local timestamps
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// One catalog entry: column name -> scalar value, in column order
pub type CatalogRow = Map<String, Value>;

/// Anything that can list the games on offer
pub trait CatalogSource: Send + Sync {
    fn list_games(&self) -> Result<Vec<CatalogRow>>;
}

/// Reads the catalog from an xlsx/xls/ods workbook on disk
#[derive(Debug, Clone)]
pub struct SpreadsheetCatalog {
    path: PathBuf,
}

impl SpreadsheetCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for SpreadsheetCatalog {
    fn list_games(&self) -> Result<Vec<CatalogRow>> {
        let mut workbook = open_workbook_auto(&self.path)
            .map_err(|e| HsError::catalog(&self.path, e.to_string()))?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| HsError::catalog(&self.path, "workbook has no worksheets"))?
            .map_err(|e| HsError::catalog(&self.path, e.to_string()))?;

        let rows = rows_from_range(&range);
        debug!(path = %self.path.display(), rows = rows.len(), "read catalog");
        Ok(rows)
    }
}

/// Fixed in-memory catalog
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    rows: Vec<CatalogRow>,
}

impl StaticCatalog {
    pub fn new(rows: Vec<CatalogRow>) -> Self {
        Self { rows }
    }
}

impl CatalogSource for StaticCatalog {
    fn list_games(&self) -> Result<Vec<CatalogRow>> {
        Ok(self.rows.clone())
    }
}

/// Convert a worksheet range (header row first) into catalog rows.
pub fn rows_from_range(range: &Range<Data>) -> Vec<CatalogRow> {
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Vec::new();
    };
    let columns = column_names(header);

    rows.filter(|cells| cells.iter().any(|c| !matches!(c, Data::Empty)))
        .map(|cells| {
            columns
                .iter()
                .enumerate()
                .map(|(idx, name)| {
                    let value = cells.get(idx).map(cell_value).unwrap_or(Value::Null);
                    (name.clone(), value)
                })
                .collect()
        })
        .collect()
}

/// Header names with blanks filled in and duplicates suffixed `.1`, `.2`, ...
fn column_names(header: &[Data]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    header
        .iter()
        .enumerate()
        .map(|(idx, cell)| {
            let base = match cell {
                Data::Empty => format!("Unnamed: {idx}"),
                Data::String(s) if s.trim().is_empty() => format!("Unnamed: {idx}"),
                other => other.to_string(),
            };
            let count = seen.entry(base.clone()).or_insert(0);
            let name = if *count == 0 {
                base
            } else {
                format!("{base}.{count}")
            };
            *count += 1;
            name
        })
        .collect()
}

fn cell_value(cell: &Data) -> Value {
    match cell {
        Data::Empty => Value::Null,
        Data::Int(i) => Value::from(*i),
        Data::Float(f) => Number::from_f64(*f).map(Value::Number).unwrap_or(Value::Null),
        Data::Bool(b) => Value::Bool(*b),
        Data::String(s) => Value::String(s.clone()),
        Data::DateTime(dt) if dt.is_datetime() => timestamp(cell),
        Data::DateTimeIso(_) => timestamp(cell),
        other => Value::String(other.to_string()),
    }
}

/// Falls back to the cell's display string when it is not a valid date.
fn timestamp(cell: &Data) -> Value {
    let text = cell
        .as_datetime()
        .map(|dt: NaiveDateTime| dt.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_else(|| cell.to_string());
    Value::String(text)
}
