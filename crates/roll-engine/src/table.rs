//! Price-table loading.
//!
//! Reads a record file whose format is inferred from the file extension,
//! applies a caller-supplied column rename, and parses the `Date` column
//! into calendar dates with every other column as numeric. Loading is
//! strict: a missing `Date` column or an unparseable cell is an error that
//! names the spot, not a silently dropped row.

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;
use serde_json::Value;

use crate::error::{Result, RollError};

/// Column name every table must carry after renaming.
pub const DATE_COLUMN: &str = "Date";

/// A loaded record set: one parsed date per row plus named numeric columns.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceTable {
    dates: Vec<NaiveDate>,
    columns: Vec<(String, Vec<f64>)>,
}

impl PriceTable {
    /// Load a table from `path`, renaming columns before the `Date`
    /// requirement is enforced.
    ///
    /// The reader is chosen by extension: `csv` for delimited text, `json`
    /// for an array of flat record objects. Anything else is
    /// [`RollError::UnsupportedFormat`].
    ///
    /// # Errors
    ///
    /// I/O and reader failures propagate; a table without a `Date` column
    /// (after renames) is [`RollError::MissingColumn`]; a date or numeric
    /// cell that does not parse is [`RollError::InvalidCell`] with its row
    /// and column.
    pub fn load(path: impl AsRef<Path>, renames: &HashMap<String, String>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let (headers, rows) = match ext.as_str() {
            "csv" => read_csv(path)?,
            "json" => read_json(path)?,
            other => return Err(RollError::UnsupportedFormat(other.to_string())),
        };
        Self::from_rows(headers, rows, renames)
    }

    fn from_rows(
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
        renames: &HashMap<String, String>,
    ) -> Result<Self> {
        let headers: Vec<String> = headers
            .into_iter()
            .map(|h| renames.get(&h).cloned().unwrap_or(h))
            .collect();
        let date_idx = headers
            .iter()
            .position(|h| h == DATE_COLUMN)
            .ok_or_else(|| RollError::MissingColumn(DATE_COLUMN.to_string()))?;

        let mut dates = Vec::with_capacity(rows.len());
        let mut columns: Vec<(String, Vec<f64>)> = headers
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != date_idx)
            .map(|(_, h)| (h.clone(), Vec::with_capacity(rows.len())))
            .collect();

        for (row_no, row) in rows.into_iter().enumerate() {
            let mut slot = 0;
            for (i, cell) in row.into_iter().enumerate() {
                if i == date_idx {
                    dates.push(parse_date_cell(&cell, row_no)?);
                } else {
                    match cell.trim().parse::<f64>() {
                        Ok(v) => columns[slot].1.push(v),
                        Err(_) => {
                            return Err(RollError::InvalidCell {
                                column: columns[slot].0.clone(),
                                row: row_no,
                                value: cell,
                            });
                        }
                    }
                    slot += 1;
                }
            }
        }

        Ok(PriceTable { dates, columns })
    }

    /// Parsed `Date` column, in file order.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// A numeric column by name, if present.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_slice())
    }

    /// Numeric column names, in file order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

fn read_csv(path: &Path) -> Result<(Vec<String>, Vec<Vec<String>>)> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok((headers, rows))
}

/// Read an array of flat JSON objects; headers come from the first record.
fn read_json(path: &Path) -> Result<(Vec<String>, Vec<Vec<String>>)> {
    let file = File::open(path)?;
    let records: Vec<serde_json::Map<String, Value>> = serde_json::from_reader(file)?;
    let headers: Vec<String> = records
        .first()
        .map(|r| r.keys().cloned().collect())
        .unwrap_or_default();
    let rows = records
        .iter()
        .map(|r| headers.iter().map(|h| cell_to_string(r.get(h))).collect())
        .collect();
    Ok((headers, rows))
}

fn cell_to_string(v: Option<&Value>) -> String {
    match v {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

fn parse_date_cell(cell: &str, row: usize) -> Result<NaiveDate> {
    let trimmed = cell.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%m/%d/%Y"))
        .map_err(|_| RollError::InvalidCell {
            column: DATE_COLUMN.to_string(),
            row,
            value: cell.to_string(),
        })
}

// ── Tests ───────────────────────────────────────────────────────────────────
