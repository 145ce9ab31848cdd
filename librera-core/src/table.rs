//! Whole-file delimited-table reading and writing
//!
//! The persisted files are plain comma-delimited text: one header row
//! followed by data rows, no quoting, so field values cannot contain commas.
//! Reads slurp the entire file; rewrites go through a temp file in the same
//! directory followed by a rename so a reader never observes a partial file.

use crate::error::{CatalogError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// A data row with its 1-based line number in the source file.
#[derive(Debug, Clone)]
pub struct Row {
    pub line: usize,
    pub fields: Vec<String>,
}

impl Row {
    /// Field at `index`, or a malformed-source error naming the short row.
    pub fn field(&self, index: usize, file: &Path) -> Result<&str> {
        self.fields
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| CatalogError::MalformedSource {
                file: file.display().to_string(),
                line: self.line,
                message: format!(
                    "expected at least {} fields, found {}",
                    index + 1,
                    self.fields.len()
                ),
            })
    }

    /// Field at `index` parsed as a real number.
    pub fn parse_f64(&self, index: usize, file: &Path) -> Result<f64> {
        let raw = self.field(index, file)?;
        raw.parse().map_err(|_| CatalogError::MalformedSource {
            file: file.display().to_string(),
            line: self.line,
            message: format!("\"{raw}\" is not a number"),
        })
    }

    /// Field at `index` parsed as a non-negative integer.
    pub fn parse_u32(&self, index: usize, file: &Path) -> Result<u32> {
        let raw = self.field(index, file)?;
        raw.parse().map_err(|_| CatalogError::MalformedSource {
            file: file.display().to_string(),
            line: self.line,
            message: format!("\"{raw}\" is not an integer"),
        })
    }
}

/// Read every data row of a delimited file, skipping the header row and any
/// blank lines. Lines are trimmed before splitting, matching the persisted
/// format.
pub fn read_rows(path: &Path) -> Result<Vec<Row>> {
    let text = fs::read_to_string(path)?;
    let mut rows = Vec::new();
    for (index, line) in text.lines().enumerate().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        rows.push(Row {
            line: index + 1,
            fields: line.split(',').map(str::to_owned).collect(),
        });
    }
    debug!(path = %path.display(), rows = rows.len(), "table read");
    Ok(rows)
}

/// Rewrite a table wholesale: header plus one line per row, written to a temp
/// file beside the target and renamed into place.
pub fn write_rows<I>(path: &Path, header: &str, rows: I) -> Result<()>
where
    I: IntoIterator<Item = String>,
{
    let mut data = String::with_capacity(header.len() + 1);
    data.push_str(header);
    data.push('\n');
    let mut count = 0;
    for row in rows {
        data.push_str(&row);
        data.push('\n');
        count += 1;
    }

    let temp = path.with_extension("csv.tmp");
    fs::write(&temp, &data)?;
    fs::rename(&temp, path)?;
    debug!(path = %path.display(), rows = count, "table rewritten");
    Ok(())
}
