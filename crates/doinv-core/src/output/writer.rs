//! Fixed-schema CSV serialization.

use std::io::Write;
use std::path::Path;

use chrono::NaiveDateTime;
use tracing::info;

use super::row::OutputRow;
use crate::error::OutputError;

/// Number of columns in the upload schema.
pub const COLUMN_COUNT: usize = 41;

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;

/// Serialize rows to `writer`, header row first.
///
/// An empty record list is a failure, not an empty file.
pub fn write_rows<W: Write>(writer: W, rows: &[OutputRow]) -> Result<()> {
    if rows.is_empty() {
        return Err(OutputError::NoRecords);
    }

    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)
            .map_err(|e| OutputError::Write(e.to_string()))?;
    }
    wtr.flush().map_err(|e| OutputError::Write(e.to_string()))?;
    Ok(())
}

/// Write rows to a file at `path`.
///
/// Refuses to replace an existing file unless `overwrite` is set; the
/// caller supplies that decision.
pub fn write_csv(path: &Path, rows: &[OutputRow], overwrite: bool) -> Result<()> {
    if rows.is_empty() {
        return Err(OutputError::NoRecords);
    }
    if path.exists() && !overwrite {
        return Err(OutputError::AlreadyExists(path.display().to_string()));
    }

    let file = std::fs::File::create(path).map_err(|e| OutputError::Write(e.to_string()))?;
    write_rows(file, rows)?;
    info!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

/// Timestamped file name for one run, e.g. `Hasti_2025-06-13_14-05.csv`.
pub fn timestamped_filename(prefix: &str, now: NaiveDateTime) -> String {
    format!("{}_{}.csv", prefix, now.format("%Y-%m-%d_%H-%M"))
}
