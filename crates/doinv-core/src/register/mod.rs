//! Job register loading and BOE-to-job matching.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use calamine::{Reader, open_workbook_auto};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::RegisterError;
use crate::models::config::RegisterConfig;

/// Sentinel returned when no register entry matches a BOE number.
pub const NO_MATCH: &str = "No match found";

/// Result type for register operations.
pub type Result<T> = std::result::Result<T, RegisterError>;

/// One register row: BOE number to job number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRegisterEntry {
    /// Bill of entry number, trimmed.
    pub boe_no: String,
    /// Internal job number, trimmed.
    pub job_no: String,
}

/// The session's lookup table, loaded once and immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct JobRegister {
    entries: Vec<JobRegisterEntry>,
}

impl JobRegister {
    /// Build a register from already-loaded entries.
    pub fn new(entries: Vec<JobRegisterEntry>) -> Self {
        Self { entries }
    }

    /// Number of loaded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the register has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load a register from a CSV or spreadsheet file, chosen by
    /// extension.
    pub fn load(path: &Path, config: &RegisterConfig) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        let register = match ext.as_str() {
            "csv" => {
                let file = File::open(path).map_err(|e| RegisterError::Read(e.to_string()))?;
                Self::from_csv_reader(file, config)?
            }
            "xlsx" | "xlsm" | "xlsb" | "xls" => Self::from_workbook(path, config)?,
            other => return Err(RegisterError::UnsupportedFormat(other.to_string())),
        };

        info!(
            "Loaded {} job register entries from {}",
            register.len(),
            path.display()
        );
        Ok(register)
    }

    /// Load a register from CSV data.
    ///
    /// Header names are normalized (lowercased, trimmed) before matching
    /// the configured column names.
    pub fn from_csv_reader<R: Read>(reader: R, config: &RegisterConfig) -> Result<Self> {
        let mut rdr = csv::Reader::from_reader(reader);
        let headers: Vec<String> = rdr
            .headers()
            .map_err(|e| RegisterError::Read(e.to_string()))?
            .iter()
            .map(normalize_header)
            .collect();

        let boe_idx = find_column(&headers, &config.boe_column)?;
        let job_idx = find_column(&headers, &config.job_column)?;

        let mut entries = Vec::new();
        for record in rdr.records() {
            let record = record.map_err(|e| RegisterError::Read(e.to_string()))?;
            entries.push(JobRegisterEntry {
                boe_no: record.get(boe_idx).unwrap_or("").trim().to_string(),
                job_no: record.get(job_idx).unwrap_or("").trim().to_string(),
            });
        }

        debug!("Parsed {} register rows from CSV", entries.len());
        Ok(Self { entries })
    }

    /// Load a register from the first worksheet of an Excel workbook.
    fn from_workbook(path: &Path, config: &RegisterConfig) -> Result<Self> {
        let mut workbook =
            open_workbook_auto(path).map_err(|e| RegisterError::Read(e.to_string()))?;

        let sheet_names = workbook.sheet_names().to_owned();
        let first = sheet_names
            .first()
            .ok_or_else(|| RegisterError::Read("workbook has no sheets".to_string()))?;
        let range = workbook
            .worksheet_range(first)
            .map_err(|e| RegisterError::Read(e.to_string()))?;

        let mut rows = range.rows();
        let headers: Vec<String> = rows
            .next()
            .map(|row| row.iter().map(|cell| normalize_header(&cell.to_string())).collect())
            .unwrap_or_default();

        let boe_idx = find_column(&headers, &config.boe_column)?;
        let job_idx = find_column(&headers, &config.job_column)?;

        let mut entries = Vec::new();
        for row in rows {
            let cell = |idx: usize| {
                row.get(idx)
                    .map(|c| c.to_string().trim().to_string())
                    .unwrap_or_default()
            };
            entries.push(JobRegisterEntry {
                boe_no: cell(boe_idx),
                job_no: cell(job_idx),
            });
        }

        debug!("Parsed {} register rows from workbook", entries.len());
        Ok(Self { entries })
    }

    /// Resolve a job number for a BOE number.
    ///
    /// Exact string match after trimming; linear scan, first match wins.
    /// No match or an empty table yields the sentinel.
    pub fn match_job(&self, boe_no: &str) -> String {
        let boe_no = boe_no.trim();
        for entry in &self.entries {
            if entry.boe_no == boe_no {
                return entry.job_no.clone();
            }
        }
        NO_MATCH.to_string()
    }
}

fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase()
}

fn find_column(headers: &[String], name: &str) -> Result<usize> {
    let wanted = normalize_header(name);
    headers
        .iter()
        .position(|h| *h == wanted)
        .ok_or_else(|| RegisterError::MissingColumn(name.to_string()))
}
