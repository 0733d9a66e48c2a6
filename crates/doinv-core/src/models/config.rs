//! Configuration structures for the conversion pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the doinv pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DoinvConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Job register configuration.
    pub register: RegisterConfig,

    /// Output CSV configuration.
    pub output: OutputConfig,
}

impl Default for DoinvConfig {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig::default(),
            register: RegisterConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Organization name stamped onto every extracted record.
    pub organization: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            organization: "HASTI PETRO CHEMICAL & SHIPPING LTD.".to_string(),
        }
    }
}

/// Job register configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterConfig {
    /// Header name of the BOE number column, compared case-insensitively.
    pub boe_column: String,

    /// Header name of the job number column, compared case-insensitively.
    pub job_column: String,
}

impl Default for RegisterConfig {
    fn default() -> Self {
        Self {
            boe_column: "be no".to_string(),
            job_column: "job no".to_string(),
        }
    }
}

/// Output CSV configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Subdirectory the CSV is written under, relative to the executable
    /// unless overridden on the command line.
    pub output_dir: String,

    /// File name prefix for the timestamped CSV.
    pub file_prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: "HASTI_Output".to_string(),
            file_prefix: "Hasti".to_string(),
        }
    }
}

impl DoinvConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}
