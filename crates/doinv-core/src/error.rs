//! Error types for the doinv-core library.

use thiserror::Error;

/// Main error type for the doinv library.
#[derive(Error, Debug)]
pub enum DoinvError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Invoice extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Job register error.
    #[error("job register error: {0}")]
    Register(#[from] RegisterError),

    /// Output generation error.
    #[error("output error: {0}")]
    Output(#[from] OutputError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors related to invoice field extraction.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The text blob was empty, nothing to extract from.
    #[error("no text to extract from")]
    EmptyText,
}

/// Errors related to the job register.
#[derive(Error, Debug)]
pub enum RegisterError {
    /// Failed to open or read the register file.
    #[error("failed to read register: {0}")]
    Read(String),

    /// The register file format is not supported.
    #[error("unsupported register format: {0}")]
    UnsupportedFormat(String),

    /// The register is missing a required column.
    #[error("register is missing column: {0}")]
    MissingColumn(String),
}

/// Errors related to CSV output.
#[derive(Error, Debug)]
pub enum OutputError {
    /// No records were available to write.
    #[error("no records to write")]
    NoRecords,

    /// The output file could not be written.
    #[error("failed to write CSV: {0}")]
    Write(String),

    /// The output file already exists and overwrite was not confirmed.
    #[error("output file already exists: {0}")]
    AlreadyExists(String),
}

/// Result type for the doinv library.
pub type Result<T> = std::result::Result<T, DoinvError>;
