//! Core library for DO invoice conversion.
//!
//! This crate provides:
//! - PDF content access (text stream plus table grid contract)
//! - Regex field extraction for the vendor's fixed invoice layout
//! - Job register loading and BOE-to-job matching
//! - Upload row synthesis and fixed-schema CSV output

pub mod error;
pub mod extract;
pub mod models;
pub mod output;
pub mod pdf;
pub mod register;
pub mod session;

pub use error::{DoinvError, Result};
pub use extract::{InvoiceParser, clean_numeric, normalize_date};
pub use models::config::DoinvConfig;
pub use models::invoice::{ExtractedInvoice, NOT_FOUND, ZERO_AMOUNT};
pub use output::row::{ChargeProfile, OutputRow, synthesize_row};
pub use output::writer::{timestamped_filename, write_csv};
pub use pdf::{PdfContent, PdfExtractor, PdfSource};
pub use register::{JobRegister, JobRegisterEntry, NO_MATCH};
pub use session::Session;
