//! Data models for extraction and configuration.

pub mod config;
pub mod invoice;

pub use config::DoinvConfig;
pub use invoice::{ExtractedInvoice, NOT_FOUND, ZERO_AMOUNT};
