//! Extracted invoice record for a single vendor PDF.

use serde::{Deserialize, Serialize};

/// Sentinel for a text field whose pattern did not match.
pub const NOT_FOUND: &str = "Not Found";

/// Sentinel for an amount field whose pattern did not match.
///
/// Distinct from [`NOT_FOUND`] so downstream arithmetic stays safe.
pub const ZERO_AMOUNT: &str = "0";

/// One record per processed PDF.
///
/// Created by the field extractor, enriched once by the job register
/// matcher (reference number only), consumed once by the row synthesizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedInvoice {
    /// Organization name stamped onto every record.
    pub organization: String,

    /// Vendor invoice number.
    pub vendor_inv_no: String,

    /// Vendor invoice date, raw as captured.
    pub vendor_inv_date: String,

    /// Bill of entry number.
    pub boe_no: String,

    /// Bill of entry date.
    pub boe_date: String,

    /// Bill of lading number.
    pub bl_no: String,

    /// Total amount, comma-stripped and numerically cleaned.
    pub total_amount: String,

    /// Total invoice amount, comma-stripped.
    pub total_invoice_amount: String,

    /// CGST amount, comma-stripped.
    pub cgst: String,

    /// SGST amount, comma-stripped.
    pub sgst: String,

    /// Reference number: seeded from the BOE number, overwritten with the
    /// matched job number.
    pub ref_no: String,

    /// Whether the invoice is a transport charge.
    pub is_transport: bool,
}

impl ExtractedInvoice {
    /// A record with every field at its sentinel, for the given organization.
    pub fn empty(organization: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
            vendor_inv_no: NOT_FOUND.to_string(),
            vendor_inv_date: NOT_FOUND.to_string(),
            boe_no: NOT_FOUND.to_string(),
            boe_date: NOT_FOUND.to_string(),
            bl_no: NOT_FOUND.to_string(),
            total_amount: ZERO_AMOUNT.to_string(),
            total_invoice_amount: ZERO_AMOUNT.to_string(),
            cgst: ZERO_AMOUNT.to_string(),
            sgst: ZERO_AMOUNT.to_string(),
            ref_no: NOT_FOUND.to_string(),
            is_transport: false,
        }
    }

    /// Overwrite the reference number with a resolved job number.
    pub fn assign_job_no(&mut self, job_no: impl Into<String>) {
        self.ref_no = job_no.into();
    }
}
