//! Field extraction orchestrator.

use tracing::debug;

use crate::models::config::ExtractionConfig;
use crate::models::invoice::ExtractedInvoice;

use super::fields;
use super::numeric::clean_numeric;
use super::patterns::TRANSPORT_WORD;

/// Applies every field rule to a text blob and assembles the record.
pub struct InvoiceParser {
    organization: String,
}

impl InvoiceParser {
    /// Create a parser with the default organization name.
    pub fn new() -> Self {
        Self {
            organization: ExtractionConfig::default().organization,
        }
    }

    /// Set the organization name stamped onto extracted records.
    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = organization.into();
        self
    }

    /// Extract one record from the combined text blob.
    ///
    /// Individual pattern misses become sentinels; a malformed field never
    /// fails the record.
    pub fn parse(&self, text: &str) -> ExtractedInvoice {
        let mut invoice = ExtractedInvoice::empty(&self.organization);

        if let Some(no) = fields::invoice_number(text) {
            invoice.vendor_inv_no = no;
        }
        if let Some(date) = fields::invoice_date(text) {
            invoice.vendor_inv_date = date;
        }
        if let Some((no, date)) = fields::boe(text) {
            invoice.boe_no = no;
            invoice.boe_date = date;
        }
        if let Some(no) = fields::bl_number(text) {
            invoice.bl_no = no;
        }
        // The total amount feeds downstream arithmetic, so it gets the
        // full numeric cleanup rather than comma-stripping alone.
        if let Some(amount) = fields::total_amount(text) {
            invoice.total_amount = clean_numeric(&amount);
        }
        if let Some(amount) = fields::total_invoice_amount(text) {
            invoice.total_invoice_amount = amount;
        }
        if let Some(amount) = fields::cgst(text) {
            invoice.cgst = amount;
        }
        if let Some(amount) = fields::sgst(text) {
            invoice.sgst = amount;
        }

        invoice.is_transport = fields::is_transport(text);
        debug!("is_transport={}", invoice.is_transport);
        if !invoice.is_transport {
            log_transport_miss(text);
        }

        // Seed the reference from the BOE number; the register matcher
        // overwrites it later.
        invoice.ref_no = invoice.boe_no.clone();

        debug!("Extracted record: {:?}", invoice);
        invoice
    }
}

impl Default for InvoiceParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Log context around a near-miss of the transport marker, for diagnosing
/// layout changes.
fn log_transport_miss(text: &str) {
    if let Some(m) = TRANSPORT_WORD.find(text) {
        let before: String = text[..m.start()]
            .chars()
            .rev()
            .take(200)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        let after: String = text[m.start()..].chars().take(200).collect();
        debug!("transport marker incomplete near: {}{}", before, after);
    } else {
        let head: String = text.chars().take(400).collect();
        debug!("no transport marker; text head: {}", head);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::invoice::{NOT_FOUND, ZERO_AMOUNT};
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "Invoice No ABC/123 Invoice Date 13-06-2025 \
        BOE No 123456-15-06-2025 BL No XYZ789 Total Amount 1,000.00 \
        Total Invoice Amount 1,200.00 CGST 2% 30.00 SGST 2% 30.00 \
        TRANSPORTATION OF LPG GOODS - ROAD";

    #[test]
    fn test_parses_the_reference_layout() {
        let invoice = InvoiceParser::new().parse(SAMPLE);

        assert_eq!(invoice.vendor_inv_no, "ABC/123");
        assert_eq!(invoice.vendor_inv_date, "13-06-2025");
        assert_eq!(invoice.boe_no, "123456");
        assert_eq!(invoice.boe_date, "15-06-2025");
        assert_eq!(invoice.bl_no, "XYZ789");
        assert_eq!(invoice.total_amount, "1000");
        assert_eq!(invoice.total_invoice_amount, "1200.00");
        assert_eq!(invoice.cgst, "30.00");
        assert_eq!(invoice.sgst, "30.00");
        assert!(invoice.is_transport);
    }

    #[test]
    fn test_reference_seeds_from_boe_number() {
        let invoice = InvoiceParser::new().parse(SAMPLE);
        assert_eq!(invoice.ref_no, "123456");
    }

    #[test]
    fn test_missing_fields_become_sentinels() {
        let invoice = InvoiceParser::new().parse("nothing relevant here");

        assert_eq!(invoice.vendor_inv_no, NOT_FOUND);
        assert_eq!(invoice.vendor_inv_date, NOT_FOUND);
        assert_eq!(invoice.boe_no, NOT_FOUND);
        assert_eq!(invoice.bl_no, NOT_FOUND);
        assert_eq!(invoice.total_amount, ZERO_AMOUNT);
        assert_eq!(invoice.total_invoice_amount, ZERO_AMOUNT);
        assert_eq!(invoice.cgst, ZERO_AMOUNT);
        assert_eq!(invoice.sgst, ZERO_AMOUNT);
        assert!(!invoice.is_transport);
    }

    #[test]
    fn test_boe_number_and_date_fall_back_together() {
        let invoice = InvoiceParser::new().parse("BOE No 123456 BL No AB1");

        assert_eq!(invoice.boe_no, NOT_FOUND);
        assert_eq!(invoice.boe_date, NOT_FOUND);
        assert_eq!(invoice.bl_no, "AB1");
    }

    #[test]
    fn test_organization_is_stamped() {
        let invoice = InvoiceParser::new()
            .with_organization("ACME LOGISTICS")
            .parse(SAMPLE);
        assert_eq!(invoice.organization, "ACME LOGISTICS");
    }
}
