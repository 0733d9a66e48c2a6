//! One processing session: parser configuration, loaded register and run
//! date as explicit values rather than ambient state.

use chrono::NaiveDate;

use crate::error::{ExtractionError, Result};
use crate::extract::InvoiceParser;
use crate::models::config::DoinvConfig;
use crate::models::invoice::ExtractedInvoice;
use crate::output::row::{OutputRow, synthesize_row};
use crate::pdf::{PdfExtractor, PdfSource};
use crate::register::JobRegister;

/// Context for a batch run.
pub struct Session {
    parser: InvoiceParser,
    register: JobRegister,
    run_date: NaiveDate,
}

impl Session {
    /// Build a session from configuration, a loaded register and the
    /// processing date.
    pub fn new(config: &DoinvConfig, register: JobRegister, run_date: NaiveDate) -> Self {
        Self {
            parser: InvoiceParser::new().with_organization(&config.extraction.organization),
            register,
            run_date,
        }
    }

    /// Extract one record from PDF bytes and resolve its job number.
    pub fn process_pdf(&self, data: &[u8]) -> Result<ExtractedInvoice> {
        let mut extractor = PdfExtractor::new();
        extractor.load(data)?;
        let content = extractor.extract_content()?;

        let text = content.combined_text();
        if text.trim().is_empty() {
            return Err(ExtractionError::EmptyText.into());
        }

        let mut invoice = self.parser.parse(&text);
        let job_no = self.register.match_job(&invoice.boe_no);
        invoice.assign_job_no(job_no);
        Ok(invoice)
    }

    /// Extract one record from an already-assembled text blob.
    pub fn process_text(&self, text: &str) -> Result<ExtractedInvoice> {
        if text.trim().is_empty() {
            return Err(ExtractionError::EmptyText.into());
        }

        let mut invoice = self.parser.parse(text);
        let job_no = self.register.match_job(&invoice.boe_no);
        invoice.assign_job_no(job_no);
        Ok(invoice)
    }

    /// Synthesize upload rows for every extracted record.
    pub fn synthesize(&self, invoices: &[ExtractedInvoice]) -> Vec<OutputRow> {
        invoices
            .iter()
            .map(|invoice| synthesize_row(invoice, self.run_date))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::RegisterConfig;
    use pretty_assertions::assert_eq;

    fn session() -> Session {
        let register = JobRegister::from_csv_reader(
            "be no,job no\n123456,IMP/0042\n".as_bytes(),
            &RegisterConfig::default(),
        )
        .unwrap();
        let run_date = NaiveDate::from_ymd_opt(2025, 6, 20).unwrap();
        Session::new(&DoinvConfig::default(), register, run_date)
    }

    #[test]
    fn test_process_text_resolves_job_number() {
        let invoice = session()
            .process_text("Invoice No A/1 BOE No 123456-15-06-2025")
            .unwrap();
        assert_eq!(invoice.ref_no, "IMP/0042");
        assert_eq!(invoice.boe_no, "123456");
    }

    #[test]
    fn test_process_text_without_register_match() {
        let invoice = session().process_text("BOE No 999999-01-01-2025").unwrap();
        assert_eq!(invoice.ref_no, "No match found");
    }

    #[test]
    fn test_empty_text_is_an_error() {
        assert!(session().process_text("   ").is_err());
    }

    #[test]
    fn test_synthesize_stamps_run_date() {
        let session = session();
        let invoice = session.process_text("BOE No 123456-15-06-2025").unwrap();
        let rows = session.synthesize(&[invoice]);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].entry_date, "20-Jun-2025");
        assert_eq!(rows[0].ref_no, "IMP/0042");
    }
}
