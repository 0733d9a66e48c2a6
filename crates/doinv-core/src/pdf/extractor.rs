//! PDF text extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::debug;

use super::{PdfSource, Result};
use crate::error::PdfError;

/// PDF content extractor using lopdf for structure and pdf-extract for the
/// text stream.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

/// Extracted content from a PDF.
#[derive(Debug, Clone, Default)]
pub struct PdfContent {
    /// Concatenated page text.
    pub text: String,
    /// Table cell grids, one row per inner vector.
    ///
    /// The pdf-extract backend folds table cells into the text stream, so
    /// this stays empty for it; sources that separate tables populate it.
    pub tables: Vec<Vec<String>>,
}

impl PdfContent {
    /// The blob the field extractor runs over: page text followed by every
    /// table row flattened cell-by-cell, space-joined.
    pub fn combined_text(&self) -> String {
        if self.tables.is_empty() {
            return self.text.clone();
        }

        let flattened: Vec<String> = self.tables.iter().map(|row| row.join(" ")).collect();
        format!("{}\n{}", self.text, flattened.join("\n"))
    }
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }

    fn extract_text(&self) -> Result<String> {
        let text = pdf_extract::extract_text_from_mem(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))?;
        Ok(text)
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfSource for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // Save decrypted document to raw_data for pdf_extract
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn extract_content(&self) -> Result<PdfContent> {
        if self.document.is_none() {
            return Err(PdfError::Parse("No document loaded".to_string()));
        }

        let text = self.extract_text()?;
        debug!("Extracted {} chars of text", text.len());

        Ok(PdfContent {
            text,
            tables: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pdf_extractor_new() {
        let extractor = PdfExtractor::new();
        assert!(extractor.document.is_none());
        assert_eq!(extractor.page_count(), 0);
    }

    #[test]
    fn test_combined_text_without_tables() {
        let content = PdfContent {
            text: "Invoice No ABC/1".to_string(),
            tables: Vec::new(),
        };
        assert_eq!(content.combined_text(), "Invoice No ABC/1");
    }

    #[test]
    fn test_combined_text_flattens_table_rows() {
        let content = PdfContent {
            text: "page text".to_string(),
            tables: vec![
                vec!["Total Amount".to_string(), "1,000.00".to_string()],
                vec!["CGST".to_string(), "2%".to_string(), "30.00".to_string()],
            ],
        };
        assert_eq!(
            content.combined_text(),
            "page text\nTotal Amount 1,000.00\nCGST 2% 30.00"
        );
    }
}
