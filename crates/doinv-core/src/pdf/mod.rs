//! PDF content access.

mod extractor;

pub use extractor::{PdfContent, PdfExtractor};

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF content sources.
///
/// The PDF library is a black box behind this seam: it produces raw page
/// text and, where the backend supports it, table cell grids.
pub trait PdfSource {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract the document content.
    fn extract_content(&self) -> Result<PdfContent>;
}
