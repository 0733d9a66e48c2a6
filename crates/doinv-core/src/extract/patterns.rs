//! Regex patterns for the vendor's invoice layout.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Labeled header fields
    pub static ref INVOICE_NO: Regex = Regex::new(
        r"Invoice No\.?\s*([A-Z0-9/-]+)"
    ).unwrap();

    pub static ref INVOICE_DATE: Regex = Regex::new(
        r"Invoice Date\s*([0-9-]+)"
    ).unwrap();

    // BOE number and date arrive as one dash-joined token; both captures
    // come from the same match.
    pub static ref BOE_NO_DATE: Regex = Regex::new(
        r"BOE No\.?\s*([0-9]+)-([0-9-]+)"
    ).unwrap();

    pub static ref BL_NO: Regex = Regex::new(
        r"BL No\.?\s*([A-Z0-9]+)"
    ).unwrap();

    // Amount fields
    pub static ref TOTAL_AMOUNT: Regex = Regex::new(
        r"Total Amount\s*([0-9,.]+)"
    ).unwrap();

    pub static ref TOTAL_INVOICE_AMOUNT: Regex = Regex::new(
        r"Total Invoice Amount\s*([0-9,.]+)"
    ).unwrap();

    // GST components, optionally preceded by a percentage token
    pub static ref CGST: Regex = Regex::new(
        r"CGST\s*[0-9%]*\s*([0-9,.]+)"
    ).unwrap();

    pub static ref SGST: Regex = Regex::new(
        r"SGST\s*[0-9%]*\s*([0-9,.]+)"
    ).unwrap();

    // Transport charge marker. Page-table flattening can interleave other
    // tokens between the two phrases, so allow up to 100 characters of gap
    // across line breaks.
    pub static ref TRANSPORT_ROAD: Regex = Regex::new(
        r"(?is)TRANSPORTATION\s*OF.{0,100}?GOODS\s*-\s*ROAD"
    ).unwrap();

    pub static ref TRANSPORT_WORD: Regex = Regex::new(
        r"(?i)TRANSPORTATION"
    ).unwrap();
}
