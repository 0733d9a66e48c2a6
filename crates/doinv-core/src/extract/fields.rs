//! Per-field extraction rules over the combined text blob.
//!
//! Each function is an independent pure function taking the full blob, so
//! a single missing field never disturbs the others and every rule can be
//! unit tested without a sample PDF.

use super::patterns::{
    BL_NO, BOE_NO_DATE, CGST, INVOICE_DATE, INVOICE_NO, SGST, TOTAL_AMOUNT, TOTAL_INVOICE_AMOUNT,
    TRANSPORT_ROAD,
};

/// First `Invoice No` token.
pub fn invoice_number(text: &str) -> Option<String> {
    INVOICE_NO.captures(text).map(|caps| caps[1].to_string())
}

/// First `Invoice Date` token, raw.
pub fn invoice_date(text: &str) -> Option<String> {
    INVOICE_DATE.captures(text).map(|caps| caps[1].to_string())
}

/// Combined BOE number/date pair.
///
/// Both values come from one pattern; when it misses, both are absent.
pub fn boe(text: &str) -> Option<(String, String)> {
    BOE_NO_DATE
        .captures(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
}

/// First `BL No` token.
pub fn bl_number(text: &str) -> Option<String> {
    BL_NO.captures(text).map(|caps| caps[1].to_string())
}

/// `Total Amount` capture, commas stripped.
pub fn total_amount(text: &str) -> Option<String> {
    TOTAL_AMOUNT.captures(text).map(|caps| caps[1].replace(',', ""))
}

/// `Total Invoice Amount` capture, commas stripped. Kept separately from
/// the total amount.
pub fn total_invoice_amount(text: &str) -> Option<String> {
    TOTAL_INVOICE_AMOUNT
        .captures(text)
        .map(|caps| caps[1].replace(',', ""))
}

/// CGST amount, commas stripped.
pub fn cgst(text: &str) -> Option<String> {
    CGST.captures(text).map(|caps| caps[1].replace(',', ""))
}

/// SGST amount, commas stripped.
pub fn sgst(text: &str) -> Option<String> {
    SGST.captures(text).map(|caps| caps[1].replace(',', ""))
}

/// Whether the document carries the road-transport charge marker.
pub fn is_transport(text: &str) -> bool {
    TRANSPORT_ROAD.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_invoice_number() {
        assert_eq!(
            invoice_number("Invoice No ABC/123 rest"),
            Some("ABC/123".to_string())
        );
        assert_eq!(
            invoice_number("Invoice No. HPL-22/001"),
            Some("HPL-22/001".to_string())
        );
        assert_eq!(invoice_number("no label here"), None);
    }

    #[test]
    fn test_invoice_date() {
        assert_eq!(
            invoice_date("Invoice Date 13-06-2025"),
            Some("13-06-2025".to_string())
        );
    }

    #[test]
    fn test_boe_pair_comes_from_one_match() {
        assert_eq!(
            boe("BOE No 123456-15-06-2025"),
            Some(("123456".to_string(), "15-06-2025".to_string()))
        );
        // number without the dash-joined date: the combined pattern misses
        assert_eq!(boe("BOE No 123456 BL No AB1"), None);
    }

    #[test]
    fn test_bl_number() {
        assert_eq!(bl_number("BL No XYZ789"), Some("XYZ789".to_string()));
    }

    #[test]
    fn test_amounts_strip_commas() {
        assert_eq!(
            total_amount("Total Amount 1,000.00"),
            Some("1000.00".to_string())
        );
        assert_eq!(
            total_invoice_amount("Total Invoice Amount 1,200.00"),
            Some("1200.00".to_string())
        );
    }

    #[test]
    fn test_total_amount_is_distinct_from_total_invoice_amount() {
        let text = "Total Amount 1,000.00 Total Invoice Amount 1,200.00";
        assert_eq!(total_amount(text), Some("1000.00".to_string()));
        assert_eq!(total_invoice_amount(text), Some("1200.00".to_string()));
    }

    #[test]
    fn test_gst_with_percentage_token() {
        assert_eq!(cgst("CGST 2% 30.00"), Some("30.00".to_string()));
        assert_eq!(sgst("SGST 2% 1,030.00"), Some("1030.00".to_string()));
        assert_eq!(cgst("CGST 30.00"), Some("30.00".to_string()));
    }

    #[test]
    fn test_transport_flag_tolerates_interleaved_tokens() {
        let text = "TRANSPORTATION OF\nLPG BULK 18 KL\nGOODS  -  ROAD";
        assert!(is_transport(text));
    }

    #[test]
    fn test_transport_flag_is_case_insensitive() {
        assert!(is_transport("transportation of goods - road"));
    }

    #[test]
    fn test_transport_flag_gap_is_bounded() {
        let filler = "x".repeat(150);
        let text = format!("TRANSPORTATION OF {} GOODS - ROAD", filler);
        assert!(!is_transport(&text));
    }

    #[test]
    fn test_transport_flag_absent() {
        assert!(!is_transport("CFS CHARGES for container handling"));
    }
}
