//! Date normalization against the vendor's known date formats.

use chrono::NaiveDate;

use crate::models::invoice::NOT_FOUND;

/// Default output format (DD/MM/YYYY).
pub const DEFAULT_OUTPUT_FORMAT: &str = "%d/%m/%Y";

/// Known input formats in priority order. The first format that parses
/// wins, so the order is part of the compatibility contract.
const INPUT_FORMATS: [&str; 7] = [
    "%b %d, %Y", // Jun 13, 2025
    "%d/%m/%Y",  // 13/06/2025
    "%d/%b/%Y",  // 13/Jun/2025
    "%d-%m-%Y",  // 13-06-2025
    "%d.%m.%Y",  // 13.06.2025
    "%d-%b-%y",  // 13-Jun-25
    "%d-%b-%Y",  // 13-Jun-2025
];

/// Reformat a date string to `out_fmt`, or "Not Found" when no known
/// input format matches. Calendar dates only, no timezone handling.
pub fn normalize_date(input: &str, out_fmt: &str) -> String {
    let input = input.trim();
    for fmt in INPUT_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(input, fmt) {
            return date.format(out_fmt).to_string();
        }
    }
    NOT_FOUND.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_every_supported_input_format() {
        for input in [
            "Jun 13, 2025",
            "13/06/2025",
            "13/Jun/2025",
            "13-06-2025",
            "13.06.2025",
            "13-Jun-25",
            "13-Jun-2025",
        ] {
            assert_eq!(
                normalize_date(input, DEFAULT_OUTPUT_FORMAT),
                "13/06/2025",
                "failed for {input}"
            );
        }
    }

    #[test]
    fn test_custom_output_format() {
        assert_eq!(normalize_date("13-06-2025", "%d-%b-%Y"), "13-Jun-2025");
    }

    #[test]
    fn test_unrecognized_format_is_sentinel() {
        assert_eq!(normalize_date("2025-06-13", DEFAULT_OUTPUT_FORMAT), NOT_FOUND);
        assert_eq!(normalize_date("Not Found", DEFAULT_OUTPUT_FORMAT), NOT_FOUND);
        assert_eq!(normalize_date("", DEFAULT_OUTPUT_FORMAT), NOT_FOUND);
    }

    #[test]
    fn test_two_digit_year() {
        assert_eq!(normalize_date("01-Jan-25", DEFAULT_OUTPUT_FORMAT), "01/01/2025");
    }
}
