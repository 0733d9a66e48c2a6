//! Best-effort cleanup of numeric-looking strings.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Strip thousands separators and surrounding whitespace, collapsing
/// integral values to plain integer form.
///
/// Not a validation function: input that fails to parse comes back
/// stripped but otherwise unchanged.
pub fn clean_numeric(value: &str) -> String {
    let stripped = value.replace(',', "");
    let stripped = stripped.trim();

    match Decimal::from_str(stripped) {
        Ok(num) => num.normalize().to_string(),
        Err(_) => stripped.to_string(),
    }
}
