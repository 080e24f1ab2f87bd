//! Rule-based field extractors.
//!
//! Each field is an independent lookup: search the text for the first match
//! of its pattern, take the capture group, trim. No shared parser state.

pub mod items;
pub mod patterns;

pub use items::extract_items;

use regex::Regex;

use crate::models::invoice::NOT_FOUND;

/// First capture group of `re` in `text`, trimmed, or the "N/A" sentinel.
pub fn capture_or_sentinel(re: &Regex, text: &str) -> String {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| NOT_FOUND.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::patterns::INVOICE_NUMBER;

    #[test]
    fn test_capture_or_sentinel_found() {
        let value = capture_or_sentinel(&INVOICE_NUMBER, "Invoice Number: INV-01\n");
        assert_eq!(value, "INV-01");
    }

    #[test]
    fn test_capture_or_sentinel_missing() {
        let value = capture_or_sentinel(&INVOICE_NUMBER, "no labels here");
        assert_eq!(value, NOT_FOUND);
    }
}
