//! Rule-based invoice parser.

use tracing::debug;

use crate::models::invoice::InvoiceRecord;

use super::rules::{capture_or_sentinel, extract_items, patterns::*};

/// Trait for invoice parsing.
pub trait InvoiceParser {
    /// Parse an invoice record from text.
    ///
    /// Total over all inputs: a field whose pattern does not match comes
    /// back as the "N/A" sentinel, never as an error. No side effects.
    fn parse(&self, text: &str) -> InvoiceRecord;
}

/// Parser built from a fixed, ordered list of independent pattern lookups.
pub struct RuleBasedParser;

impl RuleBasedParser {
    /// Create a new rule-based parser.
    pub fn new() -> Self {
        Self
    }
}

impl Default for RuleBasedParser {
    fn default() -> Self {
        Self::new()
    }
}

impl InvoiceParser for RuleBasedParser {
    fn parse(&self, text: &str) -> InvoiceRecord {
        let record = InvoiceRecord {
            from_address: capture_or_sentinel(&FROM_ADDRESS, text),
            from_gstin: capture_or_sentinel(&FROM_GSTIN, text),
            to_address: capture_or_sentinel(&TO_ADDRESS, text),
            to_gstin: capture_or_sentinel(&TO_GSTIN, text),
            invoice_number: capture_or_sentinel(&INVOICE_NUMBER, text),
            invoice_date: capture_or_sentinel(&INVOICE_DATE, text),
            po_number: capture_or_sentinel(&PO_NUMBER, text),
            po_date: capture_or_sentinel(&PO_DATE, text),
            grand_total: capture_or_sentinel(&GRAND_TOTAL, text),
            items: extract_items(text),
        };

        debug!(
            "Extracted invoice {} with {} line items",
            record.invoice_number,
            record.items.len()
        );

        record
    }
}
