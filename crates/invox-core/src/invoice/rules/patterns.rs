//! Regex patterns for invoice field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Address blocks run from their section label to the GSTIN marker,
    // across line boundaries.
    pub static ref FROM_ADDRESS: Regex = Regex::new(
        r"(?s)From:\s*(.*?)GSTIN:"
    ).unwrap();

    pub static ref TO_ADDRESS: Regex = Regex::new(
        r"(?s)To:\s*(.*?)GSTIN:"
    ).unwrap();

    // GSTIN lookups re-anchor at their section label instead of continuing
    // from a cursor, so a malformed From block cannot leak into the To match.
    pub static ref FROM_GSTIN: Regex = Regex::new(
        r"(?s)From:.*?GSTIN:\s*(\w+)"
    ).unwrap();

    pub static ref TO_GSTIN: Regex = Regex::new(
        r"(?s)To:.*?GSTIN:\s*(\w+)"
    ).unwrap();

    // Scalar fields: first whitespace-delimited token after the label.
    pub static ref INVOICE_NUMBER: Regex = Regex::new(
        r"Invoice Number:\s*(\S+)"
    ).unwrap();

    pub static ref PO_NUMBER: Regex = Regex::new(
        r"Purchase Order Number:\s*(\S+)"
    ).unwrap();

    // Dates are digits and hyphens only; calendar validity is checked at
    // persistence time.
    pub static ref INVOICE_DATE: Regex = Regex::new(
        r"Invoice Date:\s*([\d-]+)"
    ).unwrap();

    pub static ref PO_DATE: Regex = Regex::new(
        r"Purchase Order Date:\s*([\d-]+)"
    ).unwrap();

    // Digits with at most one decimal point.
    pub static ref GRAND_TOTAL: Regex = Regex::new(
        r"Grand Total:\s*(\d+(?:\.\d+)?)"
    ).unwrap();

    // Line item rows: kind tag, description, quantity, unit price, total
    // price. Malformed near-matches simply do not match.
    pub static ref LINE_ITEM: Regex = Regex::new(
        r"(Product|Service)\s+([A-Za-z0-9 ]+)\s+(\d+)\s+(\d+(?:\.\d+)?)\s+(\d+(?:\.\d+)?)"
    ).unwrap();
}
