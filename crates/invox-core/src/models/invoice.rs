//! Invoice record model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sentinel carried by every field whose pattern did not match.
pub const NOT_FOUND: &str = "N/A";

/// True if `value` is the "not found" sentinel.
pub fn is_missing(value: &str) -> bool {
    value == NOT_FOUND
}

/// A structured invoice record extracted from document text.
///
/// Built once per document and consumed once by the recorder. No field is
/// ever null: fields whose pattern did not match carry [`NOT_FOUND`] until
/// the recorder normalizes them at persistence time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    /// Payer name and address, multi-line.
    pub from_address: String,

    /// Payer tax identifier.
    pub from_gstin: String,

    /// Payee name and address, multi-line.
    pub to_address: String,

    /// Payee tax identifier.
    pub to_gstin: String,

    pub invoice_number: String,

    /// Textual date, `YYYY-MM-DD` or bare `YYYY`.
    pub invoice_date: String,

    pub po_number: String,

    /// Textual date, `YYYY-MM-DD` or bare `YYYY`.
    pub po_date: String,

    /// Decimal-formatted total.
    pub grand_total: String,

    /// Line items in document order.
    pub items: Vec<LineItem>,
}

impl InvoiceRecord {
    /// Payer name: the first line of the from address.
    pub fn payer_name(&self) -> &str {
        self.from_address.lines().next().unwrap_or("").trim()
    }
}

/// A single line item row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Kind tag leading the row in the source document.
    pub kind: ItemKind,

    /// Product/service description.
    pub description: String,

    pub quantity: u32,

    pub unit_price: Decimal,

    pub total_price: Decimal,
}

/// The two row tags an item table uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Product,
    Service,
}

impl ItemKind {
    /// Map a matched tag to its kind. The item pattern only ever captures
    /// the two literal tags.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Service" => ItemKind::Service,
            _ => ItemKind::Product,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payer_name_first_line() {
        let record = InvoiceRecord {
            from_address: "Acme Corp\n12 Industrial Road\nPune".to_string(),
            from_gstin: NOT_FOUND.to_string(),
            to_address: NOT_FOUND.to_string(),
            to_gstin: NOT_FOUND.to_string(),
            invoice_number: NOT_FOUND.to_string(),
            invoice_date: NOT_FOUND.to_string(),
            po_number: NOT_FOUND.to_string(),
            po_date: NOT_FOUND.to_string(),
            grand_total: NOT_FOUND.to_string(),
            items: Vec::new(),
        };

        assert_eq!(record.payer_name(), "Acme Corp");
    }

    #[test]
    fn test_is_missing() {
        assert!(is_missing(NOT_FOUND));
        assert!(!is_missing(""));
        assert!(!is_missing("n/a"));
    }

    #[test]
    fn test_item_kind_from_tag() {
        assert_eq!(ItemKind::from_tag("Product"), ItemKind::Product);
        assert_eq!(ItemKind::from_tag("Service"), ItemKind::Service);
    }

    #[test]
    fn test_items_serialize_in_order() {
        let items = vec![
            LineItem {
                kind: ItemKind::Product,
                description: "Widget".to_string(),
                quantity: 3,
                unit_price: "10.00".parse().unwrap(),
                total_price: "30.00".parse().unwrap(),
            },
            LineItem {
                kind: ItemKind::Service,
                description: "Install".to_string(),
                quantity: 1,
                unit_price: "50.00".parse().unwrap(),
                total_price: "50.00".parse().unwrap(),
            },
        ];

        let json = serde_json::to_value(&items).unwrap();
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["description"], "Widget");
        assert_eq!(rows[0]["quantity"], 3);
        assert_eq!(rows[1]["kind"], "service");
    }
}
