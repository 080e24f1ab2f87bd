//! Line item extraction.

use rust_decimal::Decimal;

use super::patterns::LINE_ITEM;
use crate::models::invoice::{ItemKind, LineItem};

/// Collect every line item row in document order.
///
/// The pattern guarantees the numeric groups are digit/decimal text, so the
/// conversions below cannot fail on a matched row.
pub fn extract_items(text: &str) -> Vec<LineItem> {
    LINE_ITEM
        .captures_iter(text)
        .map(|caps| LineItem {
            kind: ItemKind::from_tag(&caps[1]),
            description: caps[2].trim().to_string(),
            quantity: caps[3].parse().unwrap_or(0),
            unit_price: caps[4].parse().unwrap_or(Decimal::ZERO),
            total_price: caps[5].parse().unwrap_or(Decimal::ZERO),
        })
        .collect()
}
