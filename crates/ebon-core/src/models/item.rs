//! Bought item model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A purchased item recognized on one receipt line.
///
/// `category_id` is the only field that changes after creation, and only
/// through the assignment editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoughtItem {
    /// Item name as printed on the receipt, trimmed.
    pub name: String,

    /// Item price.
    pub price: Decimal,

    /// Index into the category store, when classified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<usize>,
}
