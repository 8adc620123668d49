//! One categorization session: the parsed items, the store they were
//! classified against, and the aggregate view.

use std::collections::BTreeMap;
use std::path::Path;

use rust_decimal::Decimal;

use crate::error::EditError;
use crate::models::category::CategoryStore;
use crate::models::item::BoughtItem;
use crate::pdf::render;
use crate::receipt::parse_items;

/// Session state owned for the lifetime of one processed receipt.
///
/// Items and store travel together so assignments always refer to the store
/// the items were classified against.
#[derive(Debug, Default)]
pub struct Session {
    pub items: Vec<BoughtItem>,
    pub store: CategoryStore,
}

/// One per-category subtotal.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    /// Category index; `None` groups the unclassified items.
    pub category_id: Option<usize>,
    pub total: Decimal,
}

/// Per-category subtotals plus the grand total.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Real categories in index order, the unknown group last.
    pub rows: Vec<SummaryRow>,
    pub grand_total: Decimal,
}

impl Session {
    /// Render a receipt source and classify its items against the store.
    ///
    /// Replaces any previously parsed items.
    pub fn parse_receipt(&mut self, path: &Path) -> crate::Result<()> {
        let text = render(path)?;
        self.items = parse_items(&text, &self.store)?;
        Ok(())
    }

    /// Look up an item by user-supplied index.
    pub fn item(&self, index: usize) -> Result<&BoughtItem, EditError> {
        self.items.get(index).ok_or(EditError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    /// Assign an item to a category, optionally teaching the store the
    /// association for future receipts.
    ///
    /// Bounds are checked before anything mutates, so a failed assignment
    /// leaves both the item and the store untouched.
    pub fn assign(
        &mut self,
        item_index: usize,
        category_id: usize,
        remember: bool,
    ) -> Result<(), EditError> {
        if category_id >= self.store.len() {
            return Err(EditError::IndexOutOfRange {
                index: category_id,
                len: self.store.len(),
            });
        }

        let len = self.items.len();
        let item = self
            .items
            .get_mut(item_index)
            .ok_or(EditError::IndexOutOfRange { index: item_index, len })?;

        item.category_id = Some(category_id);
        if remember {
            self.store.learn(category_id, &item.name)?;
        }
        Ok(())
    }

    /// Group item prices by category and total them.
    pub fn summary(&self) -> Summary {
        let mut totals: BTreeMap<usize, Decimal> = BTreeMap::new();
        let mut unknown: Option<Decimal> = None;
        let mut grand_total = Decimal::ZERO;

        for item in &self.items {
            grand_total += item.price;
            match item.category_id {
                Some(id) => *totals.entry(id).or_insert(Decimal::ZERO) += item.price,
                None => *unknown.get_or_insert(Decimal::ZERO) += item.price,
            }
        }

        let mut rows: Vec<SummaryRow> = totals
            .into_iter()
            .map(|(id, total)| SummaryRow {
                category_id: Some(id),
                total,
            })
            .collect();
        if let Some(total) = unknown {
            rows.push(SummaryRow {
                category_id: None,
                total,
            });
        }

        Summary { rows, grand_total }
    }
}
