//! Tabular rendering of classified items and per-category totals.

use ebon_core::Session;

/// Render the item table: index, name, category name, price.
pub fn render_items(session: &Session) -> String {
    let mut out = String::new();
    for (index, item) in session.items.iter().enumerate() {
        let category = session.store.category_name(item.category_id);
        out.push_str(&format!(
            "[{index:>3}] {:<25} {:<15} {:.2}€\n",
            item.name, category, item.price
        ));
    }
    out
}

/// Render the per-category subtotal lines and the grand total.
pub fn render_summary(session: &Session) -> String {
    let summary = session.summary();
    let mut out = String::new();
    for row in &summary.rows {
        let category = session.store.category_name(row.category_id);
        out.push_str(&format!("{category:<15} {:.2}€\n", row.total));
    }
    out.push_str(&format!("\nTOTAL: {:.2}€\n", summary.grand_total));
    out
}
