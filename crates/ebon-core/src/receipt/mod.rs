//! Receipt text parsing: line filtering and item extraction.

mod filter;

pub use filter::candidate_lines;

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::ParseError;
use crate::models::category::CategoryStore;
use crate::models::item::BoughtItem;

/// Result type for parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

lazy_static! {
    /// Candidate line shape: item name, a run of two or more whitespace
    /// characters, price token. The greedy name group pushes the split to
    /// the last such run.
    static ref ITEM_LINE: Regex = Regex::new(r"^(?P<name>.*)\s{2,}(?P<price>\S+)$").unwrap();
}

/// Extract the (name, price) pair from one candidate line.
///
/// The price token has its decimal comma normalized to a point before
/// parsing. Lines that do not split, or whose trailing token is not numeric,
/// are reported as errors rather than skipped.
pub fn extract_item(line: &str) -> Result<(String, Decimal)> {
    let caps = ITEM_LINE
        .captures(line)
        .ok_or_else(|| ParseError::MalformedLine { line: line.to_string() })?;

    let name = caps["name"].trim().to_string();
    let token = &caps["price"];
    let price = token
        .replace(',', ".")
        .parse::<Decimal>()
        .map_err(|_| ParseError::Price {
            line: line.to_string(),
            token: token.to_string(),
        })?;

    Ok((name, price))
}

/// Parse full rendered receipt text into classified items.
///
/// Classification happens here: each item's category is resolved against the
/// store's state at the moment its line is parsed, and is only re-evaluated
/// through the assignment editor.
pub fn parse_items(text: &str, store: &CategoryStore) -> Result<Vec<BoughtItem>> {
    let lines = candidate_lines(text);
    let mut items = Vec::with_capacity(lines.len());

    for line in lines {
        let (name, price) = extract_item(&line)?;
        let category_id = store.resolve_category_id(&name);
        items.push(BoughtItem { name, price, category_id });
    }

    debug!("extracted {} items", items.len());
    Ok(items)
}
