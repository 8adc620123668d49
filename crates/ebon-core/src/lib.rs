//! Core library for receipt categorization.
//!
//! This crate provides:
//! - Receipt source rendering (PDF text layer or plain text)
//! - Heuristic item extraction from rendered receipt text
//! - A persisted category store with incremental product learning
//! - Session state: classification, aggregation, and assignment editing

pub mod error;
pub mod models;
pub mod pdf;
pub mod receipt;
pub mod session;

pub use error::{EbonError, EditError, ParseError, PdfError, Result, StoreError};
pub use models::category::{Category, CategoryStore};
pub use models::item::BoughtItem;
pub use pdf::render;
pub use receipt::{candidate_lines, extract_item, parse_items};
pub use session::{Session, Summary, SummaryRow};

/// Re-export the money type used for prices.
pub use rust_decimal::Decimal;
