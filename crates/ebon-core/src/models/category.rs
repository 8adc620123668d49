//! Spending categories and their persisted store.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{EditError, StoreError};

/// A user-defined spending bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Display name.
    pub name: String,

    /// Product names known to belong to this category. Absent until the
    /// first association is learned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_products: Option<Vec<String>>,
}

/// The ordered category list, identified by position.
///
/// Indices are stable within one loaded store: appending is the only
/// insertion operation and nothing removes or reorders entries. That is also
/// what keeps persisted indices valid across save/load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryStore {
    categories: Vec<Category>,
}

impl CategoryStore {
    /// Load a store from a JSON file. A missing file is an empty store.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        if !path.is_file() {
            debug!("no category config at {}, starting empty", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let categories =
            serde_json::from_str(&content).map_err(|source| StoreError::ConfigCorrupt {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self { categories })
    }

    /// Persist the full ordered list, overwriting the previous contents.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(&self.categories)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)?;
        info!("saved {} categories to {}", self.categories.len(), path.display());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn get(&self, category_id: usize) -> Option<&Category> {
        self.categories.get(category_id)
    }

    /// Iterate categories in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Display name for a classification; `None` renders as "Unknown".
    pub fn category_name(&self, category_id: Option<usize>) -> &str {
        match category_id.and_then(|id| self.categories.get(id)) {
            Some(category) => &category.name,
            None => "Unknown",
        }
    }

    /// Index of the first category in list order that has learned this
    /// product name. First match wins: earlier categories take precedence
    /// over identical product names learned later elsewhere.
    pub fn resolve_category_id(&self, product_name: &str) -> Option<usize> {
        self.categories.iter().position(|category| {
            category
                .assigned_products
                .as_ref()
                .is_some_and(|products| products.iter().any(|p| p == product_name))
        })
    }

    /// Append a new category and return its stable index.
    pub fn add_category(&mut self, name: impl Into<String>) -> usize {
        self.categories.push(Category {
            name: name.into(),
            assigned_products: None,
        });
        self.categories.len() - 1
    }

    /// Record that a product belongs to a category, so future receipts
    /// classify it automatically. Learning the same name twice stores it
    /// once; insertion order is preserved.
    pub fn learn(&mut self, category_id: usize, product_name: &str) -> Result<(), EditError> {
        let len = self.categories.len();
        let category = self
            .categories
            .get_mut(category_id)
            .ok_or(EditError::IndexOutOfRange { index: category_id, len })?;

        let products = category.assigned_products.get_or_insert_with(Vec::new);
        if !products.iter().any(|p| p == product_name) {
            products.push(product_name.to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_store() -> CategoryStore {
        let mut store = CategoryStore::default();
        let groceries = store.add_category("Groceries");
        store.learn(groceries, "Milk").unwrap();
        store.learn(groceries, "Bread").unwrap();
        store.add_category("Household");
        store
    }

    #[test]
    fn missing_file_is_an_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = CategoryStore::load(&dir.path().join("absent.json")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("category_config.json");
        std::fs::write(&path, "{ not a list").unwrap();

        let err = CategoryStore::load(&path).unwrap_err();
        assert!(matches!(err, StoreError::ConfigCorrupt { .. }));
    }

    #[test]
    fn save_load_round_trip_preserves_order_and_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("category_config.json");

        let store = sample_store();
        store.save(&path).unwrap();
        let reloaded = CategoryStore::load(&path).unwrap();

        assert_eq!(reloaded, store);
    }

    #[test]
    fn persisted_format_omits_absent_products() {
        // A category with no learned products serializes as {"name": ...}
        // only, matching configs written by hand.
        let store = sample_store();
        let value = serde_json::to_value(store.iter().collect::<Vec<_>>()).unwrap();

        assert_eq!(value[0]["assigned_products"], serde_json::json!(["Milk", "Bread"]));
        assert!(value[1].get("assigned_products").is_none());
    }

    #[test]
    fn resolve_is_first_match_wins() {
        let mut store = sample_store();
        let second = store.add_category("Breakfast");
        store.learn(second, "Milk").unwrap();

        assert_eq!(store.resolve_category_id("Milk"), Some(0));
    }

    #[test]
    fn resolve_misses_yield_none() {
        let store = sample_store();
        assert_eq!(store.resolve_category_id("Caviar"), None);
        assert_eq!(CategoryStore::default().resolve_category_id("Milk"), None);
    }

    #[test]
    fn learn_is_idempotent() {
        let mut store = sample_store();
        store.learn(0, "Milk").unwrap();
        store.learn(0, "Milk").unwrap();

        let products = store.get(0).unwrap().assigned_products.as_ref().unwrap();
        assert_eq!(products.iter().filter(|p| *p == "Milk").count(), 1);
        assert_eq!(store.resolve_category_id("Milk"), Some(0));
    }

    #[test]
    fn learn_rejects_unknown_category() {
        let mut store = sample_store();
        let err = store.learn(99, "Milk").unwrap_err();
        assert!(matches!(err, EditError::IndexOutOfRange { index: 99, len: 2 }));
    }

    #[test]
    fn category_name_falls_back_to_unknown() {
        let store = sample_store();
        assert_eq!(store.category_name(Some(0)), "Groceries");
        assert_eq!(store.category_name(None), "Unknown");
    }
}
