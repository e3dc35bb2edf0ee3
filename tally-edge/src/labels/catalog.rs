//! JSON-backed item catalog

use std::collections::HashMap;
use std::path::Path;

use shared::InventoryItem;
use tracing::{info, instrument};

use crate::core::{EdgeError, EdgeResult};

/// Read-only lookup of inventory items by identifier
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: HashMap<String, InventoryItem>,
}

impl Catalog {
    /// Build from items; a later duplicate identifier replaces an earlier one
    ///
    /// Identifiers are keyed trimmed, matching what the label prints.
    pub fn from_items(items: impl IntoIterator<Item = InventoryItem>) -> Self {
        let items = items
            .into_iter()
            .map(|item| (item.identifier.trim().to_string(), item))
            .collect();
        Self { items }
    }

    /// Load a JSON array of items
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_json_file(path: impl AsRef<Path>) -> EdgeResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let items: Vec<InventoryItem> = serde_json::from_str(&raw)?;
        let catalog = Self::from_items(items);
        info!(items = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    pub fn get(&self, identifier: &str) -> EdgeResult<&InventoryItem> {
        self.items
            .get(identifier.trim())
            .ok_or_else(|| EdgeError::UnknownItem(identifier.to_string()))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
