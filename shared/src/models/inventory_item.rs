//! Inventory Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog snapshot of a stocked item
///
/// Supplied by the catalog lookup and treated as read-only input by the
/// label compiler. `product_id` / `uom` are accepted as aliases because the
/// upstream catalog export uses those names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(alias = "product_id")]
    pub identifier: String,
    #[serde(default)]
    pub description: String,
    /// Bin / rack location, e.g. `A-12-3-B`
    #[serde(default)]
    pub location: Option<String>,
    /// Quantity on hand
    #[serde(default)]
    pub quantity: u32,
    #[serde(alias = "uom", default)]
    pub unit: String,
    /// Unit price (accepts JSON number or string)
    pub price: Decimal,
    #[serde(default)]
    pub category: String,
}

impl InventoryItem {
    pub fn new(identifier: impl Into<String>, price: Decimal) -> Self {
        Self {
            identifier: identifier.into(),
            description: String::new(),
            location: None,
            quantity: 0,
            unit: String::new(),
            price,
            category: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Location, treating blank strings as absent
    pub fn location(&self) -> Option<&str> {
        self.location
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_catalog_aliases() {
        let json = r#"{
            "product_id": "GMS-1001",
            "description": "Galvanized sheet 4x8",
            "location": "A-12-3-B",
            "quantity": 42,
            "uom": "EA",
            "price": 19.5,
            "category": "Sheet"
        }"#;
        let item: InventoryItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.identifier, "GMS-1001");
        assert_eq!(item.unit, "EA");
        assert_eq!(item.price, Decimal::from_str("19.5").unwrap());
        assert_eq!(item.location(), Some("A-12-3-B"));
    }

    #[test]
    fn test_price_from_string() {
        let json = r#"{"identifier": "X1", "price": "7.125"}"#;
        let item: InventoryItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.price, Decimal::from_str("7.125").unwrap());
        assert_eq!(item.location, None);
        assert_eq!(item.quantity, 0);
    }

    #[test]
    fn test_malformed_price_rejected() {
        let json = r#"{"identifier": "X1", "price": "abc"}"#;
        assert!(serde_json::from_str::<InventoryItem>(json).is_err());
    }

    #[test]
    fn test_blank_location_is_absent() {
        let item = InventoryItem::new("X1", Decimal::ONE).with_location("   ");
        assert_eq!(item.location(), None);
    }
}
