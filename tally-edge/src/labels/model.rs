//! Printable label fields derived from an inventory item

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::InventoryItem;
use shared::util::{format_price, round_price};
use thiserror::Error;

/// Rejected label input; no label is produced
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("identifier must not be empty")]
    EmptyIdentifier,

    #[error("print quantity must be at least 1, got {0}")]
    InvalidQuantity(u32),

    #[error("price must be non-negative, got {0}")]
    NegativePrice(Decimal),

    #[error("malformed price: {0}")]
    MalformedPrice(String),
}

/// Validated label contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelModel {
    pub identifier: String,
    pub description: String,
    /// `None` when the item has no location; the location region is then omitted
    pub location: Option<String>,
    /// Requested print quantity
    pub quantity: u32,
    pub unit: String,
    /// Rounded to 2 decimal places
    pub price: Decimal,
    pub category: String,
    pub date: NaiveDate,
}

impl LabelModel {
    pub fn new(item: &InventoryItem, quantity: u32, date: NaiveDate) -> Result<Self, ValidationError> {
        let identifier = item.identifier.trim();
        if identifier.is_empty() {
            return Err(ValidationError::EmptyIdentifier);
        }
        if quantity < 1 {
            return Err(ValidationError::InvalidQuantity(quantity));
        }
        if item.price < Decimal::ZERO {
            return Err(ValidationError::NegativePrice(item.price));
        }

        Ok(Self {
            identifier: identifier.to_string(),
            description: item.description.clone(),
            location: item.location().map(str::to_string),
            quantity,
            unit: item.unit.clone(),
            price: round_price(item.price),
            category: item.category.clone(),
            date,
        })
    }

    /// Build from a raw price string as typed by an operator
    pub fn with_price_text(
        item: &InventoryItem,
        price: &str,
        quantity: u32,
        date: NaiveDate,
    ) -> Result<Self, ValidationError> {
        let parsed =
            shared::parse_price(price).ok_or_else(|| ValidationError::MalformedPrice(price.to_string()))?;
        let item = InventoryItem {
            price: parsed,
            ..item.clone()
        };
        Self::new(&item, quantity, date)
    }

    pub fn price_text(&self) -> String {
        format_price(self.price)
    }

    /// Pipe-delimited summary carried by the 2D code
    ///
    /// `LOC:` is left empty when the item has no location.
    pub fn summary(&self) -> String {
        format!(
            "ID:{}|QTY:{}|LOC:{}|PRICE:{}",
            self.identifier,
            self.quantity,
            self.location.as_deref().unwrap_or(""),
            self.price_text()
        )
    }
}
