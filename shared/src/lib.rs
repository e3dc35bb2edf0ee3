//! Shared types for Tally
//!
//! Inventory and scan data passed between the label printer library,
//! the cycle-count engine and the edge application.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{InventoryItem, ScanDelivery, ScanEvent};
pub use util::{format_price, parse_price, round_price};
