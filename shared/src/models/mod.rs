//! Data models
//!
//! Shared between the label compiler, the cycle-count engine and the CLI.

pub mod inventory_item;
pub mod scan_event;

// Re-exports
pub use inventory_item::*;
pub use scan_event::*;
