//! Inventory Label Module
//!
//! This module turns catalog items into ZPL labels:
//! - Layout: where each field sits on the 4x2 label
//! - Compiler: item + quantity + date → ordered command list
//! - Printer: compile, render and hand off to a byte sink

pub mod catalog;
pub mod compiler;
pub mod layout;
pub mod model;
pub mod printer;

pub use catalog::Catalog;
pub use compiler::LabelCompiler;
pub use layout::{BarcodeSlot, BlockSlot, LabelLayout, Origin, QrSlot, TextSlot};
pub use model::{LabelModel, ValidationError};
pub use printer::LabelPrinter;
