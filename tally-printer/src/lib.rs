//! # tally-printer
//!
//! ZPL label printer library - low-level printing capabilities only.
//!
//! ## Scope
//!
//! This crate handles HOW to print:
//! - ZPL command model and rendering
//! - Field data escaping and code page transcoding
//! - Byte sinks that receive finished jobs
//!
//! Business logic (WHAT to print) stays in application code:
//! - Inventory label layout → tally-edge
//!
//! ## Example
//!
//! ```ignore
//! use tally_printer::{ByteSink, Command, CommandLanguage, MemorySink, render};
//!
//! let commands = vec![
//!     Command::SetOrigin { x: 50, y: 30 },
//!     Command::DrawText { font_size: 30, text: "Qty: 4 EA".into(), block: None },
//! ];
//! let bytes = render(&commands, CommandLanguage::Zpl);
//!
//! let sink = MemorySink::new();
//! sink.send(&bytes).await?;
//! ```

mod encoding;
mod error;
mod sink;
mod zpl;

// Re-exports
pub use encoding::{hex_escape, needs_hex_escape, sanitize_field, to_windows_1252};
pub use error::{PrintError, PrintResult};
pub use sink::{ByteSink, FileSink, MemorySink};
pub use zpl::{
    Alignment, Command, CommandLanguage, ErrorCorrection, FieldBlock, Symbology, ZplBuilder,
    render,
};
