//! Label layout parameters
//!
//! Every coordinate is in printer dots. The default is the 4x2 inch
//! inventory label at 203 dpi; a JSON file may override any part of it.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tally_printer::{Alignment, ErrorCorrection, FieldBlock, Symbology};

use crate::core::EdgeResult;

/// Field origin (`^FO`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Origin {
    pub x: u32,
    pub y: u32,
}

impl Origin {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Linear barcode slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarcodeSlot {
    pub origin: Origin,
    #[serde(default)]
    pub symbology: Symbology,
    pub module_width: u32,
    pub height: u32,
    pub human_readable: bool,
}

/// Single-line text slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSlot {
    pub origin: Origin,
    pub font_size: u32,
}

/// Wrapped text slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSlot {
    pub origin: Origin,
    pub font_size: u32,
    pub block: FieldBlock,
}

/// 2D code slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrSlot {
    pub origin: Origin,
    pub scale: u32,
    #[serde(default)]
    pub error_correction: ErrorCorrection,
}

/// Complete inventory label layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelLayout {
    pub home: Origin,
    pub id_barcode: BarcodeSlot,
    pub id_text: TextSlot,
    pub description: BlockSlot,
    pub location_barcode: BarcodeSlot,
    pub location_text: TextSlot,
    pub quantity: TextSlot,
    pub price: TextSlot,
    pub currency_symbol: String,
    pub category: TextSlot,
    pub date: TextSlot,
    /// chrono format string for the date stamp
    pub date_format: String,
    pub qr: QrSlot,
}

impl Default for LabelLayout {
    fn default() -> Self {
        Self {
            home: Origin::new(0, 0),
            id_barcode: BarcodeSlot {
                origin: Origin::new(50, 30),
                symbology: Symbology::Code128,
                module_width: 2,
                height: 100,
                human_readable: true,
            },
            id_text: TextSlot {
                origin: Origin::new(50, 140),
                font_size: 40,
            },
            description: BlockSlot {
                origin: Origin::new(50, 190),
                font_size: 25,
                block: FieldBlock {
                    width: 700,
                    max_lines: 2,
                    alignment: Alignment::Left,
                },
            },
            location_barcode: BarcodeSlot {
                origin: Origin::new(500, 30),
                symbology: Symbology::Code128,
                module_width: 1,
                height: 50,
                human_readable: false,
            },
            location_text: TextSlot {
                origin: Origin::new(500, 85),
                font_size: 20,
            },
            quantity: TextSlot {
                origin: Origin::new(50, 250),
                font_size: 30,
            },
            price: TextSlot {
                origin: Origin::new(350, 250),
                font_size: 30,
            },
            currency_symbol: "$".to_string(),
            category: TextSlot {
                origin: Origin::new(50, 290),
                font_size: 20,
            },
            date: TextSlot {
                origin: Origin::new(350, 290),
                font_size: 20,
            },
            date_format: "%Y-%m-%d".to_string(),
            qr: QrSlot {
                origin: Origin::new(550, 150),
                scale: 4,
                error_correction: ErrorCorrection::Quality,
            },
        }
    }
}

impl LabelLayout {
    /// Load a layout from a JSON file; missing sections keep their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> EdgeResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&raw)?)
    }
}
