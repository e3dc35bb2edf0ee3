//! Inventory label compiler
//!
//! Maps an inventory item onto the fixed label layout as an ordered
//! [`Command`] list, top to bottom.

use std::fmt::Write;

use chrono::NaiveDate;
use shared::InventoryItem;
use tally_printer::{Command, CommandLanguage};

use super::layout::{BarcodeSlot, LabelLayout, Origin, TextSlot};
use super::model::{LabelModel, ValidationError};

/// Inventory label compiler
///
/// Stateless apart from its layout; safe to share between threads.
#[derive(Debug, Clone, Default)]
pub struct LabelCompiler {
    layout: LabelLayout,
}

impl LabelCompiler {
    pub fn new(layout: LabelLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &LabelLayout {
        &self.layout
    }

    /// Validate and compile one label
    pub fn compile(
        &self,
        item: &InventoryItem,
        quantity: u32,
        date: NaiveDate,
    ) -> Result<Vec<Command>, ValidationError> {
        let model = LabelModel::new(item, quantity, date)?;
        Ok(self.compile_model(&model))
    }

    /// Compile and render in one step
    pub fn compile_to_bytes(
        &self,
        item: &InventoryItem,
        quantity: u32,
        date: NaiveDate,
        language: CommandLanguage,
    ) -> Result<Vec<u8>, ValidationError> {
        let commands = self.compile(item, quantity, date)?;
        Ok(tally_printer::render(&commands, language))
    }

    /// Compile an already validated model
    pub fn compile_model(&self, model: &LabelModel) -> Vec<Command> {
        let l = &self.layout;
        let mut cmds = Vec::with_capacity(32);

        cmds.push(Command::LabelHome {
            x: l.home.x,
            y: l.home.y,
        });

        // Identifier barcode + readable text
        push_barcode(&mut cmds, &l.id_barcode, &model.identifier);
        push_text(&mut cmds, &l.id_text, model.identifier.clone());

        // Description (wrapped)
        push_origin(&mut cmds, l.description.origin);
        cmds.push(Command::DrawText {
            font_size: l.description.font_size,
            text: model.description.clone(),
            block: Some(l.description.block),
        });

        // Location region
        if let Some(location) = &model.location {
            push_barcode(&mut cmds, &l.location_barcode, location);
            push_text(&mut cmds, &l.location_text, format!("Loc: {}", location));
        }

        push_text(
            &mut cmds,
            &l.quantity,
            format!("Qty: {} {}", model.quantity, model.unit),
        );
        push_text(
            &mut cmds,
            &l.price,
            format!("Price: {}{}", l.currency_symbol, model.price_text()),
        );
        push_text(&mut cmds, &l.category, format!("Cat: {}", model.category));
        push_text(&mut cmds, &l.date, format_date(model.date, &l.date_format));

        push_origin(&mut cmds, l.qr.origin);
        cmds.push(Command::DrawQr {
            data: model.summary(),
            scale: l.qr.scale,
            error_correction: l.qr.error_correction,
        });

        cmds
    }
}

fn push_origin(cmds: &mut Vec<Command>, origin: Origin) {
    cmds.push(Command::SetOrigin {
        x: origin.x,
        y: origin.y,
    });
}

fn push_barcode(cmds: &mut Vec<Command>, slot: &BarcodeSlot, data: &str) {
    push_origin(cmds, slot.origin);
    cmds.push(Command::SetBarcodeWidth {
        module_width: slot.module_width,
    });
    cmds.push(Command::DrawBarcode {
        symbology: slot.symbology,
        height: slot.height,
        human_readable: slot.human_readable,
        data: data.to_string(),
    });
}

fn push_text(cmds: &mut Vec<Command>, slot: &TextSlot, text: String) {
    push_origin(cmds, slot.origin);
    cmds.push(Command::DrawText {
        font_size: slot.font_size,
        text,
        block: None,
    });
}

/// Format with a layout-supplied pattern, falling back to ISO on a bad pattern
fn format_date(date: NaiveDate, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_err() {
        return date.format("%Y-%m-%d").to_string();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tally_printer::render;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn sheet() -> InventoryItem {
        InventoryItem::new("GMS-1001", Decimal::from_str("19.995").unwrap())
            .with_description("Galvanized sheet 4x8 16ga")
            .with_location("A-12-3-B")
            .with_quantity(42)
            .with_unit("EA")
            .with_category("Sheet")
    }

    fn render_str(item: &InventoryItem, qty: u32) -> String {
        let cmds = LabelCompiler::default().compile(item, qty, date()).unwrap();
        String::from_utf8(render(&cmds, CommandLanguage::Zpl)).unwrap()
    }

    #[test]
    fn test_default_layout_output() {
        let expected = concat!(
            "^XA\n",
            "^LH0,0\n",
            "^FO50,30^BY2\n",
            "^BCN,100,Y,N,N\n",
            "^FDGMS-1001^FS\n",
            "^FO50,140^A0N,40,40\n",
            "^FDGMS-1001^FS\n",
            "^FO50,190^A0N,25,25^FB700,2,0,L,0\n",
            "^FDGalvanized sheet 4x8 16ga^FS\n",
            "^FO500,30^BY1\n",
            "^BCN,50,N,N,N\n",
            "^FDA-12-3-B^FS\n",
            "^FO500,85^A0N,20,20\n",
            "^FDLoc: A-12-3-B^FS\n",
            "^FO50,250^A0N,30,30\n",
            "^FDQty: 2 EA^FS\n",
            "^FO350,250^A0N,30,30\n",
            "^FDPrice: $20.00^FS\n",
            "^FO50,290^A0N,20,20\n",
            "^FDCat: Sheet^FS\n",
            "^FO350,290^A0N,20,20\n",
            "^FD2026-10-16^FS\n",
            "^FO550,150^BQN,2,4\n",
            "^FDQA,ID:GMS-1001|QTY:2|LOC:A-12-3-B|PRICE:20.00^FS\n",
            "^XZ",
        );
        assert_eq!(render_str(&sheet(), 2), expected);
    }

    #[test]
    fn test_no_location_commands_without_location() {
        let mut item = sheet();
        item.location = None;
        let compiler = LabelCompiler::default();
        let cmds = compiler.compile(&item, 1, date()).unwrap();
        let layout = compiler.layout();

        let barcodes = cmds
            .iter()
            .filter(|c| matches!(c, Command::DrawBarcode { .. }))
            .count();
        assert_eq!(barcodes, 1);

        for region in [layout.location_barcode.origin, layout.location_text.origin] {
            assert!(!cmds.contains(&Command::SetOrigin {
                x: region.x,
                y: region.y
            }));
        }
        assert!(!cmds.iter().any(|c| matches!(
            c,
            Command::DrawText { text, .. } if text.starts_with("Loc:")
        )));
    }

    #[test]
    fn test_location_region_present() {
        let cmds = LabelCompiler::default().compile(&sheet(), 1, date()).unwrap();
        let barcodes: Vec<_> = cmds
            .iter()
            .filter_map(|c| match c {
                Command::DrawBarcode { data, .. } => Some(data.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(barcodes, ["GMS-1001", "A-12-3-B"]);
    }

    #[test]
    fn test_price_rounds_half_up() {
        let out = render_str(&sheet(), 1);
        assert!(out.contains("^FDPrice: $20.00^FS"));

        let mut item = sheet();
        item.price = Decimal::from_str("7").unwrap();
        assert!(render_str(&item, 1).contains("^FDPrice: $7.00^FS"));
    }

    #[test]
    fn test_compile_is_deterministic() {
        let compiler = LabelCompiler::default();
        let a = compiler
            .compile_to_bytes(&sheet(), 5, date(), CommandLanguage::Zpl)
            .unwrap();
        let b = compiler
            .compile_to_bytes(&sheet(), 5, date(), CommandLanguage::Zpl)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_validation_errors() {
        let compiler = LabelCompiler::default();
        let mut item = sheet();
        assert_eq!(
            compiler.compile(&item, 0, date()),
            Err(ValidationError::InvalidQuantity(0))
        );
        item.identifier.clear();
        assert_eq!(
            compiler.compile(&item, 1, date()),
            Err(ValidationError::EmptyIdentifier)
        );
    }

    #[test]
    fn test_custom_layout() {
        let layout = LabelLayout {
            currency_symbol: "€".to_string(),
            date_format: "%d.%m.%Y".to_string(),
            ..LabelLayout::default()
        };
        let cmds = LabelCompiler::new(layout).compile(&sheet(), 1, date()).unwrap();
        let out = String::from_utf8(render(&cmds, CommandLanguage::Zpl)).unwrap();
        assert!(out.contains("^FDPrice: €20.00^FS"));
        assert!(out.contains("^FD16.10.2026^FS"));
    }

    #[test]
    fn test_bad_date_pattern_falls_back() {
        assert_eq!(format_date(date(), "%Q"), "2026-10-16");
    }
}
