//! ZPL command model and renderer
//!
//! A label is described as an ordered list of [`Command`]s and serialized
//! with [`render`]. Rendering is pure: the same commands always produce the
//! same bytes.

use serde::{Deserialize, Serialize};

use crate::encoding::{prepare_field, to_windows_1252};

/// Barcode symbology
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbology {
    #[default]
    Code128,
    Code39,
}

/// Field block text alignment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justified,
}

impl Alignment {
    fn code(self) -> char {
        match self {
            Alignment::Left => 'L',
            Alignment::Center => 'C',
            Alignment::Right => 'R',
            Alignment::Justified => 'J',
        }
    }
}

/// QR error correction level (first character of the QR mode prefix)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCorrection {
    High,
    #[default]
    Quality,
    Medium,
    Low,
}

impl ErrorCorrection {
    fn code(self) -> char {
        match self {
            ErrorCorrection::High => 'H',
            ErrorCorrection::Quality => 'Q',
            ErrorCorrection::Medium => 'M',
            ErrorCorrection::Low => 'L',
        }
    }
}

/// Word-wrapping box for a text field (`^FB`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldBlock {
    pub width: u32,
    pub max_lines: u32,
    #[serde(default)]
    pub alignment: Alignment,
}

/// One label instruction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    /// Label home offset applied to every origin
    LabelHome { x: u32, y: u32 },
    /// Origin of the next field
    SetOrigin { x: u32, y: u32 },
    /// Narrow module width in dots for following barcodes
    SetBarcodeWidth { module_width: u32 },
    DrawBarcode {
        symbology: Symbology,
        height: u32,
        /// Print the interpretation line under the bars
        human_readable: bool,
        data: String,
    },
    DrawText {
        font_size: u32,
        text: String,
        block: Option<FieldBlock>,
    },
    DrawQr {
        data: String,
        /// Magnification factor 1..=10
        scale: u32,
        error_correction: ErrorCorrection,
    },
}

/// Target dialect
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandLanguage {
    /// ZPL with UTF-8 text passed through unchanged
    #[default]
    Zpl,
    /// ZPL with `^CI27` and text transcoded to Windows-1252
    #[serde(alias = "cp1252")]
    ZplWindows1252,
}

/// ZPL text builder
///
/// Emits one label bounded by `^XA` / `^XZ`. Every drawing instruction ends
/// its line and is followed by a `^FD...^FS` data line.
pub struct ZplBuilder {
    buf: String,
    language: CommandLanguage,
}

impl ZplBuilder {
    /// Start a new label (`^XA`)
    pub fn new(language: CommandLanguage) -> Self {
        let mut buf = String::with_capacity(1024);
        buf.push_str("^XA\n");
        if language == CommandLanguage::ZplWindows1252 {
            buf.push_str("^CI27\n");
        }
        Self { buf, language }
    }

    pub fn language(&self) -> CommandLanguage {
        self.language
    }

    // === Positioning ===

    /// `^LHx,y`
    pub fn label_home(&mut self, x: u32, y: u32) -> &mut Self {
        self.buf.push_str(&format!("^LH{},{}\n", x, y));
        self
    }

    /// `^FOx,y` (continues on the same line as the next instruction)
    pub fn origin(&mut self, x: u32, y: u32) -> &mut Self {
        self.buf.push_str(&format!("^FO{},{}", x, y));
        self
    }

    // === Barcodes ===

    /// `^BYn`
    pub fn barcode_width(&mut self, module_width: u32) -> &mut Self {
        self.buf.push_str(&format!("^BY{}\n", module_width));
        self
    }

    pub fn barcode(
        &mut self,
        symbology: Symbology,
        height: u32,
        human_readable: bool,
        data: &str,
    ) -> &mut Self {
        let hri = if human_readable { 'Y' } else { 'N' };
        match symbology {
            Symbology::Code128 => self.buf.push_str(&format!("^BCN,{},{},N,N\n", height, hri)),
            Symbology::Code39 => self.buf.push_str(&format!("^B3N,N,{},{},N\n", height, hri)),
        }
        self.field_data("", data, false)
    }

    /// QR code, model 2, with the `<ecc>A,` mode prefix
    pub fn qr(&mut self, data: &str, scale: u32, error_correction: ErrorCorrection) -> &mut Self {
        let scale = scale.clamp(1, 10);
        self.buf.push_str(&format!("^BQN,2,{}\n", scale));
        let prefix = format!("{}A,", error_correction.code());
        self.field_data(&prefix, data, false)
    }

    // === Text ===

    /// Scalable font 0 at `font_size` dots, optionally wrapped in a field block
    pub fn text(&mut self, font_size: u32, text: &str, block: Option<FieldBlock>) -> &mut Self {
        self.buf
            .push_str(&format!("^A0N,{},{}", font_size, font_size));
        if let Some(b) = block {
            self.buf.push_str(&format!(
                "^FB{},{},0,{},0",
                b.width,
                b.max_lines,
                b.alignment.code()
            ));
        }
        self.buf.push('\n');
        self.field_data("", text, block.is_some())
    }

    fn field_data(&mut self, prefix: &str, data: &str, in_block: bool) -> &mut Self {
        let field = prepare_field(data, in_block);
        if field.hex_escaped {
            self.buf.push_str("^FH");
        }
        self.buf.push_str("^FD");
        self.buf.push_str(prefix);
        self.buf.push_str(&field.text);
        self.buf.push_str("^FS\n");
        self
    }

    /// Apply one command
    pub fn command(&mut self, command: &Command) -> &mut Self {
        match command {
            Command::LabelHome { x, y } => self.label_home(*x, *y),
            Command::SetOrigin { x, y } => self.origin(*x, *y),
            Command::SetBarcodeWidth { module_width } => self.barcode_width(*module_width),
            Command::DrawBarcode {
                symbology,
                height,
                human_readable,
                data,
            } => self.barcode(*symbology, *height, *human_readable, data),
            Command::DrawText {
                font_size,
                text,
                block,
            } => self.text(*font_size, text, *block),
            Command::DrawQr {
                data,
                scale,
                error_correction,
            } => self.qr(data, *scale, *error_correction),
        }
    }

    /// Get the text accumulated so far (without the end marker)
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    // === Build ===

    /// Close the label (`^XZ`) and encode for the selected dialect
    pub fn build(mut self) -> Vec<u8> {
        self.buf.push_str("^XZ");
        match self.language {
            CommandLanguage::Zpl => self.buf.into_bytes(),
            CommandLanguage::ZplWindows1252 => to_windows_1252(&self.buf),
        }
    }
}

/// Serialize a command list into one self-contained label
pub fn render(commands: &[Command], language: CommandLanguage) -> Vec<u8> {
    let mut b = ZplBuilder::new(language);
    for command in commands {
        b.command(command);
    }
    b.build()
}
