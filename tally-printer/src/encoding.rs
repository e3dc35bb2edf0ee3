//! Field data encoding for ZPL printers
//!
//! Field data sits between `^FD` and `^FS`, so the command prefixes
//! `^` and `~` must never reach the printer raw. This module provides:
//! - Hex escaping for field data (`^FH` with the default `_` indicator)
//! - Control character cleanup, with `\&` line breaks inside field blocks
//! - Transcoding to Windows-1252 for printers set to `^CI27`

use tracing::instrument;

/// Hex escape indicator used with a bare `^FH`
pub const HEX_INDICATOR: char = '_';

/// ZPL line break token inside a `^FB` field block
pub const BLOCK_LINE_BREAK: &str = "\\&";

/// Whether the data would be parsed as commands if sent raw
pub fn needs_hex_escape(data: &str) -> bool {
    data.contains(['^', '~'])
}

/// Escape `_`, `^` and `~` as `_XX` hex pairs
pub fn hex_escape(data: &str) -> String {
    let mut out = String::with_capacity(data.len() + 8);
    for c in data.chars() {
        match c {
            '_' | '^' | '~' => {
                out.push(HEX_INDICATOR);
                out.push_str(&format!("{:02X}", c as u32));
            }
            _ => out.push(c),
        }
    }
    out
}

/// Replace control characters with spaces
///
/// Inside a field block a newline is kept as the ZPL `\&` break token and a
/// literal backslash is doubled, since the block reads `\` as escape.
pub fn sanitize_field(data: &str, in_block: bool) -> String {
    let normalized = data.replace("\r\n", "\n");
    let mut out = String::with_capacity(normalized.len());
    for c in normalized.chars() {
        match c {
            '\n' if in_block => out.push_str(BLOCK_LINE_BREAK),
            '\\' if in_block => out.push_str("\\\\"),
            c if c.is_control() => out.push(' '),
            c => out.push(c),
        }
    }
    out
}

/// Prepared field data: the text to place after `^FD` and whether `^FH` is required
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldData {
    pub hex_escaped: bool,
    pub text: String,
}

/// Clean and, if necessary, hex escape a field's data
pub fn prepare_field(data: &str, in_block: bool) -> FieldData {
    let clean = sanitize_field(data, in_block);
    if needs_hex_escape(&clean) {
        FieldData {
            hex_escaped: true,
            text: hex_escape(&clean),
        }
    } else {
        FieldData {
            hex_escaped: false,
            text: clean,
        }
    }
}

/// Transcode UTF-8 text to Windows-1252
///
/// Characters outside the code page become `?` so the label layout keeps
/// one glyph per character.
#[instrument(skip(s), fields(len = s.len()))]
pub fn to_windows_1252(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len());
    let mut tmp = [0u8; 4];
    for c in s.chars() {
        if c.is_ascii() {
            out.push(c as u8);
            continue;
        }
        let (bytes, _, had_errors) = encoding_rs::WINDOWS_1252.encode(c.encode_utf8(&mut tmp));
        if had_errors || bytes.len() != 1 {
            out.push(b'?');
        } else {
            out.extend_from_slice(&bytes);
        }
    }
    out
}
