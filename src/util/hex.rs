//! Hex formatting utilities.
//!
//! Helpers for formatting file offsets and header values, and for producing
//! hex dumps of header bytes with absolute offsets and an ASCII sidebar.

use std::fmt::Write;

/// Format a byte offset as "decimal (0xhex)".
pub fn format_offset(offset: u64) -> String {
    format!("{} (0x{:x})", offset, offset)
}

/// Format a u32 value as hex with 0x prefix.
pub fn format_hex32(value: u32) -> String {
    format!("0x{:08x}", value)
}

/// Format bytes as a compact hex string (e.g., "4a2f00ff").
pub fn format_bytes(data: &[u8]) -> String {
    let mut s = String::with_capacity(data.len() * 2);
    for b in data {
        let _ = write!(s, "{:02x}", b);
    }
    s
}

/// Produce a hex dump of `data`, labelling rows from `base_offset`.
///
/// Output format (16 bytes per row):
/// ```text
/// 00000c80  xx xx xx xx xx xx xx xx  xx xx xx xx xx xx xx xx  |................|
/// ```
/// Bytes outside printable ASCII are shown as `.` in the sidebar. Header
/// bytes are EBCDIC or binary, so the sidebar is a layout aid only.
pub fn hex_dump(data: &[u8], base_offset: u64) -> String {
    data.chunks(16)
        .enumerate()
        .map(|(row, chunk)| {
            let mut line = format!("{:08x}  ", base_offset + (row * 16) as u64);
            for col in 0..16 {
                if col == 8 {
                    line.push(' ');
                }
                match chunk.get(col) {
                    Some(b) => {
                        let _ = write!(line, "{:02x} ", b);
                    }
                    None => line.push_str("   "),
                }
            }
            let ascii: String = chunk
                .iter()
                .map(|&b| {
                    if b.is_ascii_graphic() || b == b' ' {
                        b as char
                    } else {
                        '.'
                    }
                })
                .collect();
            let _ = write!(line, " |{:<16}|", ascii);
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}
