/// SEG-Y file layout constants.
///
/// Offsets are absolute file positions unless noted otherwise. Values follow
/// the SEG-Y rev 1/rev 2 file header layout.
// Textual file header (3200 bytes, EBCDIC)
pub const TEXTUAL_HEADER_SIZE: usize = 3200;
pub const TEXTUAL_HEADER_OFFSET: usize = 0;
pub const TEXTUAL_LINE_COUNT: usize = 40;
pub const TEXTUAL_LINE_WIDTH: usize = 80;

// Binary file header (400 bytes, big-endian)
pub const BINARY_HEADER_SIZE: usize = 400;
pub const BINARY_HEADER_OFFSET: usize = TEXTUAL_HEADER_OFFSET + TEXTUAL_HEADER_SIZE; // 3200

// Trace data starts immediately after the binary header
pub const PAYLOAD_OFFSET: usize = BINARY_HEADER_OFFSET + BINARY_HEADER_SIZE; // 3600

// Byte-order sentinel (binary header bytes 96-99)
pub const SENTINEL_FIELD: &str = "int_constant";
pub const SENTINEL_VALUE: u32 = 0x0102_0304;

// Last field of the short (pre rev 1) header form
pub const LEGACY_TERMINATOR_FIELD: &str = "format_code";

/// Human-readable name for a data sample format code (binary header bytes 24-25).
///
/// Display only; unknown codes are reported rather than rejected.
pub fn format_code_name(code: u16) -> &'static str {
    match code {
        1 => "4-byte IBM floating-point",
        2 => "4-byte two's complement integer",
        3 => "2-byte two's complement integer",
        4 => "4-byte fixed-point with gain (obsolete)",
        5 => "4-byte IEEE floating-point",
        6 => "8-byte IEEE floating-point",
        7 => "3-byte two's complement integer",
        8 => "1-byte two's complement integer",
        9 => "8-byte two's complement integer",
        10 => "4-byte unsigned integer",
        11 => "2-byte unsigned integer",
        12 => "8-byte unsigned integer",
        15 => "3-byte unsigned integer",
        16 => "1-byte unsigned integer",
        _ => "Unknown",
    }
}
