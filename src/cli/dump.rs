use std::io::Write;

use crate::cli::wprintln;
use crate::segy::constants::BINARY_HEADER_OFFSET;
use crate::segy::file::SegyFile;
use crate::segy::schema::HeaderSchema;
use crate::util::hex::{format_offset, hex_dump};
use crate::SegyError;

/// Options for the `segyhdr dump` subcommand.
pub struct DumpOptions {
    /// Path to the SEG-Y file.
    pub file: String,
    /// Dump only this binary header field.
    pub field: Option<String>,
    /// Write raw bytes instead of a formatted dump.
    pub raw: bool,
}

/// Hex dump the binary header bytes, or the slot of a single field.
///
/// Works from the raw bytes, so a header that fails the sentinel check can
/// still be inspected.
pub fn execute(opts: &DumpOptions, writer: &mut dyn Write) -> Result<(), SegyError> {
    let segy = SegyFile::open(&opts.file)?;
    let bytes = segy.binary_bytes();

    let (label, start, end) = match opts.field {
        Some(ref name) => {
            let (start, end) = HeaderSchema::binary().offset_of(name).ok_or_else(|| {
                SegyError::Argument(format!("Unknown binary header field: {}", name))
            })?;
            (format!("field {}", name), start, end)
        }
        None => ("binary header".to_string(), 0, bytes.len()),
    };
    let data = &bytes[start..end];

    if opts.raw {
        return writer
            .write_all(data)
            .map_err(|e| SegyError::Io(format!("Cannot write to stdout: {}", e)));
    }

    let abs_start = (BINARY_HEADER_OFFSET + start) as u64;
    wprintln!(
        writer,
        "Hex dump of {} {} at offset {} ({} bytes):",
        opts.file,
        label,
        format_offset(abs_start),
        data.len()
    )?;
    wprintln!(writer)?;
    wprintln!(writer, "{}", hex_dump(data, abs_start))?;
    Ok(())
}
