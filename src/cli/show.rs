use std::io::Write;

use colored::Colorize;
use serde::Serialize;

use crate::cli::text::printable;
use crate::cli::{print_field_table, write_json, wprintln};
use crate::segy::binary_header::FieldEntry;
use crate::segy::constants::PAYLOAD_OFFSET;
use crate::segy::file::SegyFile;
use crate::SegyError;

/// Options for the `segyhdr show` subcommand.
pub struct ShowOptions {
    /// Path to the SEG-Y file.
    pub file: String,
    /// Emit output as JSON.
    pub json: bool,
}

#[derive(Serialize)]
struct ShowJson<'a> {
    file: &'a str,
    file_size: u64,
    payload_bytes: u64,
    textual_header: &'a [String],
    binary_header: Vec<FieldEntry<'a>>,
}

/// Print both file headers: the 40 textual lines, then every binary header
/// field with its absolute byte range.
///
/// Both headers are decoded before anything is printed, so a bad sentinel
/// produces an error and no partial report.
pub fn execute(opts: &ShowOptions, writer: &mut dyn Write) -> Result<(), SegyError> {
    let segy = SegyFile::open(&opts.file)?;
    let text = segy.textual_header()?;
    let header = segy.binary_header()?;

    if opts.json {
        return write_json(
            writer,
            &ShowJson {
                file: &opts.file,
                file_size: segy.file_size(),
                payload_bytes: segy.payload().len() as u64,
                textual_header: text.lines(),
                binary_header: header.entries(),
            },
        );
    }

    wprintln!(writer, "{}", "Textual File Header".bold())?;
    wprintln!(writer, "{}", "-".repeat(80))?;
    for line in text.lines() {
        wprintln!(writer, "{}", printable(line))?;
    }
    wprintln!(writer)?;

    wprintln!(writer, "{}", "Binary File Header".bold())?;
    wprintln!(writer, "{}", "-".repeat(80))?;
    print_field_table(writer, &header.entries())?;
    wprintln!(writer)?;

    wprintln!(
        writer,
        "Trace data: {} bytes starting at offset {}",
        segy.payload().len(),
        PAYLOAD_OFFSET
    )?;
    Ok(())
}
