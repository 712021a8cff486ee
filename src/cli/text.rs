use std::io::Write;

use serde::Serialize;

use crate::cli::{write_json, wprintln};
use crate::segy::file::SegyFile;
use crate::SegyError;

/// Options for the `segyhdr text` subcommand.
pub struct TextOptions {
    /// Path to the SEG-Y file.
    pub file: String,
    /// Prefix each line with its line number.
    pub numbered: bool,
    /// Emit output as JSON.
    pub json: bool,
}

#[derive(Serialize)]
struct TextJson<'a> {
    file: &'a str,
    lines: &'a [String],
}

/// Decode the EBCDIC textual header and print its 40 lines.
pub fn execute(opts: &TextOptions, writer: &mut dyn Write) -> Result<(), SegyError> {
    let segy = SegyFile::open(&opts.file)?;
    let text = segy.textual_header()?;

    if opts.json {
        return write_json(
            writer,
            &TextJson {
                file: &opts.file,
                lines: text.lines(),
            },
        );
    }

    for (i, line) in text.lines().iter().enumerate() {
        if opts.numbered {
            wprintln!(writer, "{:>2}: {}", i + 1, printable(line))?;
        } else {
            wprintln!(writer, "{}", printable(line))?;
        }
    }
    Ok(())
}

/// Replace control characters so stray EBCDIC control bytes cannot garble
/// the terminal.
pub(crate) fn printable(line: &str) -> String {
    line.chars()
        .map(|c| if c.is_control() { '.' } else { c })
        .collect()
}
