//! CLI subcommand implementations for the `segyhdr` binary.
//!
//! CLI argument parsing uses clap derive macros, with the top-level
//! [`app::Cli`] struct and [`app::Commands`] enum defined in [`app`] and
//! shared between `main.rs` and `build.rs` (for man page generation) via
//! `include!()`.
//!
//! Each subcommand module follows the same pattern: an `Options` struct holding
//! the parsed arguments and a `pub fn execute(opts, writer) -> Result<(), SegyError>`
//! entry point. The `writer: &mut dyn Write` parameter allows output to be
//! captured in tests or redirected to a file via the global `--output` flag.
//!
//! # Subcommands
//!
//! | Command | Module | Purpose |
//! |---------|--------|---------|
//! | `segyhdr show` | [`show`] | Textual header lines followed by the binary header field table |
//! | `segyhdr text` | [`text`] | The 40 decoded textual header lines |
//! | `segyhdr header` | [`header`] | Binary header fields with absolute byte ranges |
//! | `segyhdr info` | [`info`] | Revision, sample format, sample interval, segment sizes |
//! | `segyhdr dump` | [`dump`] | Hex dump of the binary header or a single field |
//! | `segyhdr set` | [`set`] | Patch binary header fields and write a new file |
//!
//! Read-only subcommands accept `--json`. The `wprintln!` macro
//! wraps `writeln!` to convert `io::Error` into `SegyError`.

pub mod app;
pub mod dump;
pub mod header;
pub mod info;
pub mod set;
pub mod show;
pub mod text;

/// Write a line to the given writer, converting io::Error to SegyError.
macro_rules! wprintln {
    ($w:expr) => {
        writeln!($w).map_err(|e| $crate::SegyError::Io(e.to_string()))
    };
    ($w:expr, $($arg:tt)*) => {
        writeln!($w, $($arg)*).map_err(|e| $crate::SegyError::Io(e.to_string()))
    };
}

pub(crate) use wprintln;

use std::io::Write;

use colored::Colorize;

use crate::segy::binary_header::FieldEntry;
use crate::SegyError;

/// Serialize `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: serde::Serialize>(
    writer: &mut dyn Write,
    value: &T,
) -> Result<(), SegyError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| SegyError::Parse(format!("JSON serialization error: {}", e)))?;
    wprintln!(writer, "{}", json)
}

/// Print binary header entries as `[start..end) name type : value` rows.
pub(crate) fn print_field_table(
    writer: &mut dyn Write,
    entries: &[FieldEntry<'_>],
) -> Result<(), SegyError> {
    for entry in entries {
        let range = format!("{:<13}", format!("[{}..{})", entry.start, entry.end));
        wprintln!(
            writer,
            "{} {:<35} {:<11}: {}",
            range.dimmed(),
            entry.name,
            entry.field_type,
            entry.value
        )?;
    }
    Ok(())
}
