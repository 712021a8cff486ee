//! SEG-Y file header toolkit.
//!
//! The `segy-utils` crate (library name `segy`) decodes and re-encodes the
//! fixed-layout file headers of SEG-Y seismic data files: the 3200-byte
//! EBCDIC textual header and the 400-byte big-endian binary header. The trace
//! data that follows is treated as an opaque payload and passed through
//! byte-for-byte.
//!
//! # CLI Reference
//!
//! Install the `segyhdr` binary and use its subcommands to inspect or patch
//! SEG-Y file headers from the command line.
//!
//! ```text
//! cargo install segy-utils
//! ```
//!
//! | Command | Purpose |
//! |---------|---------|
//! | [`segyhdr show`](cli::app::Commands::Show) | Print the textual header lines and every binary header field |
//! | [`segyhdr text`](cli::app::Commands::Text) | Print the 40 textual header lines |
//! | [`segyhdr header`](cli::app::Commands::Header) | Print binary header fields with absolute byte ranges |
//! | [`segyhdr info`](cli::app::Commands::Info) | Summarize revision, sample format, and sizes |
//! | [`segyhdr dump`](cli::app::Commands::Dump) | Hex dump of the binary header or a single field |
//! | [`segyhdr set`](cli::app::Commands::Set) | Assign binary header fields and write a new file |
//!
//! All subcommands accept `--color <auto|always|never>` and `--output <file>`.
//! `set` also honors `--audit-log <file>`.
//!
//! # Library API
//!
//! ```no_run
//! use segy::segy::file::SegyFile;
//!
//! let file = SegyFile::open("line_042.sgy").unwrap();
//!
//! let text = file.textual_header().unwrap();
//! println!("{}", text.lines()[0]);
//!
//! let mut header = file.binary_header().unwrap();
//! header.set_uint("nr_of_extensions", 16).unwrap();
//! file.write("line_042_patched.sgy", &header).unwrap();
//! ```
//!
//! ## Module overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`segy::schema`] | Ordered binary header field table and layout queries |
//! | [`segy::binary_header`] | Table-driven decode/encode of the binary header |
//! | [`segy::textual_header`] | EBCDIC textual header decoding into 40 × 80 lines |
//! | [`segy::ebcdic`] | Code page 1141 byte/char mapping |
//! | [`segy::file`] | Whole-file split into header and payload segments, atomic write |
//! | [`segy::constants`] | Layout sizes, offsets, and the byte-order sentinel |
//!
//! ## Feature flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli` | on | Builds the `segyhdr` binary and its dependencies (`clap`, `colored`, `chrono`, `fs2`). |

#[cfg(feature = "cli")]
pub mod cli;
pub mod segy;
pub mod util;

use thiserror::Error;

/// Errors returned by `segy` operations.
#[derive(Error, Debug)]
pub enum SegyError {
    /// An I/O error occurred (file open, read, write, or rename failure).
    #[error("I/O error: {0}")]
    Io(String),

    /// A parse error occurred (truncated file or malformed value text).
    #[error("Parse error: {0}")]
    Parse(String),

    /// An invalid argument was supplied (unknown field name, bad option, etc.).
    #[error("Invalid argument: {0}")]
    Argument(String),

    /// A header buffer does not have the exact size its codec requires.
    #[error("Length mismatch: {what} is {actual} bytes, expected {expected}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The byte-order sentinel did not decode to `0x01020304`.
    #[error("Wrong endianness: int_constant is 0x{found:08x}, expected 0x01020304")]
    EndiannessMismatch { found: u32 },

    /// A value could not be packed into its schema slot.
    #[error("Cannot encode field {field}: {reason}")]
    EncodeField { field: String, reason: String },
}
