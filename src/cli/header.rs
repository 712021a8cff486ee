use std::io::Write;

use colored::Colorize;
use serde::Serialize;

use crate::cli::{print_field_table, write_json, wprintln};
use crate::segy::binary_header::{self, FieldEntry};
use crate::segy::constants::BINARY_HEADER_OFFSET;
use crate::segy::file::SegyFile;
use crate::segy::schema::HeaderSchema;
use crate::SegyError;

/// Options for the `segyhdr header` subcommand.
pub struct HeaderOptions {
    /// Path to the SEG-Y file.
    pub file: String,
    /// Restrict output to a single field.
    pub field: Option<String>,
    /// Decode only the short-form prefix of the binary header.
    pub legacy: bool,
    /// Emit output as JSON.
    pub json: bool,
}

#[derive(Serialize)]
struct HeaderJson<'a> {
    file: &'a str,
    schema: &'static str,
    fields: Vec<FieldEntry<'a>>,
}

/// Decode the binary file header and print each field with its byte range.
///
/// With `--legacy` only the fields preceding `format_code` are decoded. That
/// prefix carries no byte-order sentinel, so no endianness check is made.
pub fn execute(opts: &HeaderOptions, writer: &mut dyn Write) -> Result<(), SegyError> {
    let segy = SegyFile::open(&opts.file)?;

    let (schema, schema_name) = if opts.legacy {
        (HeaderSchema::legacy(), "legacy")
    } else {
        (HeaderSchema::binary(), "binary")
    };
    let bytes = &segy.binary_bytes()[..schema.total_len()];
    let header = binary_header::decode(bytes, schema, BINARY_HEADER_OFFSET as u64)?;

    let mut entries = header.entries();
    if let Some(ref name) = opts.field {
        entries.retain(|e| e.name == name.as_str());
        if entries.is_empty() {
            return Err(SegyError::Argument(format!(
                "Unknown {} header field: {}",
                schema_name, name
            )));
        }
    }

    if opts.json {
        return write_json(
            writer,
            &HeaderJson {
                file: &opts.file,
                schema: schema_name,
                fields: entries,
            },
        );
    }

    if opts.field.is_none() {
        wprintln!(
            writer,
            "{} ({} fields, {} bytes)",
            format!("Binary header of {}", opts.file).bold(),
            schema.len(),
            schema.total_len()
        )?;
        wprintln!(writer, "{}", "-".repeat(70))?;
    }
    print_field_table(writer, &entries)
}
