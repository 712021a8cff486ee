use std::io::Write;

use colored::Colorize;
use serde::Serialize;

use crate::cli::text::printable;
use crate::cli::{write_json, wprintln};
use crate::segy::binary_header::BinaryHeader;
use crate::segy::constants::{format_code_name, SENTINEL_VALUE};
use crate::segy::file::SegyFile;
use crate::util::hex::format_hex32;
use crate::SegyError;

/// Options for the `segyhdr info` subcommand.
pub struct InfoOptions {
    /// Path to the SEG-Y file.
    pub file: String,
    /// Emit output as JSON.
    pub json: bool,
}

/// Header summary, shared by text and JSON output.
#[derive(Debug, Serialize)]
pub struct InfoReport {
    pub file: String,
    pub file_size: u64,
    pub payload_bytes: u64,
    pub revision: String,
    pub format_code: u16,
    pub format_name: &'static str,
    pub sample_interval_us: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext_sample_interval: Option<f64>,
    pub samples_per_trace: u16,
    pub data_traces_per_ensemble: u16,
    pub ext_nr_of_traces: u64,
    pub nr_of_extensions: u16,
    pub byte_order_sentinel: String,
    pub first_text_line: String,
}

impl InfoReport {
    fn build(file: &str, segy: &SegyFile, header: &BinaryHeader, first_line: &str) -> Self {
        let u16_of = |name: &str| header.get_uint(name).unwrap_or(0) as u16;

        let major = header.get_uint("major_ver").unwrap_or(0);
        let minor = header.get_uint("min_ver").unwrap_or(0);
        let format_code = u16_of("format_code");

        // The IEEE interval fields hold the bit pattern of an f64; zero means unset.
        let ext_sample_interval = header
            .get_uint("ext_sample_interval_IEEE")
            .filter(|&bits| bits != 0)
            .map(f64::from_bits);

        InfoReport {
            file: file.to_string(),
            file_size: segy.file_size(),
            payload_bytes: segy.payload().len() as u64,
            revision: format!("{}.{}", major, minor),
            format_code,
            format_name: format_code_name(format_code),
            sample_interval_us: u16_of("sample_int_1"),
            ext_sample_interval,
            samples_per_trace: u16_of("nr_samples_per_trace"),
            data_traces_per_ensemble: u16_of("nr_of_traces"),
            ext_nr_of_traces: header.get_uint("ext_nr_of_traces").unwrap_or(0),
            nr_of_extensions: u16_of("nr_of_extensions"),
            byte_order_sentinel: format_hex32(SENTINEL_VALUE),
            first_text_line: printable(first_line.trim_end()),
        }
    }
}

/// Summarize a SEG-Y file's headers.
///
/// Decoding the binary header verifies the byte-order sentinel, so reaching
/// the report means the sentinel matched.
pub fn execute(opts: &InfoOptions, writer: &mut dyn Write) -> Result<(), SegyError> {
    let segy = SegyFile::open(&opts.file)?;
    let text = segy.textual_header()?;
    let header = segy.binary_header()?;
    let first_line = text.lines().first().map(String::as_str).unwrap_or("");

    let report = InfoReport::build(&opts.file, &segy, &header, first_line);

    if opts.json {
        return write_json(writer, &report);
    }

    wprintln!(writer, "{}", format!("SEG-Y file: {}", report.file).bold())?;
    wprintln!(writer, "  File size:           {} bytes", report.file_size)?;
    wprintln!(writer, "  Trace data:          {} bytes", report.payload_bytes)?;
    wprintln!(writer, "  Revision:            {}", report.revision)?;
    wprintln!(
        writer,
        "  Sample format:       {} ({})",
        report.format_code, report.format_name
    )?;
    wprintln!(writer, "  Sample interval:     {} us", report.sample_interval_us)?;
    if let Some(interval) = report.ext_sample_interval {
        wprintln!(writer, "  Ext sample interval: {}", interval)?;
    }
    wprintln!(writer, "  Samples per trace:   {}", report.samples_per_trace)?;
    wprintln!(writer, "  Traces per ensemble: {}", report.data_traces_per_ensemble)?;
    wprintln!(writer, "  Ext trace count:     {}", report.ext_nr_of_traces)?;
    wprintln!(writer, "  Extended headers:    {}", report.nr_of_extensions)?;
    wprintln!(
        writer,
        "  Byte order:          big-endian ({} {})",
        report.byte_order_sentinel,
        "ok".green()
    )?;
    wprintln!(writer, "  Text line 1:         {}", report.first_text_line)?;
    Ok(())
}
