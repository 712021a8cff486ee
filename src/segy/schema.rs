//! Binary file header field layout.
//!
//! The 400-byte binary header is described by a single ordered table of
//! [`FieldDescriptor`]s ([`BINARY_HEADER_FIELDS`]). Byte offsets are never
//! written down: they fall out of walking the table and summing field widths,
//! so adding or removing a field only means editing the table.
//!
//! The short header form used by pre rev 1 writers is not a second table. It
//! is the prefix of the canonical table up to (not including) `format_code`,
//! exposed as [`HeaderSchema::legacy`].

use serde::Serialize;
use std::fmt;

use crate::segy::constants::LEGACY_TERMINATOR_FIELD;

/// Storage type of a single binary header field.
///
/// All integers are unsigned and big-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FieldType {
    U8,
    U16,
    U32,
    U64,
    /// Fixed-length byte string, passed through uninterpreted.
    Bytes(usize),
}

impl FieldType {
    /// Width of the field in bytes.
    pub const fn byte_len(self) -> usize {
        match self {
            FieldType::U8 => 1,
            FieldType::U16 => 2,
            FieldType::U32 => 4,
            FieldType::U64 => 8,
            FieldType::Bytes(n) => n,
        }
    }

    /// Largest value an integer field can hold, or `None` for byte strings.
    pub fn max_uint(self) -> Option<u64> {
        match self {
            FieldType::U8 => Some(u8::MAX as u64),
            FieldType::U16 => Some(u16::MAX as u64),
            FieldType::U32 => Some(u32::MAX as u64),
            FieldType::U64 => Some(u64::MAX),
            FieldType::Bytes(_) => None,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::U8 => write!(f, "u8"),
            FieldType::U16 => write!(f, "u16"),
            FieldType::U32 => write!(f, "u32"),
            FieldType::U64 => write!(f, "u64"),
            FieldType::Bytes(n) => write!(f, "bytes[{}]", n),
        }
    }
}

/// A named, typed slot in a header layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub field_type: FieldType,
}

impl FieldDescriptor {
    const fn new(name: &'static str, field_type: FieldType) -> Self {
        FieldDescriptor { name, field_type }
    }

    /// Width of the field in bytes.
    pub const fn byte_len(&self) -> usize {
        self.field_type.byte_len()
    }
}

use FieldType::{Bytes, U16, U32, U64, U8};

/// Canonical SEG-Y binary file header layout (400 bytes, 47 fields).
pub static BINARY_HEADER_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("job_nr", U32),
    FieldDescriptor::new("line_nr", U32),
    FieldDescriptor::new("reel_nr", U32),
    FieldDescriptor::new("nr_of_traces", U16),
    FieldDescriptor::new("nr_of_aux", U16),
    FieldDescriptor::new("sample_int_1", U16),
    FieldDescriptor::new("sample_int_2", U16),
    FieldDescriptor::new("nr_samples_per_trace", U16),
    FieldDescriptor::new("nr_samples_per_data_trace", U16),
    FieldDescriptor::new("format_code", U16),
    FieldDescriptor::new("ensemble_fold", U16),
    FieldDescriptor::new("trace_sorting_code", U16),
    FieldDescriptor::new("vertical_sum_code", U16),
    FieldDescriptor::new("sweep_freq_start", U16),
    FieldDescriptor::new("sweep_freq_end", U16),
    FieldDescriptor::new("sweep_freq_length", U16),
    FieldDescriptor::new("sweep_type_code", U16),
    FieldDescriptor::new("trace_nr", U16),
    FieldDescriptor::new("sweep_trace_taper_start", U16),
    FieldDescriptor::new("sweep_trace_taper_end", U16),
    FieldDescriptor::new("taper_type", U16),
    FieldDescriptor::new("correlated_trace", U16),
    FieldDescriptor::new("binary_gain_recovered", U16),
    FieldDescriptor::new("amp_recover_method", U16),
    FieldDescriptor::new("measurement_system", U16),
    FieldDescriptor::new("impulse_signal_polarity", U16),
    FieldDescriptor::new("vib_polarity_code", U16),
    FieldDescriptor::new("ext_nr_data_traces_pr_ensemble", U32),
    FieldDescriptor::new("ext_nr_aux_traces_pr_ensemble", U32),
    FieldDescriptor::new("ext_nr_sample_pr_data_trace", U32),
    FieldDescriptor::new("ext_sample_interval_IEEE", U64),
    FieldDescriptor::new("ext_sample_interval_original_IEEE", U64),
    FieldDescriptor::new("ext_sample_interval_original", U32),
    FieldDescriptor::new("ext_ensemble_fold", U32),
    FieldDescriptor::new("int_constant", U32),
    FieldDescriptor::new("unassigned_1", Bytes(200)),
    FieldDescriptor::new("major_ver", U8),
    FieldDescriptor::new("min_ver", U8),
    FieldDescriptor::new("trace_flag", U16),
    FieldDescriptor::new("nr_of_extensions", U16),
    FieldDescriptor::new("max_trace_headers", U16),
    FieldDescriptor::new("survey_type", U16),
    FieldDescriptor::new("time_code", U64),
    FieldDescriptor::new("ext_nr_of_traces", U64),
    FieldDescriptor::new("bytes_offset", U32),
    FieldDescriptor::new("nr_data_trailer", U32),
    FieldDescriptor::new("unassigned_2", Bytes(66)),
];

/// An ordered header layout backed by a static descriptor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderSchema {
    fields: &'static [FieldDescriptor],
}

impl HeaderSchema {
    /// Wrap an arbitrary static descriptor table.
    pub const fn new(fields: &'static [FieldDescriptor]) -> Self {
        HeaderSchema { fields }
    }

    /// The canonical 400-byte binary file header.
    pub fn binary() -> Self {
        HeaderSchema::new(BINARY_HEADER_FIELDS)
    }

    /// The short header form: every canonical field before `format_code`.
    pub fn legacy() -> Self {
        let k = BINARY_HEADER_FIELDS
            .iter()
            .position(|f| f.name == LEGACY_TERMINATOR_FIELD)
            .unwrap_or(BINARY_HEADER_FIELDS.len());
        HeaderSchema::new(&BINARY_HEADER_FIELDS[..k])
    }

    /// Descriptors in layout order.
    pub fn fields(&self) -> &'static [FieldDescriptor] {
        self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Sum of all field widths.
    pub fn total_len(&self) -> usize {
        self.fields.iter().map(FieldDescriptor::byte_len).sum()
    }

    /// Look up a descriptor by name.
    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Local `(start, end)` byte range of a field within the header.
    pub fn offset_of(&self, name: &str) -> Option<(usize, usize)> {
        let mut pos = 0;
        for f in self.fields {
            let end = pos + f.byte_len();
            if f.name == name {
                return Some((pos, end));
            }
            pos = end;
        }
        None
    }

    /// Iterate `(descriptor, start, end)` with local offsets, in layout order.
    pub fn layout(&self) -> impl Iterator<Item = (&'static FieldDescriptor, usize, usize)> {
        self.fields.iter().scan(0usize, |pos, f| {
            let start = *pos;
            *pos += f.byte_len();
            Some((f, start, *pos))
        })
    }
}

impl Default for HeaderSchema {
    fn default() -> Self {
        HeaderSchema::binary()
    }
}
