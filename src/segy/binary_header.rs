//! SEG-Y binary file header codec.
//!
//! [`decode`] walks a [`HeaderSchema`] over a byte buffer and produces a
//! [`BinaryHeader`]: a name → [`FieldValue`] mapping plus the absolute byte
//! range of every field. [`encode`] walks the same schema in the same order to
//! pack a value mapping back into bytes. Integers are big-endian; byte-string
//! fields are copied through untouched, so decoding then encoding without
//! mutation reproduces the input exactly.
//!
//! The only semantic check is the `int_constant` sentinel, which must read
//! `0x01020304`. Anything else means the header was written with a different
//! byte order, or is not a SEG-Y binary header at all.
//!
//! The value mapping belongs to the caller after decoding. Use
//! [`BinaryHeader::set`] / [`BinaryHeader::set_uint`] for checked updates, or
//! [`BinaryHeader::values_mut`] for raw access (encode re-validates).

use std::collections::HashMap;
use std::fmt;

use byteorder::{BigEndian, ByteOrder};
use serde::{Serialize, Serializer};

use crate::segy::constants::{BINARY_HEADER_OFFSET, SENTINEL_FIELD, SENTINEL_VALUE};
use crate::segy::schema::{FieldDescriptor, FieldType, HeaderSchema};
use crate::util::hex::format_bytes;
use crate::SegyError;

/// A decoded binary header field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Bytes(Vec<u8>),
}

impl FieldValue {
    /// Build an integer value of the given field type, if `value` fits.
    pub fn from_uint(field_type: FieldType, value: u64) -> Option<FieldValue> {
        match field_type {
            FieldType::U8 => u8::try_from(value).ok().map(FieldValue::U8),
            FieldType::U16 => u16::try_from(value).ok().map(FieldValue::U16),
            FieldType::U32 => u32::try_from(value).ok().map(FieldValue::U32),
            FieldType::U64 => Some(FieldValue::U64(value)),
            FieldType::Bytes(_) => None,
        }
    }

    /// Integer value widened to `u64`, or `None` for byte strings.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            FieldValue::U8(v) => Some(*v as u64),
            FieldValue::U16(v) => Some(*v as u64),
            FieldValue::U32(v) => Some(*v as u64),
            FieldValue::U64(v) => Some(*v),
            FieldValue::Bytes(_) => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            FieldValue::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Short type label, in the same notation as [`FieldType`]'s `Display`.
    pub fn type_name(&self) -> String {
        match self {
            FieldValue::U8(_) => "u8".to_string(),
            FieldValue::U16(_) => "u16".to_string(),
            FieldValue::U32(_) => "u32".to_string(),
            FieldValue::U64(_) => "u64".to_string(),
            FieldValue::Bytes(b) => format!("bytes[{}]", b.len()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::U8(v) => write!(f, "{}", v),
            FieldValue::U16(v) => write!(f, "{}", v),
            FieldValue::U32(v) => write!(f, "{}", v),
            FieldValue::U64(v) => write!(f, "{}", v),
            FieldValue::Bytes(b) if b.iter().all(|&x| x == 0) => {
                write!(f, "<{} zero bytes>", b.len())
            }
            FieldValue::Bytes(b) => write!(f, "{}", format_bytes(b)),
        }
    }
}

// Integers as JSON numbers, byte strings as compact hex.
impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Bytes(b) => serializer.serialize_str(&format_bytes(b)),
            other => serializer.serialize_u64(other.as_u64().unwrap_or_default()),
        }
    }
}

/// Absolute byte range `[start, end)` of a field in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldOffset {
    pub start: u64,
    pub end: u64,
}

impl FieldOffset {
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Field name → value mapping produced by [`decode`] and consumed by [`encode`].
pub type FieldValues = HashMap<&'static str, FieldValue>;

/// One row of the diagnostic field report, in schema order.
#[derive(Debug, Clone, Serialize)]
pub struct FieldEntry<'a> {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub field_type: String,
    pub start: u64,
    pub end: u64,
    pub value: &'a FieldValue,
}

/// A decoded binary file header.
#[derive(Debug, Clone)]
pub struct BinaryHeader {
    schema: HeaderSchema,
    values: FieldValues,
    offsets: HashMap<&'static str, FieldOffset>,
}

impl BinaryHeader {
    /// Decode a 400-byte binary header located at file offset 3200.
    pub fn parse(data: &[u8]) -> Result<Self, SegyError> {
        decode(data, HeaderSchema::binary(), BINARY_HEADER_OFFSET as u64)
    }

    pub fn schema(&self) -> HeaderSchema {
        self.schema
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    /// Raw mutable access to the value mapping.
    ///
    /// No checks are applied here; a missing or mistyped value surfaces as
    /// [`SegyError::EncodeField`] from [`BinaryHeader::encode`].
    pub fn values_mut(&mut self) -> &mut FieldValues {
        &mut self.values
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Integer value of a field widened to `u64`.
    pub fn get_uint(&self, name: &str) -> Option<u64> {
        self.get(name).and_then(FieldValue::as_u64)
    }

    /// Absolute byte range of a field.
    pub fn offset(&self, name: &str) -> Option<FieldOffset> {
        self.offsets.get(name).copied()
    }

    /// Replace a field value after checking it against the schema slot.
    ///
    /// Returns the previous value.
    pub fn set(&mut self, name: &str, value: FieldValue) -> Result<Option<FieldValue>, SegyError> {
        let desc = self.descriptor(name)?;
        check_value(desc, &value)?;
        Ok(self.values.insert(desc.name, value))
    }

    /// Set an integer field, rejecting values that do not fit its width.
    pub fn set_uint(&mut self, name: &str, value: u64) -> Result<Option<FieldValue>, SegyError> {
        let desc = self.descriptor(name)?;
        let v = FieldValue::from_uint(desc.field_type, value).ok_or_else(|| {
            SegyError::EncodeField {
                field: desc.name.to_string(),
                reason: match desc.field_type {
                    FieldType::Bytes(_) => "byte-string field cannot hold an integer".to_string(),
                    ty => format!("value {} out of range for {}", value, ty),
                },
            }
        })?;
        self.set(desc.name, v)
    }

    /// Set a field from text.
    ///
    /// Integer fields accept decimal or `0x`-prefixed hex. Byte-string fields
    /// accept `0x`-prefixed hex covering the full field width.
    pub fn set_from_str(
        &mut self,
        name: &str,
        text: &str,
    ) -> Result<Option<FieldValue>, SegyError> {
        let desc = self.descriptor(name)?;
        match desc.field_type {
            FieldType::Bytes(_) => {
                let bytes = parse_hex_bytes(text)?;
                self.set(desc.name, FieldValue::Bytes(bytes))
            }
            _ => {
                let value = parse_uint(text)?;
                self.set_uint(desc.name, value)
            }
        }
    }

    /// Encode the current values with this header's schema.
    pub fn encode(&self) -> Result<Vec<u8>, SegyError> {
        encode(&self.values, self.schema)
    }

    /// Every field with its absolute byte range and value, in schema order.
    pub fn entries(&self) -> Vec<FieldEntry<'_>> {
        self.schema
            .fields()
            .iter()
            .filter_map(|desc| {
                let value = self.values.get(desc.name)?;
                let offset = self.offsets.get(desc.name)?;
                Some(FieldEntry {
                    name: desc.name,
                    field_type: desc.field_type.to_string(),
                    start: offset.start,
                    end: offset.end,
                    value,
                })
            })
            .collect()
    }

    fn descriptor(&self, name: &str) -> Result<&'static FieldDescriptor, SegyError> {
        self.schema
            .field(name)
            .ok_or_else(|| SegyError::Argument(format!("Unknown binary header field: {}", name)))
    }
}

/// Decode `data` according to `schema`.
///
/// `base_offset` is added to every recorded field offset; pass the header's
/// position in the file (3200 for the binary file header).
pub fn decode(
    data: &[u8],
    schema: HeaderSchema,
    base_offset: u64,
) -> Result<BinaryHeader, SegyError> {
    let expected = schema.total_len();
    if data.len() != expected {
        return Err(SegyError::LengthMismatch {
            what: "binary header",
            expected,
            actual: data.len(),
        });
    }

    let mut values = FieldValues::with_capacity(schema.len());
    let mut offsets = HashMap::with_capacity(schema.len());

    for (desc, start, end) in schema.layout() {
        values.insert(desc.name, decode_field(&data[start..end], desc.field_type));
        offsets.insert(
            desc.name,
            FieldOffset {
                start: base_offset + start as u64,
                end: base_offset + end as u64,
            },
        );
    }

    if let Some(FieldValue::U32(found)) = values.get(SENTINEL_FIELD) {
        if *found != SENTINEL_VALUE {
            return Err(SegyError::EndiannessMismatch { found: *found });
        }
    }

    Ok(BinaryHeader {
        schema,
        values,
        offsets,
    })
}

/// Encode `values` according to `schema`.
///
/// Every schema field must have a value of the matching type; keys not in
/// the schema are ignored. Nothing is returned unless every field packs.
pub fn encode(values: &FieldValues, schema: HeaderSchema) -> Result<Vec<u8>, SegyError> {
    let mut buf = vec![0u8; schema.total_len()];

    for (desc, start, end) in schema.layout() {
        let value = values.get(desc.name).ok_or_else(|| SegyError::EncodeField {
            field: desc.name.to_string(),
            reason: "no value".to_string(),
        })?;
        encode_field(&mut buf[start..end], desc, value)?;
    }

    Ok(buf)
}

fn decode_field(data: &[u8], field_type: FieldType) -> FieldValue {
    match field_type {
        FieldType::U8 => FieldValue::U8(data[0]),
        FieldType::U16 => FieldValue::U16(BigEndian::read_u16(data)),
        FieldType::U32 => FieldValue::U32(BigEndian::read_u32(data)),
        FieldType::U64 => FieldValue::U64(BigEndian::read_u64(data)),
        FieldType::Bytes(_) => FieldValue::Bytes(data.to_vec()),
    }
}

fn encode_field(
    out: &mut [u8],
    desc: &FieldDescriptor,
    value: &FieldValue,
) -> Result<(), SegyError> {
    check_value(desc, value)?;
    match value {
        FieldValue::U8(v) => out[0] = *v,
        FieldValue::U16(v) => BigEndian::write_u16(out, *v),
        FieldValue::U32(v) => BigEndian::write_u32(out, *v),
        FieldValue::U64(v) => BigEndian::write_u64(out, *v),
        FieldValue::Bytes(b) => out.copy_from_slice(b),
    }
    Ok(())
}

fn check_value(desc: &FieldDescriptor, value: &FieldValue) -> Result<(), SegyError> {
    let ok = match (desc.field_type, value) {
        (FieldType::U8, FieldValue::U8(_))
        | (FieldType::U16, FieldValue::U16(_))
        | (FieldType::U32, FieldValue::U32(_))
        | (FieldType::U64, FieldValue::U64(_)) => true,
        (FieldType::Bytes(n), FieldValue::Bytes(b)) => b.len() == n,
        _ => false,
    };
    if ok {
        Ok(())
    } else {
        Err(SegyError::EncodeField {
            field: desc.name.to_string(),
            reason: format!("expected {}, got {}", desc.field_type, value.type_name()),
        })
    }
}

/// Parse a decimal or `0x`-prefixed hex unsigned integer.
pub fn parse_uint(text: &str) -> Result<u64, SegyError> {
    let t = text.trim();
    let (digits, radix) = match t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (t, 10),
    };
    // from_str_radix would also take a leading '+'
    if !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(SegyError::Parse(format!("Invalid integer '{}'", text)));
    }
    u64::from_str_radix(digits, radix)
        .map_err(|e| SegyError::Parse(format!("Invalid integer '{}': {}", text, e)))
}

fn parse_hex_bytes(text: &str) -> Result<Vec<u8>, SegyError> {
    let t = text.trim();
    let hex = t
        .strip_prefix("0x")
        .or_else(|| t.strip_prefix("0X"))
        .ok_or_else(|| {
            SegyError::Parse(format!("Byte-string value must be 0x-prefixed hex: '{}'", text))
        })?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(SegyError::Parse(format!("Invalid hex digits in '{}'", text)));
    }
    if hex.len() % 2 != 0 {
        return Err(SegyError::Parse(format!("Odd number of hex digits in '{}'", text)));
    }
    Ok(hex
        .as_bytes()
        .chunks(2)
        .map(|pair| (hex_nibble(pair[0]) << 4) | hex_nibble(pair[1]))
        .collect())
}

// Caller has checked `b` is an ASCII hex digit.
fn hex_nibble(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        _ => b - b'A' + 10,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segy::constants::BINARY_HEADER_SIZE;

    /// A valid header with a distinct byte pattern and a correct sentinel.
    fn sample_header_bytes() -> Vec<u8> {
        let mut buf: Vec<u8> = (0..BINARY_HEADER_SIZE).map(|i| (i * 7 % 251) as u8).collect();
        BigEndian::write_u32(&mut buf[96..], SENTINEL_VALUE);
        buf
    }

    #[test]
    fn test_round_trip_identity() {
        let buf = sample_header_bytes();
        let header = BinaryHeader::parse(&buf).unwrap();
        assert_eq!(header.encode().unwrap(), buf);
    }

    #[test]
    fn test_decode_values_and_offsets() {
        let mut buf = sample_header_bytes();
        BigEndian::write_u32(&mut buf[0..], 42);
        BigEndian::write_u16(&mut buf[24..], 5);
        buf[300] = 2;
        buf[301] = 1;
        BigEndian::write_u64(&mut buf[318..], 1_000_000);

        let header = BinaryHeader::parse(&buf).unwrap();
        assert_eq!(header.get("job_nr"), Some(&FieldValue::U32(42)));
        assert_eq!(header.get("format_code"), Some(&FieldValue::U16(5)));
        assert_eq!(header.get("major_ver"), Some(&FieldValue::U8(2)));
        assert_eq!(header.get("min_ver"), Some(&FieldValue::U8(1)));
        assert_eq!(header.get_uint("ext_nr_of_traces"), Some(1_000_000));
        assert_eq!(header.get_uint("int_constant"), Some(SENTINEL_VALUE as u64));
        assert_eq!(header.get("unassigned_1").unwrap().as_bytes().unwrap(), &buf[100..300]);

        assert_eq!(
            header.offset("job_nr"),
            Some(FieldOffset { start: 3200, end: 3204 })
        );
        assert_eq!(
            header.offset("nr_of_extensions"),
            Some(FieldOffset { start: 3504, end: 3506 })
        );
        assert_eq!(header.offset("unassigned_2").unwrap().end, 3600);
    }

    #[test]
    fn test_values_cover_schema_exactly() {
        let header = BinaryHeader::parse(&sample_header_bytes()).unwrap();
        assert_eq!(header.values().len(), header.schema().len());
        for desc in header.schema().fields() {
            assert!(header.get(desc.name).is_some(), "missing {}", desc.name);
        }
    }

    #[test]
    fn test_custom_base_offset() {
        let header = decode(&sample_header_bytes(), HeaderSchema::binary(), 0).unwrap();
        assert_eq!(header.offset("int_constant"), Some(FieldOffset { start: 96, end: 100 }));
    }

    #[test]
    fn test_length_mismatch() {
        for len in [0usize, 1, 399, 401, 3600, 1 << 16] {
            let buf = vec![0u8; len];
            match BinaryHeader::parse(&buf) {
                Err(SegyError::LengthMismatch { expected, actual, .. }) => {
                    assert_eq!(expected, 400);
                    assert_eq!(actual, len);
                }
                other => panic!("len {}: expected LengthMismatch, got {:?}", len, other),
            }
        }
    }

    #[test]
    fn test_reversed_sentinel_is_endianness_mismatch() {
        let mut buf = sample_header_bytes();
        buf[96..100].reverse();
        match BinaryHeader::parse(&buf) {
            Err(SegyError::EndiannessMismatch { found }) => assert_eq!(found, 0x0403_0201),
            other => panic!("expected EndiannessMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_sentinel_rejected() {
        let buf = vec![0u8; BINARY_HEADER_SIZE];
        assert!(matches!(
            BinaryHeader::parse(&buf),
            Err(SegyError::EndiannessMismatch { found: 0 })
        ));
    }

    #[test]
    fn test_selective_mutation_every_integer_field() {
        let buf = sample_header_bytes();
        let schema = HeaderSchema::binary();

        for (desc, start, end) in schema.layout() {
            if matches!(desc.field_type, FieldType::Bytes(_)) {
                continue;
            }
            let mut header = BinaryHeader::parse(&buf).unwrap();
            let current = header.get_uint(desc.name).unwrap();
            let new_value = if current == 1 { 2 } else { 1 };
            header.set_uint(desc.name, new_value).unwrap();

            let out = header.encode().unwrap();
            assert_eq!(out.len(), buf.len());
            assert_eq!(&out[..start], &buf[..start], "prefix changed for {}", desc.name);
            assert_eq!(&out[end..], &buf[end..], "suffix changed for {}", desc.name);

            let mut expected = vec![0u8; end - start];
            *expected.last_mut().unwrap() = new_value as u8;
            assert_eq!(&out[start..end], &expected[..], "slot for {}", desc.name);
        }
    }

    #[test]
    fn test_byte_string_mutation() {
        let buf = sample_header_bytes();
        let mut header = BinaryHeader::parse(&buf).unwrap();
        header
            .set("unassigned_2", FieldValue::Bytes(vec![0xAB; 66]))
            .unwrap();
        let out = header.encode().unwrap();
        assert_eq!(&out[..334], &buf[..334]);
        assert!(out[334..].iter().all(|&b| b == 0xAB));
    }

    #[test]
    fn test_encode_missing_field() {
        let mut header = BinaryHeader::parse(&sample_header_bytes()).unwrap();
        header.values_mut().remove("trace_flag");
        match header.encode() {
            Err(SegyError::EncodeField { field, .. }) => assert_eq!(field, "trace_flag"),
            other => panic!("expected EncodeField, got {:?}", other),
        }
    }

    #[test]
    fn test_encode_mistyped_field() {
        let mut header = BinaryHeader::parse(&sample_header_bytes()).unwrap();
        header
            .values_mut()
            .insert("nr_of_extensions", FieldValue::U32(16));
        match header.encode() {
            Err(SegyError::EncodeField { field, reason }) => {
                assert_eq!(field, "nr_of_extensions");
                assert!(reason.contains("expected u16"));
            }
            other => panic!("expected EncodeField, got {:?}", other),
        }
    }

    #[test]
    fn test_encode_wrong_byte_string_length() {
        let mut header = BinaryHeader::parse(&sample_header_bytes()).unwrap();
        header
            .values_mut()
            .insert("unassigned_1", FieldValue::Bytes(vec![0; 199]));
        assert!(matches!(
            header.encode(),
            Err(SegyError::EncodeField { .. })
        ));
    }

    #[test]
    fn test_encode_ignores_extra_keys() {
        let buf = sample_header_bytes();
        let header = BinaryHeader::parse(&buf).unwrap();
        let mut values = header.values().clone();
        values.insert("not_in_schema", FieldValue::U8(1));
        assert_eq!(encode(&values, HeaderSchema::binary()).unwrap(), buf);
    }

    #[test]
    fn test_set_rejects_bad_input() {
        let mut header = BinaryHeader::parse(&sample_header_bytes()).unwrap();
        assert!(matches!(
            header.set_uint("no_such_field", 1),
            Err(SegyError::Argument(_))
        ));
        assert!(matches!(
            header.set_uint("nr_of_extensions", 70_000),
            Err(SegyError::EncodeField { .. })
        ));
        assert!(matches!(
            header.set_uint("major_ver", 256),
            Err(SegyError::EncodeField { .. })
        ));
        assert!(matches!(
            header.set_uint("unassigned_1", 0),
            Err(SegyError::EncodeField { .. })
        ));
        assert!(matches!(
            header.set("job_nr", FieldValue::U16(1)),
            Err(SegyError::EncodeField { .. })
        ));
        // Rejected updates leave the mapping untouched.
        assert_eq!(header.encode().unwrap(), sample_header_bytes());
    }

    #[test]
    fn test_set_returns_previous_value() {
        let mut buf = sample_header_bytes();
        BigEndian::write_u16(&mut buf[304..], 0);
        let mut header = BinaryHeader::parse(&buf).unwrap();
        let old = header.set_uint("nr_of_extensions", 16).unwrap();
        assert_eq!(old, Some(FieldValue::U16(0)));
        assert_eq!(header.get_uint("nr_of_extensions"), Some(16));
    }

    #[test]
    fn test_set_from_str() {
        let mut header = BinaryHeader::parse(&sample_header_bytes()).unwrap();
        header.set_from_str("sample_int_1", "4000").unwrap();
        header.set_from_str("job_nr", "0xdeadbeef").unwrap();
        let hex = format!("0x{}", "01".repeat(66));
        header.set_from_str("unassigned_2", &hex).unwrap();

        assert_eq!(header.get_uint("sample_int_1"), Some(4000));
        assert_eq!(header.get_uint("job_nr"), Some(0xdead_beef));
        assert_eq!(header.get("unassigned_2"), Some(&FieldValue::Bytes(vec![1; 66])));

        assert!(matches!(
            header.set_from_str("sample_int_1", "abc"),
            Err(SegyError::Parse(_))
        ));
        assert!(matches!(
            header.set_from_str("unassigned_2", "0x0102"),
            Err(SegyError::EncodeField { .. })
        ));
        assert!(matches!(
            header.set_from_str("unassigned_2", "0102"),
            Err(SegyError::Parse(_))
        ));
    }

    #[test]
    fn test_set_from_str_rejects_non_hex_text() {
        let mut header = BinaryHeader::parse(&sample_header_bytes()).unwrap();
        let before = header.get("unassigned_2").cloned();

        let plus = format!("0x+1{}", "00".repeat(65));
        let multibyte = format!("0xaé1{}", "00".repeat(64));
        for text in ["0xaé1", multibyte.as_str(), plus.as_str(), "0x0g", "0x 01"] {
            assert!(
                matches!(
                    header.set_from_str("unassigned_2", text),
                    Err(SegyError::Parse(_))
                ),
                "{:?} should be rejected",
                text
            );
        }
        assert!(matches!(
            header.set_from_str("job_nr", "0x+10"),
            Err(SegyError::Parse(_))
        ));
        assert!(matches!(
            header.set_from_str("job_nr", "+16"),
            Err(SegyError::Parse(_))
        ));
        assert_eq!(header.get("unassigned_2").cloned(), before);
    }

    #[test]
    fn test_parse_hex_bytes_mixed_case() {
        assert_eq!(parse_hex_bytes("0xA5ff0b").unwrap(), vec![0xA5, 0xFF, 0x0B]);
        assert_eq!(parse_hex_bytes("0X").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_legacy_schema_decode() {
        let buf = sample_header_bytes();
        let legacy = decode(&buf[..24], HeaderSchema::legacy(), 3200).unwrap();
        let full = BinaryHeader::parse(&buf).unwrap();

        assert_eq!(legacy.values().len(), 9);
        for desc in HeaderSchema::legacy().fields() {
            assert_eq!(legacy.get(desc.name), full.get(desc.name));
            assert_eq!(legacy.offset(desc.name), full.offset(desc.name));
        }
        assert_eq!(legacy.encode().unwrap(), &buf[..24]);

        assert!(matches!(
            decode(&buf, HeaderSchema::legacy(), 3200),
            Err(SegyError::LengthMismatch { expected: 24, .. })
        ));
    }

    #[test]
    fn test_entries_in_schema_order() {
        let header = BinaryHeader::parse(&sample_header_bytes()).unwrap();
        let entries = header.entries();
        assert_eq!(entries.len(), 47);
        assert_eq!(entries[0].name, "job_nr");
        assert_eq!(entries[0].start, 3200);
        assert_eq!(entries[46].name, "unassigned_2");
        assert_eq!(entries[46].end, 3600);
        for pair in entries.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn test_field_value_display_and_json() {
        assert_eq!(FieldValue::U16(16).to_string(), "16");
        assert_eq!(FieldValue::Bytes(vec![0; 4]).to_string(), "<4 zero bytes>");
        assert_eq!(FieldValue::Bytes(vec![0x4a, 0x2f]).to_string(), "4a2f");
        assert_eq!(serde_json::to_string(&FieldValue::U64(7)).unwrap(), "7");
        assert_eq!(
            serde_json::to_string(&FieldValue::Bytes(vec![0xff, 0x00])).unwrap(),
            "\"ff00\""
        );
    }

    #[test]
    fn test_parse_uint() {
        assert_eq!(parse_uint("16").unwrap(), 16);
        assert_eq!(parse_uint(" 0x10 ").unwrap(), 16);
        assert_eq!(parse_uint("0XFF").unwrap(), 255);
        assert!(parse_uint("-1").is_err());
        assert!(parse_uint("").is_err());
        assert!(parse_uint("+7").is_err());
        assert!(parse_uint("0x").is_err());
    }
}
