//! SEG-Y textual file header.
//!
//! The first 3200 bytes of a SEG-Y file are 40 "card images" of 80 EBCDIC
//! characters each. [`TextualHeader::parse`] decodes the whole block through
//! code page 1141 and splits it into lines. The raw bytes are kept so the
//! header can be written back out unchanged; there is no re-encoding path.

use serde::Serialize;

use crate::segy::constants::{TEXTUAL_HEADER_SIZE, TEXTUAL_LINE_COUNT, TEXTUAL_LINE_WIDTH};
use crate::segy::ebcdic;
use crate::SegyError;

/// Decoded textual file header (40 lines × 80 characters).
#[derive(Debug, Clone, Serialize)]
pub struct TextualHeader {
    #[serde(skip)]
    raw: Vec<u8>,
    lines: Vec<String>,
}

impl TextualHeader {
    /// Decode a 3200-byte EBCDIC textual header.
    pub fn parse(data: &[u8]) -> Result<Self, SegyError> {
        if data.len() != TEXTUAL_HEADER_SIZE {
            return Err(SegyError::LengthMismatch {
                what: "textual header",
                expected: TEXTUAL_HEADER_SIZE,
                actual: data.len(),
            });
        }

        // One char per byte, so splitting the bytes splits the text.
        let lines: Vec<String> = data
            .chunks(TEXTUAL_LINE_WIDTH)
            .map(ebcdic::decode)
            .collect();
        debug_assert_eq!(lines.len(), TEXTUAL_LINE_COUNT);

        Ok(TextualHeader {
            raw: data.to_vec(),
            lines,
        })
    }

    /// The 40 decoded lines, in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The full decoded text (all lines concatenated, no separators).
    pub fn text(&self) -> String {
        self.lines.concat()
    }

    /// The undecoded 3200 bytes.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card_image_block() -> Vec<u8> {
        let mut text = String::new();
        for i in 1..=TEXTUAL_LINE_COUNT {
            text.push_str(&format!("{:<80}", format!("C{:>2} LINE {}", i, i)));
        }
        ebcdic::encode(&text).unwrap()
    }

    #[test]
    fn test_parse_forty_lines_of_eighty() {
        let header = TextualHeader::parse(&card_image_block()).unwrap();
        assert_eq!(header.lines().len(), 40);
        for line in header.lines() {
            assert_eq!(line.chars().count(), 80);
        }
        assert!(header.lines()[0].starts_with("C 1 LINE 1"));
        assert!(header.lines()[39].starts_with("C40 LINE 40"));
    }

    #[test]
    fn test_concatenation_matches_full_decode() {
        let data = card_image_block();
        let header = TextualHeader::parse(&data).unwrap();
        assert_eq!(header.text(), ebcdic::decode(&data));
        assert_eq!(header.raw(), &data[..]);
    }

    #[test]
    fn test_arbitrary_bytes_keep_line_width() {
        let data: Vec<u8> = (0..TEXTUAL_HEADER_SIZE).map(|i| i as u8).collect();
        let header = TextualHeader::parse(&data).unwrap();
        assert_eq!(header.lines().len(), 40);
        assert!(header.lines().iter().all(|l| l.chars().count() == 80));
        assert_eq!(header.text().chars().count(), TEXTUAL_HEADER_SIZE);
    }

    #[test]
    fn test_length_mismatch() {
        for len in [0usize, 3199, 3201, 3600] {
            let data = vec![0x40u8; len];
            match TextualHeader::parse(&data) {
                Err(SegyError::LengthMismatch { expected, actual, .. }) => {
                    assert_eq!(expected, 3200);
                    assert_eq!(actual, len);
                }
                other => panic!("len {}: expected LengthMismatch, got {:?}", len, other),
            }
        }
    }
}
