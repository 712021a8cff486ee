//! SEG-Y file container I/O.
//!
//! Provides [`SegyFile`], which splits a whole file into its three segments:
//! the textual header (`[0, 3200)`), the binary header (`[3200, 3600)`), and
//! the trace payload (`[3600, EOF)`). Header segments are decoded on demand.
//! When writing, the textual header and payload bytes are emitted exactly as
//! read and only the binary header is re-encoded.
//!
//! Writes go to a uniquely named hidden sibling of the destination that is
//! synced and then renamed over it, so a failed write never leaves a partial
//! file at the destination path.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::segy::binary_header::BinaryHeader;
use crate::segy::constants::*;
use crate::segy::textual_header::TextualHeader;
use crate::SegyError;

/// A SEG-Y file split into header and payload segments.
#[derive(Debug, Clone)]
pub struct SegyFile {
    textual: Vec<u8>,
    binary: Vec<u8>,
    payload: Vec<u8>,
}

impl SegyFile {
    /// Read a SEG-Y file from disk.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SegyError> {
        let path = path.as_ref();
        let data = fs::read(path)
            .map_err(|e| SegyError::Io(format!("Cannot read {}: {}", path.display(), e)))?;
        Self::from_bytes(data)
    }

    /// Split an in-memory SEG-Y image.
    pub fn from_bytes(mut data: Vec<u8>) -> Result<Self, SegyError> {
        if data.len() < PAYLOAD_OFFSET {
            return Err(SegyError::Parse(format!(
                "File too small for SEG-Y headers: {} bytes, need at least {}",
                data.len(),
                PAYLOAD_OFFSET
            )));
        }

        let payload = data.split_off(PAYLOAD_OFFSET);
        let binary = data.split_off(BINARY_HEADER_OFFSET);
        let textual = data;

        Ok(SegyFile {
            textual,
            binary,
            payload,
        })
    }

    /// Raw textual header bytes (3200).
    pub fn textual_bytes(&self) -> &[u8] {
        &self.textual
    }

    /// Raw binary header bytes (400).
    pub fn binary_bytes(&self) -> &[u8] {
        &self.binary
    }

    /// Trace data following the file headers.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Total size of the file image in bytes.
    pub fn file_size(&self) -> u64 {
        (self.textual.len() + self.binary.len() + self.payload.len()) as u64
    }

    pub fn textual_header(&self) -> Result<TextualHeader, SegyError> {
        TextualHeader::parse(&self.textual)
    }

    pub fn binary_header(&self) -> Result<BinaryHeader, SegyError> {
        BinaryHeader::parse(&self.binary)
    }

    /// Assemble the file image with `header` re-encoded in place of the
    /// original binary header.
    pub fn to_bytes(&self, header: &BinaryHeader) -> Result<Vec<u8>, SegyError> {
        let encoded = header.encode()?;
        if encoded.len() != BINARY_HEADER_SIZE {
            return Err(SegyError::LengthMismatch {
                what: "encoded binary header",
                expected: BINARY_HEADER_SIZE,
                actual: encoded.len(),
            });
        }

        let mut out = Vec::with_capacity(self.file_size() as usize);
        out.extend_from_slice(&self.textual);
        out.extend_from_slice(&encoded);
        out.extend_from_slice(&self.payload);
        Ok(out)
    }

    /// Write the file image with `header` re-encoded to `path`.
    ///
    /// The header is encoded before anything touches the filesystem.
    pub fn write<P: AsRef<Path>>(&self, path: P, header: &BinaryHeader) -> Result<(), SegyError> {
        let data = self.to_bytes(header)?;
        write_atomic(path.as_ref(), &data)
    }
}

/// Write `data` to `path` via a synced temp file and rename.
///
/// The temp file is a fresh sibling of `path` named
/// `.<file name>.<pid>.<n>.tmp`, created with `create_new` so an existing
/// file is never truncated. It is removed if any step fails.
pub fn write_atomic(path: &Path, data: &[u8]) -> Result<(), SegyError> {
    let (tmp_path, mut f) = create_temp_sibling(path)?;

    let result = f
        .write_all(data)
        .map_err(|e| SegyError::Io(format!("Cannot write {}: {}", tmp_path.display(), e)))
        .and_then(|()| {
            f.sync_all()
                .map_err(|e| SegyError::Io(format!("Cannot sync {}: {}", tmp_path.display(), e)))
        });
    drop(f);

    let result = result.and_then(|()| {
        fs::rename(&tmp_path, path).map_err(|e| {
            SegyError::Io(format!(
                "Cannot rename {} to {}: {}",
                tmp_path.display(),
                path.display(),
                e
            ))
        })
    });

    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

const TEMP_ATTEMPTS: u32 = 64;

fn create_temp_sibling(path: &Path) -> Result<(PathBuf, File), SegyError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| SegyError::Argument(format!("Not a file path: {}", path.display())))?
        .to_string_lossy();

    for n in 0..TEMP_ATTEMPTS {
        let tmp_name = format!(".{}.{}.{}.tmp", file_name, std::process::id(), n);
        let tmp_path = parent.join(tmp_name);
        let opened = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&tmp_path);
        match opened {
            Ok(f) => return Ok((tmp_path, f)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(e) => {
                return Err(SegyError::Io(format!(
                    "Cannot create {}: {}",
                    tmp_path.display(),
                    e
                )))
            }
        }
    }
    Err(SegyError::Io(format!(
        "Cannot create a temp file next to {}: {} names already taken",
        path.display(),
        TEMP_ATTEMPTS
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::{BigEndian, ByteOrder};
    use tempfile::TempDir;

    fn build_image(payload_len: usize) -> Vec<u8> {
        let mut data = vec![0x40u8; TEXTUAL_HEADER_SIZE];
        let mut bin = vec![0u8; BINARY_HEADER_SIZE];
        BigEndian::write_u32(&mut bin[96..], SENTINEL_VALUE);
        data.extend_from_slice(&bin);
        data.extend((0..payload_len).map(|i| (i % 256) as u8));
        data
    }

    #[test]
    fn test_split_segments() {
        let file = SegyFile::from_bytes(build_image(1000)).unwrap();
        assert_eq!(file.textual_bytes().len(), 3200);
        assert_eq!(file.binary_bytes().len(), 400);
        assert_eq!(file.payload().len(), 1000);
        assert_eq!(file.file_size(), 4600);
        assert_eq!(file.payload()[255], 255);
    }

    #[test]
    fn test_headers_only_file() {
        let file = SegyFile::from_bytes(build_image(0)).unwrap();
        assert!(file.payload().is_empty());
        assert!(file.binary_header().is_ok());
        assert!(file.textual_header().is_ok());
    }

    #[test]
    fn test_too_small() {
        let result = SegyFile::from_bytes(vec![0u8; PAYLOAD_OFFSET - 1]);
        assert!(matches!(result, Err(SegyError::Parse(_))));
    }

    #[test]
    fn test_unmodified_round_trip() {
        let image = build_image(777);
        let file = SegyFile::from_bytes(image.clone()).unwrap();
        let header = file.binary_header().unwrap();
        assert_eq!(file.to_bytes(&header).unwrap(), image);
    }

    #[test]
    fn test_open_missing_file() {
        let result = SegyFile::open("/nonexistent/line.sgy");
        assert!(matches!(result, Err(SegyError::Io(_))));
    }

    #[test]
    fn test_write_atomic_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("out.sgy");
        write_atomic(&dest, b"segy").unwrap();
        assert_eq!(fs::read(&dest).unwrap(), b"segy");
        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("out.sgy")]);
    }

    #[test]
    fn test_write_atomic_keeps_unrelated_tmp_files() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("out.sgy");
        let bystander = dir.path().join("out.sgy.tmp");
        let taken = dir
            .path()
            .join(format!(".out.sgy.{}.0.tmp", std::process::id()));
        fs::write(&bystander, b"keep me").unwrap();
        fs::write(&taken, b"keep me too").unwrap();

        write_atomic(&dest, b"segy").unwrap();

        assert_eq!(fs::read(&dest).unwrap(), b"segy");
        assert_eq!(fs::read(&bystander).unwrap(), b"keep me");
        assert_eq!(fs::read(&taken).unwrap(), b"keep me too");
    }

    #[test]
    fn test_write_atomic_failed_rename_cleans_up() {
        let dir = TempDir::new().unwrap();
        // Renaming a file over a non-empty directory fails.
        let dest = dir.path().join("out.sgy");
        fs::create_dir(&dest).unwrap();
        fs::write(dest.join("inner"), b"x").unwrap();

        assert!(matches!(
            write_atomic(&dest, b"segy"),
            Err(SegyError::Io(_))
        ));
        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("out.sgy")]);
    }

    #[test]
    fn test_write_atomic_bad_directory() {
        let dest = Path::new("/nonexistent/dir/out.sgy");
        assert!(matches!(write_atomic(dest, b"x"), Err(SegyError::Io(_))));
        assert!(!dest.exists());
    }

    #[test]
    fn test_failed_encode_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("out.sgy");
        let file = SegyFile::from_bytes(build_image(10)).unwrap();
        let mut header = file.binary_header().unwrap();
        header.values_mut().remove("job_nr");

        assert!(matches!(
            file.write(&dest, &header),
            Err(SegyError::EncodeField { .. })
        ));
        assert!(!dest.exists());
        assert!(!dir.path().join("out.sgy.tmp").exists());
    }
}
