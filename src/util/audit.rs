//! Audit logging for header write operations.
//!
//! Provides [`AuditLogger`] which appends NDJSON events to a log file. Every
//! `segyhdr set` invocation run with `--audit-log` records which binary header
//! fields were changed (old and new value, absolute byte range), which output
//! file was written, and when.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::{Mutex, MutexGuard};
use std::time::Instant;

use chrono::Local;
use fs2::FileExt;
use serde::Serialize;

use crate::SegyError;

/// A single audit log event, serialized as tagged NDJSON.
#[derive(Serialize)]
#[serde(tag = "event")]
pub enum AuditEvent {
    /// Emitted once at the start of a CLI invocation.
    #[serde(rename = "session_start")]
    SessionStart {
        timestamp: String,
        args: Vec<String>,
        version: String,
    },

    /// Emitted for each binary header field whose value changed.
    #[serde(rename = "field_write")]
    FieldWrite {
        timestamp: String,
        file: String,
        field: String,
        start: u64,
        end: u64,
        old_value: String,
        new_value: String,
    },

    /// Emitted when a whole output file is written.
    #[serde(rename = "file_write")]
    FileWrite {
        timestamp: String,
        source: String,
        file: String,
        bytes_written: u64,
    },

    /// Emitted once at the end of a CLI invocation.
    #[serde(rename = "session_end")]
    SessionEnd {
        timestamp: String,
        duration_ms: u64,
        fields_written: u64,
        files_written: u64,
    },
}

struct AuditLoggerInner {
    file: File,
    fields_written: u64,
    files_written: u64,
}

/// Thread-safe audit logger that appends NDJSON events to a file.
///
/// File-level locking (via `fs2`) keeps lines from concurrent processes
/// writing the same log intact.
pub struct AuditLogger {
    inner: Mutex<AuditLoggerInner>,
    start: Instant,
}

impl AuditLogger {
    /// Open (or create) the audit log file in append mode.
    pub fn open(path: &str) -> Result<Self, SegyError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| SegyError::Io(format!("Cannot open audit log {}: {}", path, e)))?;

        Ok(Self {
            inner: Mutex::new(AuditLoggerInner {
                file,
                fields_written: 0,
                files_written: 0,
            }),
            start: Instant::now(),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, AuditLoggerInner>, SegyError> {
        self.inner
            .lock()
            .map_err(|_| SegyError::Io("Audit log mutex poisoned".to_string()))
    }

    /// Emit a single audit event as one NDJSON line.
    pub fn emit(&self, event: &AuditEvent) -> Result<(), SegyError> {
        let line = serde_json::to_string(event)
            .map_err(|e| SegyError::Parse(format!("Audit JSON error: {}", e)))?;

        let mut inner = self.lock()?;
        inner
            .file
            .lock_exclusive()
            .map_err(|e| SegyError::Io(format!("Audit log lock error: {}", e)))?;
        writeln!(inner.file, "{}", line)
            .map_err(|e| SegyError::Io(format!("Audit log write error: {}", e)))?;
        inner
            .file
            .flush()
            .map_err(|e| SegyError::Io(format!("Audit log flush error: {}", e)))?;
        FileExt::unlock(&inner.file)
            .map_err(|e| SegyError::Io(format!("Audit log unlock error: {}", e)))?;

        Ok(())
    }

    /// Emit a `session_start` event.
    pub fn start_session(&self, args: Vec<String>) -> Result<(), SegyError> {
        self.emit(&AuditEvent::SessionStart {
            timestamp: now(),
            args,
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }

    /// Emit a `session_end` event with accumulated counters.
    pub fn end_session(&self) -> Result<(), SegyError> {
        let event = {
            let inner = self.lock()?;
            AuditEvent::SessionEnd {
                timestamp: now(),
                duration_ms: self.start.elapsed().as_millis() as u64,
                fields_written: inner.fields_written,
                files_written: inner.files_written,
            }
        };
        self.emit(&event)
    }

    /// Log a change to one binary header field.
    pub fn log_field_write(
        &self,
        file: &str,
        field: &str,
        range: (u64, u64),
        old_value: &str,
        new_value: &str,
    ) -> Result<(), SegyError> {
        self.emit(&AuditEvent::FieldWrite {
            timestamp: now(),
            file: file.to_string(),
            field: field.to_string(),
            start: range.0,
            end: range.1,
            old_value: old_value.to_string(),
            new_value: new_value.to_string(),
        })?;
        self.lock()?.fields_written += 1;
        Ok(())
    }

    /// Log a whole-file write.
    pub fn log_file_write(
        &self,
        source: &str,
        file: &str,
        bytes_written: u64,
    ) -> Result<(), SegyError> {
        self.emit(&AuditEvent::FileWrite {
            timestamp: now(),
            source: source.to_string(),
            file: file.to_string(),
            bytes_written,
        })?;
        self.lock()?.files_written += 1;
        Ok(())
    }
}

fn now() -> String {
    Local::now().to_rfc3339()
}
