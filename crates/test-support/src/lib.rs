#![deny(unsafe_code)]

//! Shared helpers for tierlog tests.
//!
//! [`SharedBuffer`] stands in for an interactive stream so tests can inspect
//! what a stream sink printed, [`FailingWriter`] simulates a closed
//! descriptor, and [`log_dir`] hands out a throwaway directory for file sinks.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use tempfile::TempDir;

/// Cloneable in-memory writer; every clone appends to the same buffer.
#[derive(Clone, Debug, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns everything written so far as UTF-8 text.
    #[must_use]
    pub fn contents(&self) -> String {
        let bytes = self.bytes.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Returns the written text split into lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    /// Discards everything written so far.
    pub fn clear(&self) {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writer whose every write fails, as a closed descriptor would.
#[derive(Clone, Copy, Debug)]
pub struct FailingWriter {
    kind: io::ErrorKind,
}

impl FailingWriter {
    /// Fails with [`io::ErrorKind::BrokenPipe`].
    #[must_use]
    pub const fn broken_pipe() -> Self {
        Self {
            kind: io::ErrorKind::BrokenPipe,
        }
    }

    /// Fails with the given error kind.
    #[must_use]
    pub const fn with_kind(kind: io::ErrorKind) -> Self {
        Self { kind }
    }
}

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(self.kind, "simulated write failure"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(self.kind, "simulated flush failure"))
    }
}

/// Creates a temporary directory for log files, removed on drop.
#[must_use]
pub fn log_dir() -> TempDir {
    tempfile::Builder::new()
        .prefix("tierlog-")
        .tempdir()
        .expect("create temporary log directory")
}

/// Reads a log file into lines; a missing file yields no lines.
#[must_use]
pub fn read_lines(path: &Path) -> Vec<String> {
    match fs::read_to_string(path) {
        Ok(text) => text.lines().map(str::to_owned).collect(),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Vec::new(),
        Err(error) => panic!("failed to read {}: {error}", path.display()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_one_buffer() {
        let buffer = SharedBuffer::new();
        let mut writer = buffer.clone();
        writer.write_all(b"first\nsecond\n").expect("in-memory write");
        assert_eq!(buffer.lines(), vec!["first", "second"]);
        buffer.clear();
        assert!(buffer.contents().is_empty());
    }

    #[test]
    fn failing_writer_reports_configured_kind() {
        let mut writer = FailingWriter::with_kind(io::ErrorKind::PermissionDenied);
        let error = writer.write_all(b"x").expect_err("writes fail");
        assert_eq!(error.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn read_lines_tolerates_missing_files() {
        let dir = log_dir();
        assert!(read_lines(&dir.path().join("absent.log")).is_empty());
    }
}
