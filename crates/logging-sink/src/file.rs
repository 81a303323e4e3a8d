use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use levels::Level;

use crate::{RecordFormat, Sink, SinkError, SinkKind};

/// Append-only file sink.
///
/// The file is opened once in create+append mode and held until the sink is
/// dropped. Each record reaches the operating system in one `write_all` call,
/// so concurrent appenders never interleave within a line.
#[derive(Debug)]
pub struct FileSink {
    file: File,
    path: PathBuf,
    threshold: Level,
    format: RecordFormat,
}

impl FileSink {
    /// Opens `path` for appending, creating it if absent.
    ///
    /// Missing parent directories are not created.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::Open`] when the file cannot be opened.
    pub fn open(path: impl Into<PathBuf>, threshold: Level) -> Result<Self, SinkError> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| SinkError::Open {
                path: path.clone(),
                source,
            })?;
        tracing::debug!(
            target: "tierlog::sink",
            path = %path.display(),
            threshold = threshold.rank(),
            "opened file sink"
        );
        Ok(Self {
            file,
            path,
            threshold,
            format: RecordFormat::Detailed,
        })
    }

    /// Replaces the record layout.
    #[must_use]
    pub fn with_format(mut self, format: RecordFormat) -> Self {
        self.format = format;
        self
    }

    /// Path the sink appends to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn kind(&self) -> SinkKind {
        SinkKind::File
    }

    fn threshold(&self) -> Level {
        self.threshold
    }

    fn set_threshold(&mut self, level: Level) {
        self.threshold = level;
    }

    fn format(&self) -> RecordFormat {
        self.format
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn write_line(&mut self, line: &str) -> Result<(), SinkError> {
        self.file
            .write_all(line.as_bytes())
            .map_err(|source| SinkError::Write {
                target: self.describe(),
                source,
            })
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        self.file.flush().map_err(|source| SinkError::Flush {
            target: self.describe(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Record;
    use test_support::{log_dir, read_lines};

    #[test]
    fn missing_directory_fails_at_open() {
        let dir = log_dir();
        let path = dir.path().join("absent").join("app.log");
        let error = FileSink::open(&path, Level::FILE_ONLY).unwrap_err();
        match error {
            SinkError::Open { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn file_only_records_are_written() {
        let dir = log_dir();
        let path = dir.path().join("app.log");
        let mut sink = FileSink::open(&path, Level::FILE_ONLY).unwrap();
        assert!(sink.emit(&Record::new("app", Level::FILE_ONLY, "detail")).unwrap());
        assert!(!sink.emit(&Record::new("app", Level::NOTSET, "never")).unwrap());
        let lines = read_lines(&path);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with(" - app - FILEONLY - detail"), "{}", lines[0]);
    }

    #[test]
    fn describe_reports_path() {
        let dir = log_dir();
        let path = dir.path().join("named.log");
        let sink = FileSink::open(&path, Level::DEBUG).unwrap();
        assert_eq!(sink.describe(), path.display().to_string());
        assert_eq!(sink.path(), path.as_path());
        assert_eq!(sink.kind(), SinkKind::File);
    }
}
