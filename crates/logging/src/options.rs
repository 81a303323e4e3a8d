//! crates/logging/src/options.rs

use std::path::PathBuf;

use levels::Level;

/// Name used when callers do not pick one.
pub const DEFAULT_LOGGER_NAME: &str = "generalLoggerName";

/// Construction options for a logger created through a
/// [`LoggerRegistry`](crate::LoggerRegistry).
///
/// Options only apply when the registry creates the logger; a repeated request
/// for an existing name returns the existing instance untouched.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LoggerOptions {
    /// Directory receiving `<name>.log`; empty means the working directory.
    pub directory: PathBuf,
    /// Threshold of the stream sink.
    pub stream_level: Level,
    /// Attach a `<name>.log` file sink at [`Level::LOWEST`].
    pub add_file_sink: bool,
    /// Attach a stream sink at [`stream_level`](Self::stream_level).
    pub add_stream_sink: bool,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            directory: PathBuf::new(),
            stream_level: Level::INFO,
            add_file_sink: true,
            add_stream_sink: true,
        }
    }
}

impl LoggerOptions {
    /// Sets the log file directory.
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = directory.into();
        self
    }

    /// Sets the stream sink threshold.
    pub fn stream_level(mut self, level: impl Into<Level>) -> Self {
        self.stream_level = level.into();
        self
    }

    /// Enables or disables the default file sink.
    pub fn file_sink(mut self, enabled: bool) -> Self {
        self.add_file_sink = enabled;
        self
    }

    /// Enables or disables the stream sink.
    pub fn stream_sink(mut self, enabled: bool) -> Self {
        self.add_stream_sink = enabled;
        self
    }
}
