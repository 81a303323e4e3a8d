use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by sinks.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The log file could not be opened for appending.
    #[error("failed to open log file '{}': {source}", path.display())]
    Open {
        /// The path that was requested.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A rendered record could not be written.
    #[error("failed to write record to {target}: {source}")]
    Write {
        /// Human readable description of the destination.
        target: String,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The destination could not be flushed.
    #[error("failed to flush {target}: {source}")]
    Flush {
        /// Human readable description of the destination.
        target: String,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl SinkError {
    /// Returns the underlying I/O error.
    #[must_use]
    pub fn io_error(&self) -> &io::Error {
        match self {
            Self::Open { source, .. } | Self::Write { source, .. } | Self::Flush { source, .. } => {
                source
            }
        }
    }
}
