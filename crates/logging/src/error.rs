//! crates/logging/src/error.rs

use std::io;
use std::path::PathBuf;

use logging_sink::SinkError;
use thiserror::Error;

/// Errors returned by logger construction and reconfiguration.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// A sink could not be attached.
    #[error(transparent)]
    Sink(#[from] SinkError),

    /// A configuration could not be loaded or applied.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while loading a [`LoggingConfig`](crate::LoggingConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read logging config '{}': {source}", path.display())]
    Read {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration text is not valid TOML or has invalid values.
    #[error("invalid logging config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Two `[[logger]]` tables share one name.
    #[error("logger '{0}' is configured more than once")]
    DuplicateLogger(String),
}
