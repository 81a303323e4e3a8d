//! crates/logging/src/config.rs
//!
//! TOML description of a set of loggers.
//!
//! ```toml
//! [defaults]
//! directory = "logs"
//! stream_level = "INFO"
//!
//! [[logger]]
//! name = "main"
//! stream_level = 30
//!
//! [[logger.file]]
//! filename = "errors"
//! level = "ERROR"
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use levels::Level;
use serde::Deserialize;

use crate::{ConfigError, Logger, LoggerOptions, LoggerRegistry, LoggingError};

/// Values inherited by every `[[logger]]` table.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LoggerDefaults {
    /// Directory for default and extra log files.
    pub directory: Option<PathBuf>,
    /// Stream sink threshold.
    pub stream_level: Option<Level>,
}

/// One `[[logger.file]]` table: an extra file sink.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileSinkConfig {
    /// File name; empty means the logger's name.
    #[serde(default)]
    pub filename: String,
    /// Directory; defaults to the logger's directory.
    pub directory: Option<PathBuf>,
    /// Threshold; defaults to FILEONLY.
    pub level: Option<Level>,
}

/// One `[[logger]]` table.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LoggerConfig {
    /// Registry key.
    pub name: String,
    /// Directory for this logger's files.
    pub directory: Option<PathBuf>,
    /// Stream sink threshold.
    pub stream_level: Option<Level>,
    /// Attach the default `<name>.log` sink.
    #[serde(default = "enabled")]
    pub file_sink: bool,
    /// Attach a stream sink.
    #[serde(default = "enabled")]
    pub stream_sink: bool,
    /// Extra file sinks.
    #[serde(default, rename = "file")]
    pub files: Vec<FileSinkConfig>,
}

const fn enabled() -> bool {
    true
}

impl LoggerConfig {
    /// Construction options after applying `defaults`.
    pub fn options(&self, defaults: &LoggerDefaults) -> LoggerOptions {
        let base = LoggerOptions::default();
        LoggerOptions {
            directory: self.directory_or(defaults).unwrap_or(base.directory),
            stream_level: self
                .stream_level
                .or(defaults.stream_level)
                .unwrap_or(base.stream_level),
            add_file_sink: self.file_sink,
            add_stream_sink: self.stream_sink,
        }
    }

    fn directory_or(&self, defaults: &LoggerDefaults) -> Option<PathBuf> {
        self.directory
            .clone()
            .or_else(|| defaults.directory.clone())
    }

    fn attach_files(&self, logger: &Logger, directory: &Path) -> Result<(), LoggingError> {
        for file in &self.files {
            let dir = file.directory.as_deref().unwrap_or(directory);
            logger.add_file_handler(
                &file.filename,
                dir,
                file.level.unwrap_or(Level::LOWEST),
            )?;
        }
        Ok(())
    }
}

/// A parsed logging configuration.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Shared defaults.
    #[serde(default)]
    pub defaults: LoggerDefaults,
    /// Logger definitions in file order.
    #[serde(default, rename = "logger")]
    pub loggers: Vec<LoggerConfig>,
}

impl FromStr for LoggingConfig {
    type Err = ConfigError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let config: Self = toml::from_str(text)?;
        let mut seen = BTreeSet::new();
        for logger in &config.loggers {
            if !seen.insert(logger.name.as_str()) {
                return Err(ConfigError::DuplicateLogger(logger.name.clone()));
            }
        }
        Ok(config)
    }
}

impl LoggingConfig {
    /// Reads and parses a configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        text.parse()
    }

    /// Creates every configured logger in `registry`.
    ///
    /// Extra file sinks are attached only to loggers this call creates, so
    /// applying a configuration twice does not duplicate sinks.
    pub fn apply(&self, registry: &LoggerRegistry) -> Result<Vec<Arc<Logger>>, LoggingError> {
        self.loggers
            .iter()
            .map(|entry| {
                let options = entry.options(&self.defaults);
                registry.get_or_create_with(&entry.name, &options, |logger| {
                    entry.attach_files(logger, &options.directory)
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_valid() {
        let config: LoggingConfig = "".parse().unwrap();
        assert!(config.loggers.is_empty());
        assert_eq!(config.defaults, LoggerDefaults::default());
    }

    #[test]
    fn levels_accept_names_and_numbers() {
        let config: LoggingConfig = r#"
            [defaults]
            stream_level = "importantinfo"

            [[logger]]
            name = "a"

            [[logger]]
            name = "b"
            stream_level = 51
        "#
        .parse()
        .unwrap();
        let defaults = &config.defaults;
        assert_eq!(config.loggers[0].options(defaults).stream_level, Level::IMPORTANT_INFO);
        assert_eq!(config.loggers[1].options(defaults).stream_level, Level::new(51));
    }

    #[test]
    fn logger_directory_overrides_default() {
        let config: LoggingConfig = r#"
            [defaults]
            directory = "shared"

            [[logger]]
            name = "own"
            directory = "private"
            file_sink = false

            [[logger]]
            name = "inherits"
        "#
        .parse()
        .unwrap();
        let own = config.loggers[0].options(&config.defaults);
        assert_eq!(own.directory, PathBuf::from("private"));
        assert!(!own.add_file_sink);
        assert!(own.add_stream_sink);
        let inherits = config.loggers[1].options(&config.defaults);
        assert_eq!(inherits.directory, PathBuf::from("shared"));
        assert_eq!(inherits.stream_level, Level::INFO);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let error = r#"
            [[logger]]
            name = "x"
            [[logger]]
            name = "x"
        "#
        .parse::<LoggingConfig>()
        .unwrap_err();
        assert!(matches!(error, ConfigError::DuplicateLogger(ref name) if name == "x"));
    }

    #[test]
    fn invalid_level_is_a_parse_error() {
        let error = r#"
            [[logger]]
            name = "x"
            stream_level = "LOUD"
        "#
        .parse::<LoggingConfig>()
        .unwrap_err();
        assert!(matches!(error, ConfigError::Parse(_)));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let error = "[[logger]]\nname = \"x\"\ncolour = true\n"
            .parse::<LoggingConfig>()
            .unwrap_err();
        assert!(matches!(error, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let error = LoggingConfig::from_path("/nonexistent/tierlog.toml").unwrap_err();
        assert!(matches!(error, ConfigError::Read { .. }));
    }
}
