#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` provides named loggers that fan every message out to a set of
//! independently filtered sinks. A [`LoggerRegistry`] guarantees that every
//! request for a given name yields the same [`Logger`], and each logger offers
//! one emit method per severity of the tierlog ladder:
//!
//! | Method                       | Rank | Name          |
//! |------------------------------|------|---------------|
//! | [`Logger::raise`]            | 99   | RAISEMSG      |
//! | [`Logger::critical`]         | 50   | CRITICAL      |
//! | [`Logger::error`]            | 40   | ERROR         |
//! | [`Logger::warning`]          | 30   | WARNING       |
//! | [`Logger::important_info`]   | 25   | IMPORTANTINFO |
//! | [`Logger::info`]             | 20   | INFO          |
//! | [`Logger::debug`]            | 10   | DEBUG         |
//! | [`Logger::file_only`]        | 1    | FILEONLY      |
//!
//! # Design
//!
//! A logger owns an ordered list of boxed [`Sink`](logging_sink::Sink)s
//! behind a mutex. It holds at most one stream sink (message body only, stdout
//! by default) and any number of file sinks
//! (`timestamp - name - LEVEL - message`, append-only). The logger itself
//! never filters beyond discarding rank 0; every sink applies its own
//! threshold. With the default options a logger named `main` writes
//! everything to `main.log` and INFO and above to stdout, so FILEONLY records
//! only ever reach the file.
//!
//! # Invariants
//!
//! - At most one logger exists per name within a registry.
//! - After [`Logger::set_stream_level`] exactly one stream sink is attached and
//!   there is no instant without one.
//! - A sink that fails to write does not stop the others; the failure is
//!   reported to the remaining sinks at ERROR and to `tracing`.
//!
//! # Examples
//!
//! ```
//! use logging::{LoggerOptions, LoggerRegistry};
//!
//! let registry = LoggerRegistry::with_stream_writer(Vec::<u8>::new);
//! let options = LoggerOptions::default().file_sink(false);
//! let first = registry.get_or_create("main", &options)?;
//! let again = registry.get_or_create("main", &LoggerOptions::default())?;
//! assert!(std::sync::Arc::ptr_eq(&first, &again));
//! assert_eq!(again.sink_count(), 1);
//!
//! first.set_stream_level(51u8);
//! assert_eq!(first.stream_level().rank(), 51);
//! # Ok::<(), logging::LoggingError>(())
//! ```
//!
//! # See also
//!
//! - [`levels`] for rank names and parsing.
//! - [`logging_sink`] for the sink trait and the stream and file sinks.

mod config;
mod diagnostics;
mod error;
mod logger;
mod macros;
mod options;
mod registry;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::{FileSinkConfig, LoggerConfig, LoggerDefaults, LoggingConfig};
pub use diagnostics::{HostReport, render_dict, render_system_summary};
pub use error::{ConfigError, LoggingError};
pub use levels::{Level, Severity};
pub use logger::{FLOOR, Logger, StreamFactory, stdout_factory, writer_factory};
pub use options::{DEFAULT_LOGGER_NAME, LoggerOptions};
pub use registry::{LoggerRegistry, get_logger};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{TierLayer, init_tracing};
