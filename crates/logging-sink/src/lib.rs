#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides the destinations a tierlog logger fans records out
//! to. Every destination implements [`Sink`]: it owns a threshold
//! [`Level`](levels::Level), a [`RecordFormat`], and a writer, and it accepts a
//! [`Record`] only when the record's rank reaches the threshold.
//!
//! # Design
//!
//! Two concrete sinks cover the routing model:
//!
//! - [`StreamSink`] writes the bare message body to an interactive stream
//!   (stdout by default) and flushes after every record so terminal output
//!   never lags behind the caller.
//! - [`FileSink`] appends `timestamp - logger - LEVEL - message` lines to a
//!   file opened once in create+append mode. Each record is handed to the
//!   operating system in a single write; nothing is buffered in process.
//!
//! # Invariants
//!
//! - [`Sink::emit`] is a no-op returning `Ok(false)` for records below the
//!   threshold and never writes partial records on success.
//! - File sinks never truncate existing content.
//! - Write failures are returned as [`SinkError`] values; sinks never panic on
//!   I/O errors.
//!
//! # Examples
//!
//! ```
//! use levels::Level;
//! use logging_sink::{Record, Sink, StreamSink};
//!
//! let mut sink = StreamSink::new(Vec::new(), Level::WARNING);
//! assert!(!sink.emit(&Record::new("app", Level::INFO, "quiet"))?);
//! assert!(sink.emit(&Record::new("app", Level::ERROR, "loud"))?);
//! assert_eq!(sink.into_inner(), b"loud\n".to_vec());
//! # Ok::<(), logging_sink::SinkError>(())
//! ```

mod error;
mod file;
mod record;
mod sink;
mod stream;

pub use error::SinkError;
pub use file::FileSink;
pub use record::{Record, RecordFormat, TIMESTAMP_FORMAT, format_timestamp, now};
pub use sink::{Sink, SinkKind};
pub use stream::StreamSink;
