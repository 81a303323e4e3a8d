//! crates/logging/src/logger.rs

use std::error::Error;
use std::fmt::{self, Debug, Display};
use std::io::Write;
use std::iter;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use levels::Level;
use logging_sink::{FileSink, Record, Sink, SinkKind, StreamSink};
use time::OffsetDateTime;

use crate::LoggingError;
use crate::diagnostics::{self, HostReport};

/// Records ranked below this never reach sink evaluation.
pub const FLOOR: Level = Level::LOWEST;

/// Builds the stream sink a logger attaches for a given threshold.
pub type StreamFactory = Arc<dyn Fn(Level) -> StreamSink + Send + Sync>;

/// Factory producing stream sinks on standard output.
pub fn stdout_factory() -> StreamFactory {
    Arc::new(StreamSink::stdout)
}

/// Factory producing stream sinks on writers returned by `make_writer`.
pub fn writer_factory<W, F>(make_writer: F) -> StreamFactory
where
    W: Write + Send + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    Arc::new(move |level| StreamSink::new(Box::new(make_writer()) as Box<dyn Write + Send>, level))
}

/// A named logger fanning records out to its sinks.
///
/// Every emit call takes the sink-list lock for its whole duration, so records
/// reach each sink in call order and reconfiguration never observes a
/// half-dispatched record.
pub struct Logger {
    name: String,
    created: OffsetDateTime,
    sinks: Mutex<Vec<Box<dyn Sink>>>,
    stream_factory: StreamFactory,
}

impl Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("created", &self.created)
            .field("sinks", &self.sink_count())
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Creates a logger without sinks whose stream sinks write to stdout.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_stream_factory(name, stdout_factory())
    }

    /// Creates a logger without sinks using `factory` for stream sinks.
    pub fn with_stream_factory(name: impl Into<String>, factory: StreamFactory) -> Self {
        Self {
            name: name.into(),
            created: logging_sink::now(),
            sinks: Mutex::new(Vec::new()),
            stream_factory: factory,
        }
    }

    /// The logger's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// When the logger was created.
    pub const fn created(&self) -> OffsetDateTime {
        self.created
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Box<dyn Sink>>> {
        self.sinks.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ------------------------------------------------------------------
    // Emission
    // ------------------------------------------------------------------

    /// Emits `message` at an arbitrary rank.
    pub fn log(&self, level: impl Into<Level>, message: &str) {
        let level = level.into();
        if !FLOOR.admits(level) {
            return;
        }
        let record = Record::new(&self.name, level, message);
        let mut sinks = self.lock();
        dispatch(&mut sinks, &record);
    }

    /// Emits at RAISEMSG (99).
    pub fn raise(&self, message: &str) {
        self.log(Level::RAISE_MSG, message);
    }

    /// Emits at CRITICAL (50).
    pub fn critical(&self, message: &str) {
        self.log(Level::CRITICAL, message);
    }

    /// Emits at ERROR (40).
    pub fn error(&self, message: &str) {
        self.log(Level::ERROR, message);
    }

    /// Emits at WARNING (30).
    pub fn warning(&self, message: &str) {
        self.log(Level::WARNING, message);
    }

    /// Emits at IMPORTANTINFO (25).
    pub fn important_info(&self, message: &str) {
        self.log(Level::IMPORTANT_INFO, message);
    }

    /// Emits at INFO (20).
    pub fn info(&self, message: &str) {
        self.log(Level::INFO, message);
    }

    /// Emits at DEBUG (10).
    pub fn debug(&self, message: &str) {
        self.log(Level::DEBUG, message);
    }

    /// Emits at FILEONLY (1).
    pub fn file_only(&self, message: &str) {
        self.log(Level::FILE_ONLY, message);
    }

    /// Emits `message` at ERROR followed by `error` and its source chain.
    pub fn exception(&self, message: &str, error: &dyn Error) {
        self.error(&describe_error(message, error));
    }

    /// Writes `entries` as a key-sorted block at FILEONLY.
    pub fn log_dict<K, V, I>(&self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Ord + Display,
        V: Debug,
    {
        self.file_only(&diagnostics::render_dict(entries));
    }

    /// Writes a host summary at FILEONLY.
    pub fn log_system_info(&self) {
        let report = HostReport::probe();
        self.file_only(&diagnostics::render_system_summary(
            self.created.date(),
            &report,
        ));
    }

    // ------------------------------------------------------------------
    // Reconfiguration
    // ------------------------------------------------------------------

    /// Changes the stream sink threshold, attaching a stream sink if none
    /// exists. Exactly one stream sink is attached afterwards.
    pub fn set_stream_level(&self, level: impl Into<Level>) {
        let level = level.into();
        let mut sinks = self.lock();
        match sinks.iter_mut().find(|sink| sink.kind() == SinkKind::Stream) {
            Some(stream) => stream.set_threshold(level),
            None => sinks.push(Box::new((self.stream_factory)(level))),
        }
        tracing::debug!(
            target: "tierlog::logger",
            logger = %self.name,
            level = level.rank(),
            "stream level changed"
        );
    }

    /// Threshold of the stream sink, or [`Level::NOTSET`] without one.
    pub fn stream_level(&self) -> Level {
        self.lock()
            .iter()
            .find(|sink| sink.kind() == SinkKind::Stream)
            .map_or(Level::NOTSET, |sink| sink.threshold())
    }

    /// Attaches an append-only file sink and returns its path.
    ///
    /// An empty `filename` means the logger's name; `.log` is appended when the
    /// filename contains no `.`. An empty `directory` means the working
    /// directory.
    pub fn add_file_handler(
        &self,
        filename: &str,
        directory: impl AsRef<Path>,
        level: impl Into<Level>,
    ) -> Result<PathBuf, LoggingError> {
        let path = directory.as_ref().join(self.log_file_name(filename));
        let sink = FileSink::open(&path, level.into())?;
        self.lock().push(Box::new(sink));
        tracing::debug!(
            target: "tierlog::logger",
            logger = %self.name,
            path = %path.display(),
            "file sink attached"
        );
        Ok(path)
    }

    /// Attaches a stream sink from the logger's factory, replacing any
    /// existing stream sink.
    pub fn add_stream_handler(&self, level: impl Into<Level>) {
        let sink = (self.stream_factory)(level.into());
        self.add_sink(Box::new(sink));
    }

    /// Attaches an arbitrary sink. A stream sink replaces the current one.
    pub fn add_sink(&self, sink: Box<dyn Sink>) {
        let kind = sink.kind();
        let target = sink.describe();
        let mut sinks = self.lock();
        let existing = match kind {
            SinkKind::Stream => sinks.iter().position(|s| s.kind() == SinkKind::Stream),
            SinkKind::File => None,
        };
        match existing {
            Some(index) => sinks[index] = sink,
            None => sinks.push(sink),
        }
        tracing::debug!(
            target: "tierlog::logger",
            logger = %self.name,
            %kind,
            %target,
            replaced = existing.is_some(),
            "sink attached"
        );
    }

    /// Number of attached sinks.
    pub fn sink_count(&self) -> usize {
        self.lock().len()
    }

    /// Paths of the attached file sinks in attachment order.
    pub fn file_paths(&self) -> Vec<PathBuf> {
        self.lock()
            .iter()
            .filter(|sink| sink.kind() == SinkKind::File)
            .map(|sink| PathBuf::from(sink.describe()))
            .collect()
    }

    /// Flushes every sink, returning the first failure.
    pub fn flush(&self) -> Result<(), LoggingError> {
        let mut first = None;
        for sink in self.lock().iter_mut() {
            if let Err(error) = sink.flush() {
                first.get_or_insert(error);
            }
        }
        first.map_or(Ok(()), |error| Err(error.into()))
    }

    fn log_file_name(&self, filename: &str) -> String {
        let name = if filename.is_empty() {
            self.name.as_str()
        } else {
            filename
        };
        if name.contains('.') {
            name.to_owned()
        } else {
            format!("{name}.log")
        }
    }
}

/// Hands `record` to every sink. A failing sink is reported to the others as
/// an ERROR record and stays attached.
fn dispatch(sinks: &mut [Box<dyn Sink>], record: &Record<'_>) {
    let mut failures = Vec::new();
    for (index, sink) in sinks.iter_mut().enumerate() {
        if let Err(error) = sink.emit(record) {
            let target = sink.describe();
            tracing::warn!(
                target: "tierlog::logger",
                logger = record.logger,
                sink = %target,
                %error,
                "sink write failed"
            );
            failures.push((index, format!("sink {target} failed: {error}")));
        }
    }

    for (failed, notice) in &failures {
        let report = Record::new(record.logger, Level::ERROR, notice);
        for (index, sink) in sinks.iter_mut().enumerate() {
            if index == *failed {
                continue;
            }
            if let Err(error) = sink.emit(&report) {
                tracing::warn!(
                    target: "tierlog::logger",
                    logger = record.logger,
                    sink = %sink.describe(),
                    %error,
                    "failure notice could not be written"
                );
            }
        }
    }
}

fn describe_error(message: &str, error: &dyn Error) -> String {
    let mut text = format!("{message}: {error}");
    for cause in iter::successors(error.source(), |&cause| cause.source()) {
        text.push_str("\n  caused by: ");
        text.push_str(&cause.to_string());
    }
    text
}
