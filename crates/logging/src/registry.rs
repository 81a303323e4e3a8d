//! crates/logging/src/registry.rs

use std::collections::BTreeMap;
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use levels::Level;

use crate::logger::{StreamFactory, stdout_factory, writer_factory};
use crate::{Logger, LoggerOptions, LoggingError};

static GLOBAL: OnceLock<LoggerRegistry> = OnceLock::new();

/// Name-keyed store guaranteeing one [`Logger`] per name.
pub struct LoggerRegistry {
    loggers: Mutex<BTreeMap<String, Arc<Logger>>>,
    stream_factory: StreamFactory,
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LoggerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerRegistry")
            .field("loggers", &self.names())
            .finish_non_exhaustive()
    }
}

impl LoggerRegistry {
    /// Empty registry whose stream sinks write to stdout.
    pub fn new() -> Self {
        Self::with_stream_factory(stdout_factory())
    }

    /// Empty registry whose stream sinks write to writers from `make_writer`.
    pub fn with_stream_writer<W, F>(make_writer: F) -> Self
    where
        W: Write + Send + 'static,
        F: Fn() -> W + Send + Sync + 'static,
    {
        Self::with_stream_factory(writer_factory(make_writer))
    }

    /// Empty registry using `factory` for stream sinks.
    pub fn with_stream_factory(factory: StreamFactory) -> Self {
        Self {
            loggers: Mutex::new(BTreeMap::new()),
            stream_factory: factory,
        }
    }

    /// The process-wide registry, created on first use.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(Self::new)
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, Arc<Logger>>> {
        self.loggers.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the logger named `name`, creating it from `options` if absent.
    ///
    /// Options are ignored for an existing logger. A new logger gets its file
    /// sink before its stream sink; if the file cannot be opened nothing is
    /// registered.
    pub fn get_or_create(
        &self,
        name: &str,
        options: &LoggerOptions,
    ) -> Result<Arc<Logger>, LoggingError> {
        self.get_or_create_with(name, options, |_| Ok(()))
    }

    /// Like [`get_or_create`](Self::get_or_create), running `configure` on a
    /// newly built logger before it is registered.
    pub fn get_or_create_with<F>(
        &self,
        name: &str,
        options: &LoggerOptions,
        configure: F,
    ) -> Result<Arc<Logger>, LoggingError>
    where
        F: FnOnce(&Logger) -> Result<(), LoggingError>,
    {
        let mut loggers = self.lock();
        if let Some(existing) = loggers.get(name) {
            return Ok(Arc::clone(existing));
        }

        let logger = Logger::with_stream_factory(name, Arc::clone(&self.stream_factory));
        if options.add_file_sink {
            logger.add_file_handler("", &options.directory, Level::LOWEST)?;
        }
        if options.add_stream_sink {
            logger.add_stream_handler(options.stream_level);
        }
        configure(&logger)?;

        let logger = Arc::new(logger);
        loggers.insert(name.to_owned(), Arc::clone(&logger));
        tracing::debug!(
            target: "tierlog::registry",
            logger = name,
            sinks = logger.sink_count(),
            "logger created"
        );
        Ok(logger)
    }

    /// The logger named `name`, if registered.
    pub fn get(&self, name: &str) -> Option<Arc<Logger>> {
        self.lock().get(name).cloned()
    }

    /// Whether a logger named `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.lock().contains_key(name)
    }

    /// Registered names in ascending order.
    pub fn names(&self) -> Vec<String> {
        self.lock().keys().cloned().collect()
    }

    /// Number of registered loggers.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no logger is registered.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drops the registry's references. Files close once callers release
    /// their handles.
    pub fn clear(&self) {
        let removed = std::mem::take(&mut *self.lock());
        tracing::debug!(
            target: "tierlog::registry",
            count = removed.len(),
            "registry cleared"
        );
    }

    /// Flushes every registered logger, returning the first failure.
    pub fn flush_all(&self) -> Result<(), LoggingError> {
        let loggers: Vec<Arc<Logger>> = self.lock().values().cloned().collect();
        let mut first = None;
        for logger in loggers {
            if let Err(error) = logger.flush() {
                first.get_or_insert(error);
            }
        }
        first.map_or(Ok(()), Err)
    }
}

/// Returns the logger named `name` from the process-wide registry, creating
/// it from `options` if absent.
pub fn get_logger(name: &str, options: &LoggerOptions) -> Result<Arc<Logger>, LoggingError> {
    LoggerRegistry::global().get_or_create(name, options)
}
