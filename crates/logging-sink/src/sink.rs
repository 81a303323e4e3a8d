use std::fmt;

use levels::Level;

use crate::{Record, RecordFormat, SinkError};

/// Destination category; a logger keeps at most one [`SinkKind::Stream`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SinkKind {
    /// Interactive output such as stdout.
    Stream,
    /// Persistent append-only file.
    File,
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Stream => "stream",
            Self::File => "file",
        })
    }
}

/// A threshold-filtered destination for [`Record`]s.
///
/// Implementors supply the raw [`write_line`](Sink::write_line) and the
/// accessors; [`emit`](Sink::emit) provides the filtering and formatting.
pub trait Sink: Send {
    /// Category of this sink.
    fn kind(&self) -> SinkKind;

    /// Minimum rank accepted.
    fn threshold(&self) -> Level;

    /// Replaces the minimum rank accepted.
    fn set_threshold(&mut self, level: Level);

    /// Layout applied to accepted records.
    fn format(&self) -> RecordFormat;

    /// Human readable target, e.g. `<stdout>` or a file path.
    fn describe(&self) -> String;

    /// Writes one already rendered line.
    fn write_line(&mut self, line: &str) -> Result<(), SinkError>;

    /// Flushes any data buffered by the destination.
    fn flush(&mut self) -> Result<(), SinkError>;

    /// Returns `true` when a record at `level` passes the threshold.
    fn should_accept(&self, level: Level) -> bool {
        self.threshold().admits(level)
    }

    /// Writes `record` if accepted. Returns whether it was written.
    fn emit(&mut self, record: &Record<'_>) -> Result<bool, SinkError> {
        if !self.should_accept(record.level) {
            return Ok(false);
        }
        let line = self.format().render(record);
        self.write_line(&line)?;
        Ok(true)
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn kind(&self) -> SinkKind {
        (**self).kind()
    }

    fn threshold(&self) -> Level {
        (**self).threshold()
    }

    fn set_threshold(&mut self, level: Level) {
        (**self).set_threshold(level);
    }

    fn format(&self) -> RecordFormat {
        (**self).format()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }

    fn write_line(&mut self, line: &str) -> Result<(), SinkError> {
        (**self).write_line(line)
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        (**self).flush()
    }

    fn should_accept(&self, level: Level) -> bool {
        (**self).should_accept(level)
    }

    fn emit(&mut self, record: &Record<'_>) -> Result<bool, SinkError> {
        (**self).emit(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Collecting {
        threshold: Level,
        lines: Vec<String>,
    }

    impl Sink for Collecting {
        fn kind(&self) -> SinkKind {
            SinkKind::Stream
        }

        fn threshold(&self) -> Level {
            self.threshold
        }

        fn set_threshold(&mut self, level: Level) {
            self.threshold = level;
        }

        fn format(&self) -> RecordFormat {
            RecordFormat::MessageOnly
        }

        fn describe(&self) -> String {
            "<memory>".to_owned()
        }

        fn write_line(&mut self, line: &str) -> Result<(), SinkError> {
            self.lines.push(line.to_owned());
            Ok(())
        }

        fn flush(&mut self) -> Result<(), SinkError> {
            Ok(())
        }
    }

    #[test]
    fn emit_filters_below_threshold() {
        let mut sink = Collecting {
            threshold: Level::INFO,
            lines: Vec::new(),
        };
        assert!(!sink.emit(&Record::new("t", Level::DEBUG, "dropped")).unwrap());
        assert!(sink.emit(&Record::new("t", Level::INFO, "kept")).unwrap());
        assert_eq!(sink.lines, vec!["kept\n"]);
    }

    #[test]
    fn boxed_sink_forwards_threshold_changes() {
        let mut sink: Box<dyn Sink> = Box::new(Collecting {
            threshold: Level::INFO,
            lines: Vec::new(),
        });
        sink.set_threshold(Level::new(51));
        assert_eq!(sink.threshold(), Level::new(51));
        assert!(!sink.should_accept(Level::CRITICAL));
        assert!(sink.should_accept(Level::RAISE_MSG));
    }

    #[test]
    fn kind_display() {
        assert_eq!(SinkKind::Stream.to_string(), "stream");
        assert_eq!(SinkKind::File.to_string(), "file");
    }
}
