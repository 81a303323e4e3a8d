use std::io::{self, Write};

use levels::Level;

use crate::{RecordFormat, Sink, SinkError, SinkKind};

/// Sink writing to an interactive stream, flushed after every record.
///
/// The default layout is [`RecordFormat::MessageOnly`].
pub struct StreamSink<W = Box<dyn Write + Send>> {
    writer: W,
    threshold: Level,
    format: RecordFormat,
    target: String,
}

impl StreamSink {
    /// Stream sink on the process's standard output.
    #[must_use]
    pub fn stdout(threshold: Level) -> Self {
        Self::new(Box::new(io::stdout()) as Box<dyn Write + Send>, threshold)
            .with_target("<stdout>")
    }

    /// Stream sink on the process's standard error.
    #[must_use]
    pub fn stderr(threshold: Level) -> Self {
        Self::new(Box::new(io::stderr()) as Box<dyn Write + Send>, threshold)
            .with_target("<stderr>")
    }
}

impl<W: Write + Send> StreamSink<W> {
    /// Wraps an arbitrary writer.
    pub fn new(writer: W, threshold: Level) -> Self {
        Self {
            writer,
            threshold,
            format: RecordFormat::MessageOnly,
            target: "<stream>".to_owned(),
        }
    }

    /// Replaces the record layout.
    #[must_use]
    pub fn with_format(mut self, format: RecordFormat) -> Self {
        self.format = format;
        self
    }

    /// Replaces the label reported by [`Sink::describe`].
    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Sink for StreamSink<W> {
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
        self.format
    }

    fn describe(&self) -> String {
        self.target.clone()
    }

    fn write_line(&mut self, line: &str) -> Result<(), SinkError> {
        self.writer
            .write_all(line.as_bytes())
            .map_err(|source| SinkError::Write {
                target: self.target.clone(),
                source,
            })?;
        self.flush()
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        self.writer.flush().map_err(|source| SinkError::Flush {
            target: self.target.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Record;
    use test_support::{FailingWriter, SharedBuffer};

    #[test]
    fn writes_message_body_only() {
        let buffer = SharedBuffer::new();
        let mut sink = StreamSink::new(buffer.clone(), Level::INFO);
        sink.emit(&Record::new("main", Level::WARNING, "careful"))
            .unwrap();
        assert_eq!(buffer.contents(), "careful\n");
    }

    #[test]
    fn threshold_is_inclusive() {
        let buffer = SharedBuffer::new();
        let mut sink = StreamSink::new(buffer.clone(), Level::IMPORTANT_INFO);
        assert!(!sink.emit(&Record::new("main", Level::INFO, "below")).unwrap());
        assert!(
            sink.emit(&Record::new("main", Level::IMPORTANT_INFO, "equal"))
                .unwrap()
        );
        assert_eq!(buffer.lines(), vec!["equal"]);
    }

    #[test]
    fn detailed_format_can_be_selected() {
        let mut sink =
            StreamSink::new(Vec::new(), Level::DEBUG).with_format(RecordFormat::Detailed);
        sink.emit(&Record::new("svc", Level::ERROR, "boom")).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert!(text.ends_with(" - svc - ERROR - boom\n"), "{text}");
    }

    #[test]
    fn write_failure_is_reported_not_panicked() {
        let mut sink = StreamSink::new(FailingWriter::broken_pipe(), Level::INFO);
        let error = sink
            .emit(&Record::new("main", Level::ERROR, "lost"))
            .unwrap_err();
        assert!(matches!(error, SinkError::Write { ref target, .. } if target == "<stream>"));
    }

    #[test]
    fn standard_streams_describe_themselves() {
        assert_eq!(StreamSink::stdout(Level::INFO).describe(), "<stdout>");
        assert_eq!(StreamSink::stderr(Level::INFO).describe(), "<stderr>");
        assert_eq!(StreamSink::stdout(Level::INFO).kind(), SinkKind::Stream);
    }
}
