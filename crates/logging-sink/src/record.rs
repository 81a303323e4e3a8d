use levels::Level;
use time::OffsetDateTime;
use time::format_description::FormatItem;
use time::macros::format_description;

/// Timestamp layout used by [`RecordFormat::Detailed`]: `2024-05-01 13:45:07,042`.
pub const TIMESTAMP_FORMAT: &[FormatItem<'static>] = format_description!(
    "[year]-[month padding:zero]-[day padding:zero] [hour padding:zero]:[minute padding:zero]:[second padding:zero],[subsecond digits:3]"
);

/// Returns the current time in the local offset, falling back to UTC when the
/// offset cannot be determined (for example in multi-threaded processes on
/// some Unix platforms).
#[must_use]
pub fn now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// Renders `timestamp` with [`TIMESTAMP_FORMAT`].
#[must_use]
pub fn format_timestamp(timestamp: OffsetDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).unwrap_or_default()
}

/// A single message travelling from a logger to its sinks.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Record<'a> {
    /// Name of the emitting logger.
    pub logger: &'a str,
    /// Severity rank of the message.
    pub level: Level,
    /// Message body.
    pub message: &'a str,
    /// Creation time of the record.
    pub timestamp: OffsetDateTime,
}

impl<'a> Record<'a> {
    /// Creates a record stamped with the current time.
    #[must_use]
    pub fn new(logger: &'a str, level: Level, message: &'a str) -> Self {
        Self::with_timestamp(logger, level, message, now())
    }

    /// Creates a record with an explicit timestamp.
    #[must_use]
    pub const fn with_timestamp(
        logger: &'a str,
        level: Level,
        message: &'a str,
        timestamp: OffsetDateTime,
    ) -> Self {
        Self {
            logger,
            level,
            message,
            timestamp,
        }
    }
}

/// Line layout a sink applies to records.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum RecordFormat {
    /// Only the message body.
    #[default]
    MessageOnly,
    /// `timestamp - logger - LEVELNAME - message`.
    Detailed,
}

impl RecordFormat {
    /// Renders `record` as one newline-terminated line.
    #[must_use]
    pub fn render(self, record: &Record<'_>) -> String {
        match self {
            Self::MessageOnly => format!("{}\n", record.message),
            Self::Detailed => format!(
                "{} - {} - {} - {}\n",
                format_timestamp(record.timestamp),
                record.logger,
                record.level.name(),
                record.message
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn fixed(level: Level, message: &str) -> Record<'_> {
        Record::with_timestamp("main", level, message, datetime!(2024-05-01 13:45:07.042 UTC))
    }

    #[test]
    fn message_only_renders_body_and_newline() {
        let record = fixed(Level::INFO, "hello");
        assert_eq!(RecordFormat::MessageOnly.render(&record), "hello\n");
    }

    #[test]
    fn detailed_renders_all_fields() {
        let record = fixed(Level::IMPORTANT_INFO, "stage complete");
        assert_eq!(
            RecordFormat::Detailed.render(&record),
            "2024-05-01 13:45:07,042 - main - IMPORTANTINFO - stage complete\n"
        );
    }

    #[test]
    fn detailed_uses_fallback_name_for_unnamed_ranks() {
        let record = fixed(Level::new(77), "odd");
        assert!(
            RecordFormat::Detailed
                .render(&record)
                .ends_with(" - main - Level 77 - odd\n")
        );
    }

    #[test]
    fn timestamp_pads_milliseconds() {
        let stamp = format_timestamp(datetime!(2023-01-02 03:04:05.006 UTC));
        assert_eq!(stamp, "2023-01-02 03:04:05,006");
    }

    #[test]
    fn default_format_is_message_only() {
        assert_eq!(RecordFormat::default(), RecordFormat::MessageOnly);
    }
}
