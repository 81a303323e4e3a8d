//! crates/logging/src/macros.rs
//! `format!`-style wrappers around the [`Logger`](crate::Logger) emit methods.

/// Emit a formatted message at an arbitrary level.
///
/// # Example
/// ```
/// use logging::{Logger, tier_log};
///
/// let logger = Logger::new("doc");
/// tier_log!(logger, 15u8, "step {} of {}", 1, 3);
/// ```
#[macro_export]
macro_rules! tier_log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, &::std::format!($($arg)+))
    };
}

/// Emit a formatted RAISEMSG (99) message.
#[macro_export]
macro_rules! tier_raise {
    ($logger:expr, $($arg:tt)+) => {
        $logger.raise(&::std::format!($($arg)+))
    };
}

/// Emit a formatted CRITICAL (50) message.
#[macro_export]
macro_rules! tier_critical {
    ($logger:expr, $($arg:tt)+) => {
        $logger.critical(&::std::format!($($arg)+))
    };
}

/// Emit a formatted ERROR (40) message.
#[macro_export]
macro_rules! tier_error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(&::std::format!($($arg)+))
    };
}

/// Emit a formatted WARNING (30) message.
#[macro_export]
macro_rules! tier_warning {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warning(&::std::format!($($arg)+))
    };
}

/// Emit a formatted IMPORTANTINFO (25) message.
///
/// # Example
/// ```ignore
/// tier_important!(log, "stage {} complete", stage);
/// ```
#[macro_export]
macro_rules! tier_important {
    ($logger:expr, $($arg:tt)+) => {
        $logger.important_info(&::std::format!($($arg)+))
    };
}

/// Emit a formatted INFO (20) message.
#[macro_export]
macro_rules! tier_info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(&::std::format!($($arg)+))
    };
}

/// Emit a formatted DEBUG (10) message.
#[macro_export]
macro_rules! tier_debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(&::std::format!($($arg)+))
    };
}

/// Emit a formatted FILEONLY (1) message.
///
/// # Example
/// ```ignore
/// tier_file_only!(log, "resolved {} paths", count);
/// ```
#[macro_export]
macro_rules! tier_file_only {
    ($logger:expr, $($arg:tt)+) => {
        $logger.file_only(&::std::format!($($arg)+))
    };
}
