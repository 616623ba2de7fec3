//! Logger trait definition

use std::sync::Arc;

use super::level::LogLevel;

/// Logger abstraction for code that takes an injected logger
///
/// Implementations:
/// - `FileLogger`: Appends to the session log file
/// - `MemoryLogger`: Captures records in memory for tests
///
/// Only `enabled` and `log` are required. Callers should check `enabled`
/// before building expensive messages; the `log_*!` macros do that for them.
pub trait Logger: Send + Sync {
    /// Whether a record at `level` would be kept
    fn enabled(&self, level: LogLevel) -> bool;

    /// Write a record; implementations drop it when `level` isn't enabled
    fn log(&self, level: LogLevel, message: &str);

    fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    /// Record with a pretty-printed JSON payload on the continuation lines.
    /// The payload isn't rendered when `level` is filtered out.
    fn log_value(&self, level: LogLevel, message: &str, payload: &serde_json::Value) {
        if !self.enabled(level) {
            return;
        }
        // Value serialization can't fail: keys are always strings
        let rendered = serde_json::to_string_pretty(payload).unwrap_or_default();
        self.log(level, &with_details(message, &rendered));
    }
}

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

/// Append `details` below `message`, each detail line indented two spaces
pub(crate) fn with_details(message: &str, details: &str) -> String {
    let mut record = String::from(message);
    for line in details.lines() {
        record.push_str("\n  ");
        record.push_str(line);
    }
    record
}

/// Log at `level` through an injected logger; arguments are only formatted
/// when the level is enabled
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $level:expr, $($arg:tt)*) => {{
        let logger = &$logger;
        let level = $level;
        if logger.enabled(level) {
            logger.log(level, &format!($($arg)*));
        }
    }};
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log_at!($logger, $crate::logging::LogLevel::Debug, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log_at!($logger, $crate::logging::LogLevel::Info, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log_at!($logger, $crate::logging::LogLevel::Warn, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log_at!($logger, $crate::logging::LogLevel::Error, $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_details_indents_every_line() {
        assert_eq!(with_details("boom", "oops"), "boom\n  oops");
        assert_eq!(
            with_details("Parsed", "{\n  \"k\": 1\n}"),
            "Parsed\n  {\n    \"k\": 1\n  }"
        );
        assert_eq!(with_details("plain", ""), "plain");
    }
}
