//! File-based session logger
//!
//! Appends leveled records to a single log file. This is the only destination:
//! nothing is written to stdout/stderr except when the log file itself can't be
//! opened. Each open file is bracketed by session start/end marker lines:
//!
//! ```text
//!
//! [2026-10-18T09:14:03.512Z] New session started
//! [2026-10-18T09:14:03.514Z] [INFO] Scanning library
//! [2026-10-18T09:14:03.530Z] [DEBUG] API Response from musicbrainz:
//! {
//!   "count": 1
//! }
//! [2026-10-18T09:14:04.001Z] Session ended
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use serde::Serialize;

use super::error::{LoggerError, LoggerResult};
use super::level::LogLevel;
use super::traits::{with_details, Logger};
use crate::config::LoggerConfig;

/// Request body for `FileLogger::log_curl`
#[derive(Debug, Clone, Copy)]
pub enum CurlBody<'a> {
    /// Used verbatim
    Text(&'a str),
    /// Serialized compactly, unless it is a JSON string
    Json(&'a serde_json::Value),
}

impl CurlBody<'_> {
    fn render(&self) -> String {
        match self {
            CurlBody::Text(text) => (*text).to_string(),
            CurlBody::Json(serde_json::Value::String(text)) => text.clone(),
            CurlBody::Json(value) => value.to_string(),
        }
    }
}

impl<'a> From<&'a str> for CurlBody<'a> {
    fn from(text: &'a str) -> Self {
        CurlBody::Text(text)
    }
}

impl<'a> From<&'a serde_json::Value> for CurlBody<'a> {
    fn from(value: &'a serde_json::Value) -> Self {
        CurlBody::Json(value)
    }
}

/// The open append-mode log file
struct LogStream {
    file: File,
    path: PathBuf,
}

impl LogStream {
    fn open(path: &Path) -> LoggerResult<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| LoggerError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| LoggerError::Open {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    // Failed writes are dropped
    fn write_line(&mut self, line: &str) {
        let _ = writeln!(self.file, "{}", line);
        let _ = self.file.flush();
    }
}

struct FileLoggerState {
    config: LoggerConfig,
    stream: Option<LogStream>,
}

impl FileLoggerState {
    fn should_emit(&self, level: LogLevel) -> bool {
        level.priority() >= self.config.level.priority()
    }

    fn write(&mut self, level: LogLevel, message: &str) {
        if !self.should_emit(level) {
            return;
        }
        if let Some(stream) = self.stream.as_mut() {
            stream.write_line(&format_record(level, message));
        }
    }

    fn close_stream(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            stream.write_line(&format!("[{}] Session ended", timestamp()));
        }
    }
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn format_record(level: LogLevel, message: &str) -> String {
    format!("[{}] [{}] {}", timestamp(), level, message)
}

/// Process-wide file logger
///
/// Use [`global`] for the shared instance, or construct one with
/// [`FileLogger::new`] and hand it out as a [`SharedLogger`](super::SharedLogger).
/// Until [`initialize`](FileLogger::initialize) succeeds every record is discarded.
pub struct FileLogger {
    state: Mutex<FileLoggerState>,
}

impl Default for FileLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl FileLogger {
    /// Create a logger with the default configuration and no open file
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FileLoggerState {
                config: LoggerConfig::default(),
                stream: None,
            }),
        }
    }

    /// Apply `config` and open its log file.
    ///
    /// Any previously open file gets its session end marker and is closed first.
    /// The configuration is replaced even when opening fails; in that case the
    /// failure goes to stderr and the logger discards records until the next
    /// successful call. Returns whether a log file is open afterwards.
    pub fn initialize(&self, config: LoggerConfig) -> bool {
        let mut state = self.state.lock();
        state.close_stream();

        let path = config.resolved_path();
        state.config = config;

        match LogStream::open(&path) {
            Ok(mut stream) => {
                stream.write_line(&format!("\n[{}] New session started", timestamp()));
                state.stream = Some(stream);
                true
            }
            Err(e) => {
                eprintln!("[ingest-logger] {}", e);
                false
            }
        }
    }

    /// Write the session end marker and close the log file. No-op when closed.
    pub fn close(&self) {
        self.state.lock().close_stream();
    }

    pub fn is_open(&self) -> bool {
        self.state.lock().stream.is_some()
    }

    /// Path of the currently open log file
    pub fn path(&self) -> Option<PathBuf> {
        self.state.lock().stream.as_ref().map(|s| s.path.clone())
    }

    pub fn level(&self) -> LogLevel {
        self.state.lock().config.level
    }

    pub fn set_level(&self, level: LogLevel) {
        self.state.lock().config.level = level;
    }

    /// Toggle between debug and info level
    pub fn set_debug(&self, enabled: bool) {
        self.set_level(if enabled { LogLevel::Debug } else { LogLevel::Info });
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.level() == LogLevel::Debug
    }

    /// Whether a record at `level` passes the configured threshold
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.state.lock().should_emit(level)
    }

    /// Write a record if `level` passes the configured threshold
    pub fn log(&self, level: LogLevel, message: &str) {
        self.state.lock().write(level, message);
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    /// Debug record with a pretty-printed payload on the following lines
    pub fn debug_with<T: Serialize + ?Sized>(&self, message: &str, data: &T) {
        if !self.enabled(LogLevel::Debug) {
            return;
        }
        let payload = self.to_pretty_json(data);
        self.log(LogLevel::Debug, &with_details(message, &payload));
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    /// Error record followed by the error text and its `source()` chain
    pub fn error_with_cause(&self, message: &str, err: &dyn std::error::Error) {
        if !self.enabled(LogLevel::Error) {
            return;
        }
        let mut details = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            details.push_str(&format!("\ncaused by: {}", cause));
            source = cause.source();
        }
        self.log(LogLevel::Error, &with_details(message, &details));
    }

    /// Error record with a pretty-printed payload on the following lines
    pub fn error_with_data<T: Serialize + ?Sized>(&self, message: &str, data: &T) {
        if !self.enabled(LogLevel::Error) {
            return;
        }
        let payload = self.to_pretty_json(data);
        self.log(LogLevel::Error, &with_details(message, &payload));
    }

    /// Record an outbound HTTP request as a curl command (debug level only)
    pub fn log_curl(&self, method: &str, url: &str, headers: &[(&str, &str)], body: Option<CurlBody<'_>>) {
        if !self.enabled(LogLevel::Debug) {
            return;
        }

        let mut curl = format!("curl -X {} '{}'", method, url);
        for (key, value) in headers {
            curl.push_str(&format!(" \\\n  -H '{}: {}'", key, value));
        }
        if let Some(body) = body {
            curl.push_str(&format!(" \\\n  -d '{}'", body.render()));
        }

        self.debug(&with_details("API Request (curl):", &curl));
    }

    /// Record an API response payload (debug level only)
    pub fn log_api_response<T: Serialize + ?Sized>(&self, api_name: &str, response: &T) {
        self.debug_with(&format!("API Response from {}:", api_name), response);
    }

    fn to_pretty_json<T: Serialize + ?Sized>(&self, data: &T) -> String {
        match serde_json::to_string_pretty(data) {
            Ok(json) => json,
            Err(e) => {
                self.warn(&format!("Failed to serialize log payload: {}", e));
                format!("<unserializable: {}>", e)
            }
        }
    }
}

impl std::fmt::Debug for FileLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("FileLogger")
            .field("level", &state.config.level)
            .field("path", &state.stream.as_ref().map(|s| &s.path))
            .finish()
    }
}

impl Logger for FileLogger {
    fn enabled(&self, level: LogLevel) -> bool {
        FileLogger::enabled(self, level)
    }

    fn log(&self, level: LogLevel, message: &str) {
        FileLogger::log(self, level, message);
    }
}

/// Global logger instance
static LOGGER: Lazy<FileLogger> = Lazy::new(FileLogger::new);

/// The process-wide logger
pub fn global() -> &'static FileLogger {
    &LOGGER
}

/// Convenience macros for logging to the global logger
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        let logger = $crate::logging::file_logger::global();
        if logger.enabled($crate::logging::LogLevel::Debug) {
            logger.log($crate::logging::LogLevel::Debug, &format!($($arg)*));
        }
    }};
}

#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{
        let logger = $crate::logging::file_logger::global();
        if logger.enabled($crate::logging::LogLevel::Info) {
            logger.log($crate::logging::LogLevel::Info, &format!($($arg)*));
        }
    }};
}

#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {{
        let logger = $crate::logging::file_logger::global();
        if logger.enabled($crate::logging::LogLevel::Warn) {
            logger.log($crate::logging::LogLevel::Warn, &format!($($arg)*));
        }
    }};
}

#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {{
        let logger = $crate::logging::file_logger::global();
        if logger.enabled($crate::logging::LogLevel::Error) {
            logger.log($crate::logging::LogLevel::Error, &format!($($arg)*));
        }
    }};
}
