//! Ingest Logger
//!
//! Process-wide file logger for the ingest-music application: leveled records,
//! structured payload dumps, and debug-only dumps of outbound HTTP calls.
//! All output goes to one append-only log file; console output is never produced
//! except to report that the log file could not be opened.
//!
//! ```rust,no_run
//! use ingest_logger::{global, ConfigFile, CurlBody};
//!
//! let config = ConfigFile::load_user_logging().unwrap_or_default();
//! let logger = global();
//! logger.initialize(config);
//!
//! logger.info("Scanning library");
//! let body = serde_json::json!({ "query": "Pastel Blues" });
//! logger.log_curl("POST", "https://api.example.com/search", &[("Accept", "application/json")], Some(CurlBody::Json(&body)));
//!
//! logger.close();
//! ```

pub mod config;
pub mod logging;

pub use config::{ConfigError, ConfigFile, ConfigResult, LoggerConfig};
pub use logging::{
    global, CurlBody, FileLogger, LogLevel, Logger, LoggerError, MemoryLogger, SharedLogger,
};
