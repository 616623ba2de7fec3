//! Logger configuration value

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;

/// File name used under the temp directory when no explicit path is configured
pub const DEFAULT_LOG_FILE_NAME: &str = "ingest-music.log";

const ENV_LOG_LEVEL: &str = "INGEST_MUSIC_LOG_LEVEL";
const ENV_LOG_FILE: &str = "INGEST_MUSIC_LOG_FILE";
const ENV_DEBUG: &str = "INGEST_MUSIC_DEBUG";

/// Configuration supplied to `FileLogger::initialize`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Minimum level to emit
    pub level: LogLevel,
    /// Explicit log file path; defaults to `<temp dir>/ingest-music.log`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl LoggerConfig {
    pub fn new(level: LogLevel) -> Self {
        Self { level, file: None }
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// The explicit file if set, otherwise the default under the temp directory
    pub fn resolved_path(&self) -> PathBuf {
        match &self.file {
            Some(path) => path.clone(),
            None => std::env::temp_dir().join(DEFAULT_LOG_FILE_NAME),
        }
    }

    /// Apply `INGEST_MUSIC_*` environment overrides
    pub fn apply_env(self) -> Self {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// Invalid level names are ignored. A truthy debug flag wins over the level name.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL).and_then(|v| v.parse().ok()) {
            self.level = level;
        }
        if let Some(file) = lookup(ENV_LOG_FILE).filter(|v| !v.trim().is_empty()) {
            self.file = Some(PathBuf::from(file));
        }
        let debug = lookup(ENV_DEBUG)
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);
        if debug {
            self.level = LogLevel::Debug;
        }
        self
    }
}
