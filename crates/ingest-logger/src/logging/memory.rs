//! In-memory logger

use parking_lot::Mutex;

use super::level::LogLevel;
use super::traits::Logger;

/// Logger that keeps records in memory, for tests of code that takes a `SharedLogger`
#[derive(Debug)]
pub struct MemoryLogger {
    min_level: LogLevel,
    records: Mutex<Vec<(LogLevel, String)>>,
}

impl Default for MemoryLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryLogger {
    /// Create a memory logger that captures everything
    pub fn new() -> Self {
        Self::with_level(LogLevel::Debug)
    }

    /// Create a memory logger that drops records below `min_level`
    pub fn with_level(min_level: LogLevel) -> Self {
        Self {
            min_level,
            records: Mutex::new(Vec::new()),
        }
    }

    /// Captured records, oldest first
    pub fn records(&self) -> Vec<(LogLevel, String)> {
        self.records.lock().clone()
    }

    /// Whether any captured record at `level` contains `needle`
    pub fn contains(&self, level: LogLevel, needle: &str) -> bool {
        self.records
            .lock()
            .iter()
            .any(|(l, message)| *l == level && message.contains(needle))
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Logger for MemoryLogger {
    fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    fn log(&self, level: LogLevel, message: &str) {
        if self.enabled(level) {
            self.records.lock().push((level, message.to_string()));
        }
    }
}
