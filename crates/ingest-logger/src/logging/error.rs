//! Log stream acquisition errors

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while opening the log stream.
///
/// These never reach callers of `FileLogger::initialize`; they are reported on
/// stderr and the logger degrades to discarding records.
#[derive(Error, Debug)]
pub enum LoggerError {
    /// The parent directory of the log file could not be created
    #[error("failed to create log directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The log file could not be opened for appending
    #[error("failed to open log file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub(crate) type LoggerResult<T> = Result<T, LoggerError>;
