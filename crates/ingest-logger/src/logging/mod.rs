//! Leveled logging to a session log file

mod error;
mod level;
mod memory;
mod traits;
pub mod file_logger;

pub use error::LoggerError;
pub use level::LogLevel;
pub use memory::MemoryLogger;
pub use traits::{Logger, SharedLogger};

pub use file_logger::{global, CurlBody, FileLogger};
