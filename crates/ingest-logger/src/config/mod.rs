//! Logger configuration
//!
//! Sources, applied in order:
//! - `ConfigFile`: YAML file with a `logging:` section (user level)
//! - Environment overrides (`INGEST_MUSIC_LOG_LEVEL`, `INGEST_MUSIC_LOG_FILE`, `INGEST_MUSIC_DEBUG`)

mod error;
mod file;
mod logger_config;

pub use error::{ConfigError, ConfigResult};
pub use file::ConfigFile;
pub use logger_config::{LoggerConfig, DEFAULT_LOG_FILE_NAME};
