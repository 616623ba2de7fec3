//! File-based logger configuration (YAML)
//!
//! The host application keeps a `logging:` section in its user-level config
//! (`~/.config/ingest-music/config.yaml` on Linux).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::ConfigResult;
use super::logger_config::LoggerConfig;

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Logger settings
    #[serde(default)]
    pub logging: LoggerConfig,
}

impl ConfigFile {
    /// User-level config path (`<config dir>/ingest-music/config.yaml`)
    pub fn user_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        config_dir.join("ingest-music").join("config.yaml")
    }

    /// Load config from file, falling back to defaults when it doesn't exist
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string
    pub fn from_yaml(content: &str) -> ConfigResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load the user-level config and apply environment overrides
    pub fn load_user_logging() -> ConfigResult<LoggerConfig> {
        let file = Self::load(Self::user_path())?;
        Ok(file.logging.apply_env())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::logging::LogLevel;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = ConfigFile::load(dir.path().join("config.yaml")).unwrap();
        assert_eq!(config, ConfigFile::default());
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_load_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "logging:\n  level: debug\n  file: /tmp/ingest/debug.log\n").unwrap();

        let config = ConfigFile::load(&path).unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/ingest/debug.log")));
    }

    #[test]
    fn test_partial_section() {
        let config = ConfigFile::from_yaml("logging:\n  level: warn\n").unwrap();
        assert_eq!(config.logging.level, LogLevel::Warn);
        assert!(config.logging.file.is_none());

        let empty = ConfigFile::from_yaml("").unwrap();
        assert_eq!(empty, ConfigFile::default());
    }

    #[test]
    fn test_unknown_level_rejected() {
        let result = ConfigFile::from_yaml("logging:\n  level: chatty\n");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    // The only test that mutates the process environment
    #[cfg(target_os = "linux")]
    #[test]
    fn test_load_user_logging_with_env() {
        let dir = tempdir().unwrap();
        let config_dir = dir.path().join("ingest-music");
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(config_dir.join("config.yaml"), "logging:\n  level: warn\n").unwrap();
        let log_file = dir.path().join("env.log");

        std::env::set_var("XDG_CONFIG_HOME", dir.path());
        assert_eq!(ConfigFile::user_path(), config_dir.join("config.yaml"));

        let from_file = ConfigFile::load_user_logging().unwrap();
        assert_eq!(from_file.level, LogLevel::Warn);
        assert!(from_file.file.is_none());

        std::env::set_var("INGEST_MUSIC_LOG_LEVEL", "error");
        std::env::set_var("INGEST_MUSIC_LOG_FILE", &log_file);
        let overridden = ConfigFile::load_user_logging().unwrap();
        assert_eq!(overridden.level, LogLevel::Error);
        assert_eq!(overridden.file, Some(log_file.clone()));

        std::env::set_var("INGEST_MUSIC_DEBUG", "1");
        let debug = LoggerConfig::default().apply_env();
        assert_eq!(debug.level, LogLevel::Debug);
        assert_eq!(debug.resolved_path(), log_file);

        for key in ["INGEST_MUSIC_LOG_LEVEL", "INGEST_MUSIC_LOG_FILE", "INGEST_MUSIC_DEBUG", "XDG_CONFIG_HOME"] {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn test_user_path() {
        let path = ConfigFile::user_path();
        assert!(path.ends_with("ingest-music/config.yaml"));
    }
}
