//! Store configuration
//!
//! # Environment variables
//!
//! All settings can be overridden via environment variables:
//!
//! | Variable | Default | Purpose |
//! |----------|---------|---------|
//! | DATA_DIR | ./data | Directory holding the database file |
//! | LOG_LEVEL | info | Log verbosity |
//! | LOG_DIR | (unset) | Daily-rolling log file directory |

use std::path::PathBuf;

/// Database file name inside the data directory
const DB_FILE: &str = "directory.redb";

#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding the database file
    pub data_dir: String,
    /// Log verbosity: trace | debug | info | warn | error
    pub log_level: String,
    /// Optional directory for rolling log files
    pub log_dir: Option<String>,
}

impl StoreConfig {
    /// Load configuration from environment variables, with defaults
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// Override the data directory
    ///
    /// Commonly used in tests and examples with a temp directory.
    pub fn with_overrides(data_dir: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.data_dir = data_dir.into();
        config
    }

    /// Full path of the database file
    pub fn db_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(DB_FILE)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_path_joins_data_dir() {
        let config = StoreConfig::with_overrides("/tmp/directory-test");
        assert_eq!(
            config.db_path(),
            PathBuf::from("/tmp/directory-test/directory.redb")
        );
    }
}
