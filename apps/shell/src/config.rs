//! # Shell Configuration
//!
//! Read once at startup from the environment.
//!
//! ## Configuration Sources (Priority Order)
//! 1. `STUMPCALC_DATA_DIR` / `STUMPCALC_LOG`
//! 2. `RUST_LOG` (log filter only)
//! 3. Platform defaults (this file)
//!
//! ## Platform Data Directories
//! - **macOS**: `~/Library/Application Support/ca.forest-city.stumpcalc`
//! - **Windows**: `%APPDATA%\forest-city\stumpcalc\data`
//! - **Linux**: `~/.local/share/stumpcalc`

use std::path::PathBuf;

use directories::ProjectDirs;
use thiserror::Error;

/// Filter used when neither `STUMPCALC_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "info,stump_store=debug,stumpcalc_shell=debug";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not determine app data directory; set STUMPCALC_DATA_DIR")]
    NoDataDir,
}

/// Startup configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory holding the slot files.
    pub data_dir: PathBuf,

    /// `tracing_subscriber::EnvFilter` directive string.
    pub log_filter: String,
}

impl AppConfig {
    /// Reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any variable source.
    ///
    /// ## Example
    /// ```rust
    /// use stumpcalc_shell::config::AppConfig;
    ///
    /// let config = AppConfig::from_lookup(|key| match key {
    ///     "STUMPCALC_DATA_DIR" => Some("/srv/stumpcalc".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// assert_eq!(config.data_dir.to_str(), Some("/srv/stumpcalc"));
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let data_dir = match non_empty("STUMPCALC_DATA_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => ProjectDirs::from("ca", "forest-city", "stumpcalc")
                .ok_or(ConfigError::NoDataDir)?
                .data_dir()
                .to_path_buf(),
        };

        let log_filter = non_empty("STUMPCALC_LOG")
            .or_else(|| non_empty("RUST_LOG"))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(AppConfig {
            data_dir,
            log_filter,
        })
    }
}
