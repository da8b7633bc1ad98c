//! Process-wide read-only configuration: endpoint base, page size, timeout.
//!
//! Resolved once at startup: built-in defaults, overlaid by an optional
//! TOML file at `$XDG_CONFIG_HOME/tomescout/config.toml`, overlaid in turn
//! by CLI flags (applied in `main`). Nothing here changes after startup.

use std::path::{Path, PathBuf};

use miette::Diagnostic;
use serde::Deserialize;
use thiserror::Error;

/// Default catalog endpoint (Google Books volumes search).
pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/books/v1/volumes";

/// Default result-window size per request.
pub const DEFAULT_PAGE_SIZE: u64 = 12;

/// Default outbound request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Errors from configuration loading.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read config file: {path}")]
    #[diagnostic(
        code(tome::config::read),
        help("Check that the file exists and you have read permissions.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {path}")]
    #[diagnostic(
        code(tome::config::parse),
        help(
            "The file must be valid TOML. Recognized keys: endpoint (string), \
             page_size (integer), timeout_secs (integer)."
        )
    )]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Convenience alias for configuration results.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the volumes search endpoint.
    pub endpoint: String,
    /// Number of results per page (`maxResults`).
    pub page_size: u64,
    /// Outbound request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Partial on-disk representation; absent keys fall back to defaults.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    endpoint: Option<String>,
    page_size: Option<u64>,
    timeout_secs: Option<u64>,
}

impl AppConfig {
    /// Load configuration from the XDG config file, if one exists.
    ///
    /// A missing file (or an unresolvable home directory) yields the
    /// defaults; an unreadable or malformed file is an error.
    pub fn load() -> ConfigResult<Self> {
        match config_file() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific TOML file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let data = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        let file: FileConfig = toml::from_str(&data).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            source: e,
        })?;

        let mut config = Self::default();
        if let Some(endpoint) = file.endpoint {
            config.endpoint = endpoint;
        }
        if let Some(page_size) = file.page_size {
            config.page_size = page_size;
        }
        if let Some(timeout_secs) = file.timeout_secs {
            config.timeout_secs = timeout_secs;
        }
        Ok(config)
    }
}

/// `$XDG_CONFIG_HOME/tomescout/config.toml`, falling back to `~/.config`.
fn config_file() -> Option<PathBuf> {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| std::env::var("HOME").map(|home| PathBuf::from(home).join(".config")))
        .ok()?;
    Some(base.join("tomescout").join("config.toml"))
}
