//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::gateway::{HttpGatewayConfig, DEFAULT_API_BASE};
use crate::labels::{BoardSettings, Language};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub board: BoardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Moments API connection
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds; 0 disables it
    #[serde(default)]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: 0,
        }
    }
}

impl ApiConfig {
    pub fn gateway_config(&self) -> HttpGatewayConfig {
        HttpGatewayConfig {
            base_url: self.base_url.clone(),
            request_timeout_ms: (self.request_timeout_secs > 0)
                .then(|| self.request_timeout_secs * 1000),
        }
    }
}

/// Board variant
#[derive(Debug, Clone, Deserialize)]
pub struct BoardConfig {
    #[serde(default = "default_ratings_enabled")]
    pub ratings_enabled: bool,

    /// Defaults to Portuguese for rated boards, English otherwise
    #[serde(default)]
    pub language: Option<Language>,
}

fn default_ratings_enabled() -> bool {
    true
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            ratings_enabled: default_ratings_enabled(),
            language: None,
        }
    }
}

impl BoardConfig {
    pub fn settings(&self) -> BoardSettings {
        let variant = if self.ratings_enabled {
            BoardSettings::rated()
        } else {
            BoardSettings::plain()
        };

        BoardSettings {
            language: self.language.unwrap_or(variant.language),
            ..variant
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse TOML content
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Config files searched by [`Config::load_default`], highest priority first
    pub fn default_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("moments").join("config.toml")),
            Some(PathBuf::from("./moments.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Load from default locations or environment
    pub fn load_default() -> LoadedConfig {
        Self::load_first(&Self::default_paths())
    }

    /// Load the first of `paths` that exists and parses. Files that exist
    /// but fail to load are returned in `skipped` so the caller can report
    /// them once logging is up.
    pub fn load_first(paths: &[PathBuf]) -> LoadedConfig {
        let mut skipped = Vec::new();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    return LoadedConfig {
                        config,
                        source: Some(path.clone()),
                        skipped,
                    };
                }
                Err(e) => skipped.push(e),
            }
        }

        LoadedConfig {
            config: Self::from_env(),
            source: None,
            skipped,
        }
    }

    /// Apply `MOMENTS_*` overrides read through `lookup`
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("MOMENTS_API_URL") {
            self.api.base_url = url;
        }
        if let Some(timeout) = lookup("MOMENTS_API_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse() {
                self.api.request_timeout_secs = secs;
            }
        }

        if let Some(ratings) = lookup("MOMENTS_RATINGS") {
            if let Some(enabled) = parse_bool(&ratings) {
                self.board.ratings_enabled = enabled;
            }
        }
        if let Some(language) = lookup("MOMENTS_LANGUAGE") {
            if let Some(language) = Language::parse(&language) {
                self.board.language = Some(language);
            }
        }

        if let Some(level) = lookup("MOMENTS_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("MOMENTS_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Result of searching the default config locations
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config came from; `None` means defaults plus environment
    pub source: Option<PathBuf>,
    /// Files that exist but could not be read or parsed
    pub skipped: Vec<ConfigError>,
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Moments Configuration
#
# Environment variables override these settings:
# - MOMENTS_API_URL
# - MOMENTS_API_TIMEOUT_SECS
# - MOMENTS_RATINGS
# - MOMENTS_LANGUAGE
# - MOMENTS_LOG_LEVEL
# - MOMENTS_LOG_FORMAT

[api]
# Moments API base URL (up to and including /api)
base_url = "http://127.0.0.1:3333/api"

# Request timeout in seconds (0 = no timeout)
request_timeout_secs = 0

[board]
# Let comments carry a 0-5 rating
ratings_enabled = true

# Label language: "portuguese" or "english"
# (defaults to portuguese with ratings, english without)
# language = "portuguese"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
