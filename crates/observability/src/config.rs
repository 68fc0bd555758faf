//! Observability settings, read from the process environment.
//!
//! These only shape diagnostics on stderr. Nothing here changes inventory behaviour.

use core::str::FromStr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the `tracing` filter directive.
pub const FILTER_ENV: &str = "RUST_LOG";

/// Environment variable selecting the log format (`json` or `pretty`).
pub const FORMAT_ENV: &str = "SUNRISE_LOG_FORMAT";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown log format '{0}' (expected 'json' or 'pretty')")]
    UnknownLogFormat(String),

    #[error("invalid log filter '{0}'")]
    InvalidFilter(String),
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" | "text" => Ok(LogFormat::Pretty),
            other => Err(ConfigError::UnknownLogFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: Self::DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl ObservabilityConfig {
    /// Quiet unless asked: an interactive session should not be interleaved with logs.
    pub const DEFAULT_FILTER: &'static str = "warn";

    /// Read the configuration from the process environment.
    ///
    /// Invalid values fall back to defaults; the returned errors are meant to be
    /// logged once a subscriber is installed.
    pub fn from_env() -> (Self, Vec<ConfigError>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env), against an arbitrary lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<ConfigError>) {
        let mut config = Self::default();
        let mut errors = Vec::new();

        if let Some(filter) = lookup(FILTER_ENV).filter(|f| !f.trim().is_empty()) {
            match EnvFilter::try_new(&filter) {
                Ok(_) => config.filter = filter,
                Err(_) => errors.push(ConfigError::InvalidFilter(filter)),
            }
        }

        if let Some(raw) = lookup(FORMAT_ENV) {
            match raw.parse() {
                Ok(format) => config.format = format,
                Err(e) => errors.push(e),
            }
        }

        (config, errors)
    }
}
