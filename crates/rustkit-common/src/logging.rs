//! Logging initialization.
//!
//! Installs a `tracing-subscriber` fmt subscriber filtered by an `EnvFilter`.
//! `RUST_LOG` always wins over the configured default directive, so a
//! developer can turn on `rustkit_layout=trace` without touching code.

use std::env;
use std::str::FromStr;

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::filter::{Directive, ParseError};
use tracing_subscriber::EnvFilter;

/// Environment variable holding an extra filter directive list.
pub const LOG_FILTER_ENV: &str = "RUSTKIT_LOG";

/// Environment variable selecting the output format.
pub const LOG_FORMAT_ENV: &str = "RUSTKIT_LOG_FORMAT";

/// Errors that can occur while installing the subscriber.
#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Invalid log filter: {0}")]
    InvalidFilter(#[from] ParseError),

    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Output format of the fmt layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{}'", other)),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Level used when neither `RUST_LOG` nor `filter` says otherwise.
    pub default_level: Level,
    /// Output format.
    pub format: LogFormat,
    /// Additional filter directives, e.g. `rustkit_layout=trace`.
    pub filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_level: Level::INFO,
            format: LogFormat::Compact,
            filter: None,
        }
    }
}

impl LoggingConfig {
    /// Build a config from `RUSTKIT_LOG` and `RUSTKIT_LOG_FORMAT`.
    ///
    /// An unknown format name falls back to [`LogFormat::Compact`].
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(filter) = env::var(LOG_FILTER_ENV) {
            if !filter.trim().is_empty() {
                config.filter = Some(filter);
            }
        }
        if let Ok(format) = env::var(LOG_FORMAT_ENV) {
            config.format = format.parse().unwrap_or_default();
        }
        config
    }

    /// Set the default level.
    pub fn with_level(mut self, level: Level) -> Self {
        self.default_level = level;
        self
    }

    /// Set the output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set extra filter directives.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Build the `EnvFilter` described by this config.
    pub fn env_filter(&self) -> Result<EnvFilter, LoggingError> {
        let mut filter = EnvFilter::from_default_env().add_directive(self.default_level.into());
        if let Some(directives) = &self.filter {
            for directive in directives.split(',').map(str::trim).filter(|d| !d.is_empty()) {
                filter = filter.add_directive(Directive::from_str(directive)?);
            }
        }
        Ok(filter)
    }
}

/// Install the global subscriber described by `config`.
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let filter = config.env_filter()?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = match config.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    result.map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))
}

/// Install a subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_test_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
