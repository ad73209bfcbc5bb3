//! Structured logging initialization
//!
//! Registration events are emitted through `tracing`. This module installs a
//! `tracing_subscriber` pipeline for binaries and tests that want to see them:
//! JSON output for production, pretty output for development.
//!
//! ## Environment Variables
//!
//! - `ROUTEREG_LOG_LEVEL` - trace/debug/info/warn/error (default: `info`)
//! - `ROUTEREG_LOG_FORMAT` - `json` or `pretty` (default: `json`)
//! - `ROUTEREG_LOG_INCLUDE_LOCATION` - include file:line (default: `false`)
//!
//! `RUST_LOG`, when set, takes precedence over `ROUTEREG_LOG_LEVEL`.

use anyhow::{Context, Result};
use std::env;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// How log lines are rendered on stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event, for log collectors.
    #[default]
    Json,
    /// Multi-line human-readable output.
    Pretty,
}

impl LogFormat {
    /// `pretty` (any case) selects [`LogFormat::Pretty`]; every other name
    /// falls back to [`LogFormat::Json`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("pretty") {
            LogFormat::Pretty
        } else {
            LogFormat::Json
        }
    }
}

/// Subscriber settings for [`init_logging_with_config`].
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Maximum level when `RUST_LOG` is unset.
    pub log_level: String,
    pub format: LogFormat,
    /// Attach source file and line to every event.
    pub include_location: bool,
}

impl LogConfig {
    /// Read the `ROUTEREG_LOG_*` variables from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from any key/value source.
    ///
    /// Missing keys keep their defaults: level `info`, JSON output, no
    /// source locations. An unparsable location flag counts as `false`.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let format = lookup("ROUTEREG_LOG_FORMAT")
            .map(|name| LogFormat::from_name(&name))
            .unwrap_or_default();
        let include_location = lookup("ROUTEREG_LOG_INCLUDE_LOCATION")
            .and_then(|flag| flag.trim().parse::<bool>().ok())
            .unwrap_or(false);

        Self {
            log_level: lookup("ROUTEREG_LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            format,
            include_location,
        }
    }

    /// Pretty, verbose output for local runs and tests.
    #[must_use]
    pub fn default_dev() -> Self {
        Self {
            log_level: "debug".to_string(),
            format: LogFormat::Pretty,
            include_location: true,
        }
    }

    /// Configured level; unknown names fall back to `info`.
    fn level(&self) -> Level {
        self.log_level.trim().parse().unwrap_or(Level::INFO)
    }
}

/// Initialize logging from the environment, overriding the level.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(log_level: &str) -> Result<()> {
    let mut config = LogConfig::from_env();
    config.log_level = log_level.to_string();
    init_logging_with_config(&config)
}

/// Install the global `tracing` subscriber described by `config`.
///
/// Output goes to stderr so that command output on stdout stays clean.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_logging_with_config(config: &LogConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level().as_str()));

    let fmt_layer = match config.format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .pretty()
            .with_target(true)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .with_writer(std::io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}
