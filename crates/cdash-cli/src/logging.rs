//! Logging setup built on `tracing` and `tracing-subscriber`.
//!
//! Levels in use:
//!
//! - `error`: startup failures (missing or unparseable dataset)
//! - `warn`: non-fatal oddities
//! - `info`: load progress and row counts
//! - `debug`: coercion counts, filter matches

use std::io;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format with colors.
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
    /// JSON format for machine parsing.
    Json,
}

/// Configuration for the global subscriber.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level filter applied when `RUST_LOG` does not override it.
    pub level_filter: LevelFilter,
    /// Output format.
    pub format: LogFormat,
    /// Whether to use ANSI colors on stderr.
    pub with_ansi: bool,
    /// Let `RUST_LOG` take precedence when no explicit flag was given.
    pub use_env_filter: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            format: LogFormat::default(),
            with_ansi: true,
            use_env_filter: true,
        }
    }
}

/// Install the global tracing subscriber.
///
/// # Panics
///
/// Panics if called more than once in a process.
pub fn init_logging(config: &LogConfig) {
    let filter = build_filter(config);
    match config.format {
        LogFormat::Json => {
            let layer = fmt::layer().json().with_writer(io::stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .init();
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_writer(io::stderr)
                .with_ansi(config.with_ansi)
                .with_target(false)
                .without_time();
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .init();
        }
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(config.with_ansi)
                .with_target(false)
                .without_time();
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .init();
        }
    }
}

fn build_filter(config: &LogConfig) -> EnvFilter {
    let fallback = || {
        let level = config.level_filter.to_string().to_lowercase();
        EnvFilter::new(format!(
            "{level},cdash_cli={level},cdash_core={level},cdash_ingest={level},cdash_model={level}",
            level = level
        ))
    };
    if config.use_env_filter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback())
    } else {
        fallback()
    }
}
