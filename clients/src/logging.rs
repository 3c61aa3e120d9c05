//! Logging setup shared by the binaries.
//!
//! Events go to stderr so that RDF written to stdout stays clean. `RUST_LOG`
//! overrides the level given on the command line.

use clap::ValueEnum;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable multi-line format.
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
    /// JSON structured format.
    Json,
}

/// Logging initialization errors.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The level is not a valid filter directive.
    #[error("invalid log level '{level}': {message}")]
    InvalidLevel {
        /// The rejected level.
        level: String,
        /// Parser message.
        message: String,
    },
    /// A global subscriber is already installed.
    #[error("failed to initialize logging: {0}")]
    Init(String),
}

/// Builds the filter: `RUST_LOG` when set, else `level`.
///
/// # Errors
///
/// Returns [`LogError::InvalidLevel`] if `level` is not a filter directive.
pub fn filter(level: &str) -> Result<EnvFilter, LogError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(level).map_err(|e| LogError::InvalidLevel {
        level: level.to_string(),
        message: e.to_string(),
    })
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns an error if `level` is invalid or logging was already set up.
pub fn init(level: &str, format: LogFormat) -> Result<(), LogError> {
    let registry = tracing_subscriber::registry().with(filter(level)?);
    let result = match format {
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .try_init(),
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    };
    result.map_err(|e| LogError::Init(e.to_string()))
}
