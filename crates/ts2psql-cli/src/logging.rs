//! Logging setup for the ts2psql command line
//!
//! Diagnostics go to stderr through `tracing-subscriber`, leaving stdout free.
//! `RUST_LOG` takes precedence over the verbosity chosen on the command line.

use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set
    pub default_filter: String,

    /// Whether to include file/line information in logs
    pub include_location: bool,

    /// Whether to colorize output; on only when stderr is a terminal
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_filter: "warn".to_string(),
            include_location: false,
            ansi: std::io::stderr().is_terminal(),
        }
    }
}

impl LoggingConfig {
    /// Configuration for `--verbose` runs (progress at info level)
    pub fn verbose() -> Self {
        Self {
            default_filter: "info,ts2psql_core=debug".to_string(),
            include_location: cfg!(debug_assertions),
            ..Self::default()
        }
    }

    pub fn from_verbosity(verbose: bool) -> Self {
        if verbose {
            Self::verbose()
        } else {
            Self::default()
        }
    }
}

/// Initialize the logging system with the given configuration
pub fn init(config: LoggingConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_file(config.include_location)
        .with_line_number(config.include_location)
        .with_ansi(config.ansi)
        .with_writer(std::io::stderr)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(stderr_layer).try_init()?;

    tracing::debug!(filter = %config.default_filter, "Logging initialized");

    Ok(())
}
