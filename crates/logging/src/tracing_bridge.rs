//! crates/logging/src/tracing_bridge.rs
//! Bridge between the verbosity flags and the `tracing` ecosystem.
//!
//! Library crates emit events with the standard `tracing` macros under
//! `checksums::*` and `cli` targets. This module installs the process-wide
//! `tracing-subscriber` formatter that decides which of those events reach
//! stderr.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{VerbosityConfig, init_tracing};
//!
//! init_tracing(VerbosityConfig::from_verbose_level(2));
//! tracing::debug!(target: "checksums::hash", "visible at -vv");
//! ```

use tracing::Subscriber;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

use super::config::{LogLevel, VerbosityConfig};

/// Environment variable that overrides the configured directive.
pub const ENV_FILTER_VAR: &str = "RUST_LOG";

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::ERROR,
            LogLevel::Warn => Self::WARN,
            LogLevel::Info => Self::INFO,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Trace => Self::TRACE,
        }
    }
}

/// Build the event filter for `config`.
///
/// A non-empty, well-formed `env_directive` takes precedence; anything else
/// falls back to the configured level.
#[must_use]
pub fn build_filter(config: &VerbosityConfig, env_directive: Option<&str>) -> EnvFilter {
    env_directive
        .filter(|directive| !directive.trim().is_empty())
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(config.directive()))
}

/// Build a formatting subscriber that writes through `writer`.
pub fn build_subscriber<W>(
    config: &VerbosityConfig,
    filter: EnvFilter,
    writer: W,
) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(config.show_target)
        .with_ansi(false)
        .without_time()
        .finish()
}

/// Install the global subscriber for `config`, writing to stderr.
///
/// `RUST_LOG` overrides the configured level when set. Returns `false` if a
/// global subscriber was already installed; the existing one is kept.
pub fn init_tracing(config: VerbosityConfig) -> bool {
    let env_directive = std::env::var(ENV_FILTER_VAR).ok();
    let filter = build_filter(&config, env_directive.as_deref());
    let subscriber = build_subscriber(&config, filter, std::io::stderr);
    tracing::subscriber::set_global_default(subscriber).is_ok()
}
