//! crates/logging/src/config.rs
//! Verbosity configuration derived from `-v` / `-q` command-line flags.

use std::fmt;

/// Severity threshold for emitted diagnostics, most to least severe.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings.
    #[default]
    Warn,
    /// Adds informational messages.
    Info,
    /// Adds per-call diagnostics.
    Debug,
    /// Adds per-block tracing.
    Trace,
}

impl LogLevel {
    /// Lowercase name, usable as a `RUST_LOG` directive.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logging configuration for a single process.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerbosityConfig {
    /// Threshold applied to every target.
    pub level: LogLevel,
    /// Whether source targets are printed with each event.
    pub show_target: bool,
}

impl VerbosityConfig {
    /// Create a configuration from a verbose level (the number of `-v` flags).
    ///
    /// ```
    /// use logging::{LogLevel, VerbosityConfig};
    ///
    /// assert_eq!(VerbosityConfig::from_verbose_level(0).level, LogLevel::Warn);
    /// assert_eq!(VerbosityConfig::from_verbose_level(2).level, LogLevel::Debug);
    /// assert_eq!(VerbosityConfig::from_verbose_level(9).level, LogLevel::Trace);
    /// ```
    #[must_use]
    pub const fn from_verbose_level(level: u8) -> Self {
        let level = match level {
            0 => LogLevel::Warn,
            1 => LogLevel::Info,
            2 => LogLevel::Debug,
            _ => LogLevel::Trace,
        };
        Self {
            level,
            // targets only help once per-call diagnostics are visible
            show_target: matches!(level, LogLevel::Debug | LogLevel::Trace),
        }
    }

    /// Configuration for `--quiet`: errors only.
    #[must_use]
    pub const fn quiet() -> Self {
        Self {
            level: LogLevel::Error,
            show_target: false,
        }
    }

    /// Resolve the `-v` count and `--quiet` flag; quiet wins.
    #[must_use]
    pub const fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            Self::quiet()
        } else {
            Self::from_verbose_level(verbose)
        }
    }

    /// Filter directive equivalent to this configuration.
    #[must_use]
    pub const fn directive(&self) -> &'static str {
        self.level.as_str()
    }
}
