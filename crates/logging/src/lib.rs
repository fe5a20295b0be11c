#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` turns the `-v` / `-q` command-line flags into a
//! [`VerbosityConfig`] and, with the `tracing` feature, installs the
//! process-wide `tracing` subscriber that honours it.
//!
//! # Design
//!
//! Library crates never configure logging. They emit events through the
//! `tracing` macros under their own targets (`checksums::hash`,
//! `checksums::md5`, `cli`), and the binary calls `init_tracing` exactly
//! once at start-up. Everything is written to stderr so stdout stays reserved
//! for digests.
//!
//! # Examples
//!
//! ```
//! use logging::{LogLevel, VerbosityConfig};
//!
//! let config = VerbosityConfig::from_flags(1, false);
//! assert_eq!(config.level, LogLevel::Info);
//! assert_eq!(VerbosityConfig::from_flags(3, true).directive(), "error");
//! ```

mod config;

#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::{LogLevel, VerbosityConfig};

#[cfg(feature = "tracing")]
pub use tracing_bridge::{ENV_FILTER_VAR, build_filter, build_subscriber, init_tracing};
