#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `checksums` turns a text input into a lowercase hexadecimal digest using
//! either a self-contained MD5 engine or a delegated SHA-256 provider.
//!
//! # Design
//!
//! - [`md5`] pads the message, folds it block by block through the 64-round
//!   compression function, and serialises the final state little-endian.
//! - [`sha256`] never computes SHA-256 itself. It calls a [`DigestProvider`];
//!   [`PlatformProvider`] is the default and uses OpenSSL when the `openssl`
//!   feature is enabled.
//! - [`hex`] is the single encoder shared by both paths.
//! - [`Hasher`] validates the request once, then dispatches on [`Algorithm`].
//!
//! # Invariants
//!
//! - MD5 output is always 32 hex characters and SHA-256 output 64.
//! - Invalid input or an unknown algorithm name is rejected before any work
//!   is done.
//! - Inputs of [`md5::WRAP_THRESHOLD`] bytes or more wrap the MD5 length field
//!   unless [`LengthFieldPolicy::Reject`] is selected.
//!
//! # Examples
//!
//! ```
//! use checksums::{Algorithm, hash, hash_named};
//!
//! assert_eq!(hash("abc", Algorithm::Md5)?, "900150983cd24fb0d6963f7d28e17f72");
//! assert_eq!(
//!     hash_named("", "sha-256")?,
//!     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
//! );
//! assert!(hash_named("abc", "sha1").is_err());
//! # Ok::<(), checksums::HashError>(())
//! ```

mod algorithm;
mod dispatch;
mod error;
pub mod hex;
pub mod md5;
pub mod sha256;

#[cfg(feature = "async")]
#[cfg_attr(docsrs, doc(cfg(feature = "async")))]
mod async_hash;

#[cfg(feature = "parallel")]
#[cfg_attr(docsrs, doc(cfg(feature = "parallel")))]
mod parallel;

pub use algorithm::Algorithm;
pub use dispatch::{Hasher, hash, hash_bytes, hash_named};
pub use error::HashError;
pub use md5::LengthFieldPolicy;
pub use sha256::{DigestProvider, PlatformProvider, openssl_acceleration_available};

#[cfg(feature = "async")]
pub use async_hash::{hash_async, hash_async_with};

#[cfg(feature = "parallel")]
pub use parallel::{ParallelHash, hash_batch};
