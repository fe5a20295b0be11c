//! crates/checksums/src/algorithm.rs
//!
//! Closed set of supported digest algorithms, parsed once at the boundary.

use std::fmt;
use std::str::FromStr;

use crate::HashError;

/// Digest algorithms understood by the dispatcher.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Algorithm {
    /// MD5 (RFC 1321), computed by this crate's own engine.
    Md5,
    /// SHA-256, delegated to the digest provider.
    #[default]
    Sha256,
}

impl Algorithm {
    /// Every supported algorithm, in display order.
    pub const ALL: [Self; 2] = [Self::Md5, Self::Sha256];

    /// Canonical lowercase name accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha256 => "sha-256",
        }
    }

    /// Length of the raw digest in bytes.
    #[must_use]
    pub const fn digest_len(self) -> usize {
        match self {
            Self::Md5 => 16,
            Self::Sha256 => 32,
        }
    }

    /// Length of the hex-encoded digest in characters.
    #[must_use]
    pub const fn hex_len(self) -> usize {
        self.digest_len() * 2
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = HashError;

    /// Parses `md5` or `sha-256`, ignoring ASCII case.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| HashError::invalid_algorithm(name))
    }
}
