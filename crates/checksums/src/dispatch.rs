//! crates/checksums/src/dispatch.rs
//!
//! Top-level text hashing: validates the request once, then routes the UTF-8
//! bytes either through the MD5 engine or to the SHA-256 provider. Both paths
//! finish in the shared hex encoder.

use crate::md5::{self, LengthFieldPolicy};
use crate::sha256::{DigestProvider, PlatformProvider};
use crate::{Algorithm, HashError, hex};

/// Configured hashing front-end.
///
/// The algorithm is resolved when the hasher is built, so hashing never
/// compares algorithm names. Hashers hold no per-call state and can be shared
/// freely across threads when the provider allows it.
///
/// # Examples
///
/// ```
/// use checksums::{Algorithm, Hasher, LengthFieldPolicy};
///
/// let hasher = Hasher::new(Algorithm::Md5).with_length_policy(LengthFieldPolicy::Reject);
/// assert_eq!(hasher.hash("abc")?, "900150983cd24fb0d6963f7d28e17f72");
/// # Ok::<(), checksums::HashError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Hasher<P = PlatformProvider> {
    algorithm: Algorithm,
    length_policy: LengthFieldPolicy,
    provider: P,
}

impl Hasher {
    /// Creates a hasher for `algorithm` using the platform SHA-256 provider.
    #[must_use]
    pub const fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            length_policy: LengthFieldPolicy::Wrap,
            provider: PlatformProvider,
        }
    }
}

impl<P> Hasher<P> {
    /// Selects how MD5 treats inputs too long for its length field.
    #[must_use]
    pub fn with_length_policy(mut self, length_policy: LengthFieldPolicy) -> Self {
        self.length_policy = length_policy;
        self
    }

    /// Replaces the SHA-256 provider.
    #[must_use]
    pub fn with_provider<Q>(self, provider: Q) -> Hasher<Q> {
        Hasher {
            algorithm: self.algorithm,
            length_policy: self.length_policy,
            provider,
        }
    }

    /// Returns the configured algorithm.
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Returns the configured MD5 length policy.
    #[must_use]
    pub const fn length_policy(&self) -> LengthFieldPolicy {
        self.length_policy
    }

    /// Borrows the SHA-256 provider.
    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }
}

impl<P: DigestProvider> Hasher<P> {
    /// Hashes `input` and returns the lowercase hex digest.
    pub fn hash(&self, input: &str) -> Result<String, HashError> {
        self.digest(input).map(|digest| hex::encode(&digest))
    }

    /// Validates that `input` is UTF-8 text, then hashes it.
    pub fn hash_bytes(&self, input: &[u8]) -> Result<String, HashError> {
        let text = std::str::from_utf8(input)?;
        self.hash(text)
    }

    /// Hashes `input` and returns the raw digest bytes.
    pub fn digest(&self, input: &str) -> Result<Vec<u8>, HashError> {
        let bytes = input.as_bytes();
        tracing::debug!(
            target: "checksums::hash",
            algorithm = %self.algorithm,
            len = bytes.len(),
            "hashing input"
        );

        match self.algorithm {
            Algorithm::Md5 => md5::digest_with_policy(bytes, self.length_policy).map(Vec::from),
            Algorithm::Sha256 => self.provider.sha256(bytes).map(Vec::from),
        }
    }
}

/// Hashes `input` with `algorithm` using the default configuration.
///
/// ```
/// use checksums::{Algorithm, hash};
///
/// assert_eq!(hash("", Algorithm::Md5)?, "d41d8cd98f00b204e9800998ecf8427e");
/// assert_eq!(
///     hash("abc", Algorithm::default())?,
///     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
/// );
/// # Ok::<(), checksums::HashError>(())
/// ```
pub fn hash(input: &str, algorithm: Algorithm) -> Result<String, HashError> {
    Hasher::new(algorithm).hash(input)
}

/// Hashes `input` with the algorithm called `algorithm` (`md5` or `sha-256`,
/// any case).
pub fn hash_named(input: &str, algorithm: &str) -> Result<String, HashError> {
    hash(input, algorithm.parse()?)
}

/// Hashes raw `input` bytes that must form UTF-8 text.
///
/// The input is checked before the algorithm name, and both are checked
/// before any hashing work starts.
pub fn hash_bytes(input: &[u8], algorithm: &str) -> Result<String, HashError> {
    let text = std::str::from_utf8(input)?;
    hash_named(text, algorithm)
}
