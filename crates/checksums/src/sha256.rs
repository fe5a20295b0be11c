//! crates/checksums/src/sha256.rs
//!
//! SHA-256 is never computed by this crate. It is delegated to a
//! [`DigestProvider`]; the default [`PlatformProvider`] prefers OpenSSL when the
//! `openssl` feature is enabled and the library initialises, and otherwise
//! uses the pure-Rust `sha2` implementation.

use digest::Digest;
use std::fmt;

use crate::HashError;

/// SHA-256 digest (32 bytes / 256 bits).
pub type Sha256Digest = [u8; 32];

/// Source of SHA-256 digests.
///
/// Implementations must be pure: the same bytes always produce the same
/// digest. Failures are reported as [`HashError::Provider`] and are not
/// retried by callers.
pub trait DigestProvider {
    /// Computes the SHA-256 digest of `data`.
    fn sha256(&self, data: &[u8]) -> Result<Sha256Digest, HashError>;
}

impl<P: DigestProvider + ?Sized> DigestProvider for &P {
    fn sha256(&self, data: &[u8]) -> Result<Sha256Digest, HashError> {
        (**self).sha256(data)
    }
}

/// Default provider backed by OpenSSL or the `sha2` crate.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PlatformProvider;

impl DigestProvider for PlatformProvider {
    fn sha256(&self, data: &[u8]) -> Result<Sha256Digest, HashError> {
        Sha256Backend::new().digest(data)
    }
}

enum Sha256Backend {
    #[cfg(feature = "openssl")]
    OpenSsl(openssl::hash::Hasher),
    Rust(sha2::Sha256),
}

impl Sha256Backend {
    fn new() -> Self {
        #[cfg(feature = "openssl")]
        {
            if let Some(hasher) = new_openssl_hasher() {
                return Self::OpenSsl(hasher);
            }
        }

        Self::Rust(sha2::Sha256::new())
    }

    fn digest(self, data: &[u8]) -> Result<Sha256Digest, HashError> {
        match self {
            #[cfg(feature = "openssl")]
            Self::OpenSsl(mut hasher) => {
                hasher.update(data).map_err(HashError::provider)?;
                let bytes = hasher.finish().map_err(HashError::provider)?;
                Sha256Digest::try_from(bytes.as_ref()).map_err(|_| {
                    HashError::provider(format_args!(
                        "OpenSSL returned a {}-byte SHA-256 digest",
                        bytes.len()
                    ))
                })
            }
            Self::Rust(mut hasher) => {
                hasher.update(data);
                Ok(hasher.finalize().into())
            }
        }
    }
}

impl fmt::Debug for Sha256Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "openssl")]
            Self::OpenSsl(_) => f.write_str("OpenSsl"),
            Self::Rust(_) => f.write_str("Rust"),
        }
    }
}

#[cfg(feature = "openssl")]
fn new_openssl_hasher() -> Option<openssl::hash::Hasher> {
    openssl::hash::Hasher::new(openssl::hash::MessageDigest::sha256()).ok()
}

/// Reports whether SHA-256 requests are served by OpenSSL.
#[must_use]
pub fn openssl_acceleration_available() -> bool {
    #[cfg(feature = "openssl")]
    {
        new_openssl_hasher().is_some()
    }

    #[cfg(not(feature = "openssl"))]
    {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex;

    #[test]
    fn platform_provider_matches_fips_vectors() {
        let vectors: [(&[u8], &str); 3] = [
            (
                b"abc",
                "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
            ),
            (
                b"",
                "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
            ),
            (
                b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
                "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
            ),
        ];

        for (input, expected) in vectors {
            let digest = PlatformProvider.sha256(input).expect("provider succeeds");
            assert_eq!(hex::encode(&digest), expected);
        }
    }

    #[test]
    fn provider_is_usable_by_reference() {
        let provider = PlatformProvider;
        let by_ref: &dyn DigestProvider = &provider;
        assert_eq!(
            by_ref.sha256(b"abc").expect("by ref"),
            provider.sha256(b"abc").expect("by value")
        );
    }

    #[test]
    fn backend_debug_names_the_implementation() {
        let name = format!("{:?}", Sha256Backend::new());
        if openssl_acceleration_available() {
            assert_eq!(name, "OpenSsl");
        } else {
            assert_eq!(name, "Rust");
        }
    }
}
