//! crates/checksums/src/error.rs
//!
//! Error type shared by every hashing entry point.

use thiserror::Error;

/// Errors raised while validating or hashing an input.
///
/// Every variant is a synchronous rejection. Nothing is retried and no partial
/// digest is ever produced.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum HashError {
    /// The input bytes are not valid UTF-8 text.
    #[error("input must be text: invalid UTF-8 at byte offset {valid_up_to}")]
    InvalidInputType {
        /// Number of leading bytes that decoded successfully.
        valid_up_to: usize,
    },

    /// The requested algorithm is neither `md5` nor `sha-256`.
    #[error("algorithm must be 'md5' or 'sha-256', got '{name}'")]
    InvalidAlgorithm {
        /// The rejected algorithm name as supplied by the caller.
        name: String,
    },

    /// The input is too long for the 32-bit MD5 length field.
    ///
    /// Only raised when [`LengthFieldPolicy::Reject`](crate::LengthFieldPolicy::Reject)
    /// is selected.
    #[error("input of {len} bytes overflows the 32-bit MD5 length field")]
    LengthFieldTruncation {
        /// Byte length of the rejected input.
        len: usize,
    },

    /// The SHA-256 digest provider failed.
    #[error("digest provider failed: {message}")]
    Provider {
        /// Diagnostic reported by the provider.
        message: String,
    },

    /// The blocking hashing task could not be joined.
    #[cfg(feature = "async")]
    #[cfg_attr(docsrs, doc(cfg(feature = "async")))]
    #[error("hashing task failed: {message}")]
    Join {
        /// Diagnostic reported by the runtime.
        message: String,
    },
}

impl HashError {
    /// Creates an [`InvalidAlgorithm`](Self::InvalidAlgorithm) error for `name`.
    pub fn invalid_algorithm(name: impl Into<String>) -> Self {
        Self::InvalidAlgorithm { name: name.into() }
    }

    /// Creates a [`Provider`](Self::Provider) error from any displayable failure.
    pub fn provider(error: impl std::fmt::Display) -> Self {
        Self::Provider {
            message: error.to_string(),
        }
    }

    /// Reports whether the error rejected the caller's arguments rather than
    /// failing inside a collaborator.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::InvalidInputType { .. }
                | Self::InvalidAlgorithm { .. }
                | Self::LengthFieldTruncation { .. }
        )
    }
}

impl From<std::str::Utf8Error> for HashError {
    fn from(error: std::str::Utf8Error) -> Self {
        Self::InvalidInputType {
            valid_up_to: error.valid_up_to(),
        }
    }
}

#[cfg(feature = "async")]
impl From<tokio::task::JoinError> for HashError {
    fn from(error: tokio::task::JoinError) -> Self {
        Self::Join {
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_algorithm_message_names_the_input() {
        let error = HashError::invalid_algorithm("sha1");
        assert_eq!(
            error.to_string(),
            "algorithm must be 'md5' or 'sha-256', got 'sha1'"
        );
        assert!(error.is_rejection());
    }

    #[test]
    fn utf8_error_converts_to_invalid_input_type() {
        let bytes = [b'o', b'k', 0xff, 0xfe];
        let error: HashError = std::str::from_utf8(&bytes).unwrap_err().into();
        assert_eq!(error, HashError::InvalidInputType { valid_up_to: 2 });
        assert!(error.to_string().contains("offset 2"));
    }

    #[test]
    fn provider_error_is_not_a_rejection() {
        let error = HashError::provider("primitive unavailable");
        assert!(!error.is_rejection());
        assert_eq!(
            error.to_string(),
            "digest provider failed: primitive unavailable"
        );
    }

    #[test]
    fn length_field_truncation_reports_length() {
        let error = HashError::LengthFieldTruncation { len: 1 << 29 };
        assert!(error.to_string().contains("536870912 bytes"));
    }
}
