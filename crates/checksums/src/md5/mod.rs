//! crates/checksums/src/md5/mod.rs
//!
//! Self-contained MD5 engine reproducing RFC 1321 bit for bit for inputs
//! below 512 MiB.
//!
//! The pipeline is [`pad`] → [`fold`] → [`State::to_bytes`]. Padding stores
//! only the low 32 bits of the message bit length, so longer inputs yield the
//! historical (non-RFC) digest unless [`LengthFieldPolicy::Reject`] is used.
//!
//! MD5 is cryptographically broken. It is provided for legacy compatibility
//! only.

mod compress;
mod padding;

pub use compress::{Block, State, fold};
pub use padding::{BLOCK_LEN, WRAP_THRESHOLD, length_field, length_field_wraps, pad, padded_len};

use crate::HashError;

/// MD5 digest (16 bytes / 128 bits).
pub type Digest = [u8; 16];

/// How to treat inputs too long for the 32-bit length field.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LengthFieldPolicy {
    /// Store the wrapped length and return the historical digest.
    #[default]
    Wrap,
    /// Refuse the input with [`HashError::LengthFieldTruncation`].
    Reject,
}

/// Computes the MD5 digest of `input`.
///
/// Long inputs follow [`LengthFieldPolicy::Wrap`].
///
/// ```
/// let digest = checksums::md5::digest(b"abc");
/// assert_eq!(checksums::hex::encode(&digest), "900150983cd24fb0d6963f7d28e17f72");
/// ```
#[must_use]
pub fn digest(input: &[u8]) -> Digest {
    fold(&pad(input)).to_bytes()
}

/// Computes the MD5 digest of `input`, applying `policy` to oversized inputs.
pub fn digest_with_policy(input: &[u8], policy: LengthFieldPolicy) -> Result<Digest, HashError> {
    let len = input.len();
    if length_field_wraps(len) {
        match policy {
            LengthFieldPolicy::Reject => return Err(HashError::LengthFieldTruncation { len }),
            LengthFieldPolicy::Wrap => tracing::warn!(
                target: "checksums::md5",
                len,
                "input exceeds the 32-bit length field; digest will not match RFC 1321"
            ),
        }
    }
    Ok(digest(input))
}

/// Computes the MD5 digest of `input` as 32 lowercase hex characters.
#[must_use]
pub fn hex_digest(input: &[u8]) -> String {
    crate::hex::encode(&digest(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rfc1321_vectors() {
        let vectors: [(&[u8], &str); 7] = [
            (b"", "d41d8cd98f00b204e9800998ecf8427e"),
            (b"a", "0cc175b9c0f1b6a831c399e269772661"),
            (b"abc", "900150983cd24fb0d6963f7d28e17f72"),
            (b"message digest", "f96b697d7cb7938d525a2f31aaf161d0"),
            (b"abcdefghijklmnopqrstuvwxyz", "c3fcd3d76192e4007dfb496cca67e13b"),
            (
                b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
                "d174ab98d277d9f5a5611c2c9f419d9f",
            ),
            (
                b"12345678901234567890123456789012345678901234567890123456789012345678901234567890",
                "57edf4a22be3c955ac49da2e2107b67a",
            ),
        ];

        for (input, expected) in vectors {
            assert_eq!(hex_digest(input), expected, "input {input:?}");
        }
    }

    #[test]
    fn policy_is_irrelevant_below_threshold() {
        let input = b"The quick brown fox jumps over the lazy dog";
        let wrapped = digest_with_policy(input, LengthFieldPolicy::Wrap).expect("wrap");
        let strict = digest_with_policy(input, LengthFieldPolicy::Reject).expect("reject");
        assert_eq!(wrapped, strict);
        assert_eq!(wrapped, digest(input));
        assert_eq!(
            crate::hex::encode(&wrapped),
            "9e107d9d372bb6826bd81d3542a419d6"
        );
    }

    #[test]
    fn default_policy_is_wrap() {
        assert_eq!(LengthFieldPolicy::default(), LengthFieldPolicy::Wrap);
    }
}
