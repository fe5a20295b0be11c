//! crates/checksums/src/hex.rs
//!
//! Lowercase hexadecimal encoding shared by the MD5 and SHA-256 paths.

/// Lowercase hexadecimal alphabet indexed by nibble value.
static HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

/// Encodes `bytes` as lowercase hexadecimal, two characters per byte, in order.
///
/// # Examples
///
/// ```
/// assert_eq!(checksums::hex::encode(&[0x00, 0x9f, 0xff]), "009fff");
/// assert_eq!(checksums::hex::encode(&[]), "");
/// ```
#[must_use]
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        out.push(char::from(HEX_CHARS[usize::from(byte >> 4)]));
        out.push(char::from(HEX_CHARS[usize::from(byte & 0x0f)]));
    }
    out
}
