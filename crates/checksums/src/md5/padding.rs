//! crates/checksums/src/md5/padding.rs
//!
//! Message padding for the MD5 engine.
//!
//! The padded message is the input, a single `0x80` byte, zero fill, and an
//! eight byte length suffix, rounded up to a whole number of 64-byte blocks.
//! Only the low 32 bits of the bit length are stored; the upper four suffix
//! bytes are always zero. Inputs of [`WRAP_THRESHOLD`] bytes or more therefore
//! carry a wrapped length and hash differently from RFC 1321.

/// Size of one MD5 block in bytes.
pub const BLOCK_LEN: usize = 64;

/// Size of the trailing length suffix in bytes.
const LENGTH_SUFFIX_LEN: usize = 8;

/// Marker byte appended directly after the message.
const PAD_MARKER: u8 = 0x80;

/// Smallest input length whose bit length no longer fits in 32 bits.
pub const WRAP_THRESHOLD: usize = 1 << 29;

/// Returns the padded length for an input of `len` bytes.
///
/// The result is the smallest multiple of [`BLOCK_LEN`] that is at least
/// `len + 9`.
///
/// ```
/// use checksums::md5::padded_len;
///
/// assert_eq!(padded_len(0), 64);
/// assert_eq!(padded_len(55), 64);
/// assert_eq!(padded_len(56), 128);
/// assert_eq!(padded_len(64), 128);
/// ```
#[must_use]
pub const fn padded_len(len: usize) -> usize {
    (len + 1 + LENGTH_SUFFIX_LEN).div_ceil(BLOCK_LEN) * BLOCK_LEN
}

/// Value stored in the length suffix: `(len * 8) mod 2^32`.
#[must_use]
pub const fn length_field(len: usize) -> u32 {
    (len as u64).wrapping_mul(8) as u32
}

/// Reports whether an input of `len` bytes gets a wrapped length field.
#[must_use]
pub const fn length_field_wraps(len: usize) -> bool {
    len >= WRAP_THRESHOLD
}

/// Pads `message` into a whole number of MD5 blocks.
#[must_use]
pub fn pad(message: &[u8]) -> Vec<u8> {
    let len = message.len();
    let total = padded_len(len);

    let mut padded = vec![0_u8; total];
    padded[..len].copy_from_slice(message);
    padded[len] = PAD_MARKER;

    let suffix = total - LENGTH_SUFFIX_LEN;
    padded[suffix..suffix + 4].copy_from_slice(&length_field(len).to_le_bytes());

    padded
}
