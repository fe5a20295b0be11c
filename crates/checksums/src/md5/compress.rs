//! crates/checksums/src/md5/compress.rs
//!
//! The MD5 compression function: 64 rounds per 64-byte block, folded over the
//! padded message with Davies-Meyer feed-forward.

use super::padding::BLOCK_LEN;

/// Per-round additive constants, `K[i] = floor(abs(sin(i + 1)) * 2^32)`.
pub(crate) static K: [u32; 64] = [
    0xd76a_a478, 0xe8c7_b756, 0x2420_70db, 0xc1bd_ceee, 0xf57c_0faf, 0x4787_c62a, 0xa830_4613,
    0xfd46_9501, 0x6980_98d8, 0x8b44_f7af, 0xffff_5bb1, 0x895c_d7be, 0x6b90_1122, 0xfd98_7193,
    0xa679_438e, 0x49b4_0821, 0xf61e_2562, 0xc040_b340, 0x265e_5a51, 0xe9b6_c7aa, 0xd62f_105d,
    0x0244_1453, 0xd8a1_e681, 0xe7d3_fbc8, 0x21e1_cde6, 0xc337_07d6, 0xf4d5_0d87, 0x455a_14ed,
    0xa9e3_e905, 0xfcef_a3f8, 0x676f_02d9, 0x8d2a_4c8a, 0xfffa_3942, 0x8771_f681, 0x6d9d_6122,
    0xfde5_380c, 0xa4be_ea44, 0x4bde_cfa9, 0xf6bb_4b60, 0xbebf_bc70, 0x289b_7ec6, 0xeaa1_27fa,
    0xd4ef_3085, 0x0488_1d05, 0xd9d4_d039, 0xe6db_99e5, 0x1fa2_7cf8, 0xc4ac_5665, 0xf429_2244,
    0x432a_ff97, 0xab94_23a7, 0xfc93_a039, 0x655b_59c3, 0x8f0c_cc92, 0xffef_f47d, 0x8584_5dd1,
    0x6fa8_7e4f, 0xfe2c_e6e0, 0xa301_4314, 0x4e08_11a1, 0xf753_7e82, 0xbd3a_f235, 0x2ad7_d2bb,
    0xeb86_d391,
];

/// Per-round left-rotation amounts.
pub(crate) static S: [u32; 64] = [
    7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22, //
    5, 9, 14, 20, 5, 9, 14, 20, 5, 9, 14, 20, 5, 9, 14, 20, //
    4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23, //
    6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21,
];

/// Rounds 0-15: `(b & c) | (!b & d)`.
#[inline(always)]
const fn f(b: u32, c: u32, d: u32) -> u32 {
    (b & c) | (!b & d)
}

/// Rounds 16-31: `(d & b) | (!d & c)`.
#[inline(always)]
const fn g(b: u32, c: u32, d: u32) -> u32 {
    (d & b) | (!d & c)
}

/// Rounds 32-47: `b ^ c ^ d`.
#[inline(always)]
const fn h(b: u32, c: u32, d: u32) -> u32 {
    b ^ c ^ d
}

/// Rounds 48-63: `c ^ (b | !d)`.
#[inline(always)]
const fn i(b: u32, c: u32, d: u32) -> u32 {
    c ^ (b | !d)
}

/// Sixteen little-endian message words decoded from one 64-byte block.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Block([u32; 16]);

impl Block {
    /// Decodes a block from exactly [`BLOCK_LEN`] bytes.
    #[must_use]
    pub fn from_bytes(bytes: &[u8; BLOCK_LEN]) -> Self {
        Self::from_chunk(bytes)
    }

    /// Decodes a block from a chunk produced by `chunks_exact(BLOCK_LEN)`.
    fn from_chunk(chunk: &[u8]) -> Self {
        debug_assert_eq!(chunk.len(), BLOCK_LEN);
        Self(std::array::from_fn(|word| {
            let at = word * 4;
            u32::from_le_bytes([chunk[at], chunk[at + 1], chunk[at + 2], chunk[at + 3]])
        }))
    }

    /// Returns the decoded message words.
    #[must_use]
    pub const fn words(&self) -> &[u32; 16] {
        &self.0
    }
}

/// The four MD5 chaining registers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct State {
    /// Register A.
    pub a: u32,
    /// Register B.
    pub b: u32,
    /// Register C.
    pub c: u32,
    /// Register D.
    pub d: u32,
}

impl State {
    /// RFC 1321 initial register values.
    pub const INITIAL: Self = Self {
        a: 0x6745_2301,
        b: 0xefcd_ab89,
        c: 0x98ba_dcfe,
        d: 0x1032_5476,
    };

    /// Runs the 64 rounds over `block` and adds the result onto `self`.
    pub fn compress(&mut self, block: &Block) {
        let x = block.words();
        let (mut a, mut b, mut c, mut d) = (self.a, self.b, self.c, self.d);

        for j in 0..64 {
            let (mix, word) = match j / 16 {
                0 => (f(b, c, d), j),
                1 => (g(b, c, d), (5 * j + 1) % 16),
                2 => (h(b, c, d), (3 * j + 5) % 16),
                _ => (i(b, c, d), (7 * j) % 16),
            };

            let temp = a
                .wrapping_add(mix)
                .wrapping_add(K[j])
                .wrapping_add(x[word]);

            let previous_d = d;
            d = c;
            c = b;
            b = b.wrapping_add(temp.rotate_left(S[j]));
            a = previous_d;
        }

        self.a = self.a.wrapping_add(a);
        self.b = self.b.wrapping_add(b);
        self.c = self.c.wrapping_add(c);
        self.d = self.d.wrapping_add(d);
    }

    /// Serialises the registers little-endian in A, B, C, D order.
    #[must_use]
    pub fn to_bytes(self) -> [u8; 16] {
        let mut out = [0_u8; 16];
        for (slot, register) in out
            .chunks_exact_mut(4)
            .zip([self.a, self.b, self.c, self.d])
        {
            slot.copy_from_slice(&register.to_le_bytes());
        }
        out
    }
}

impl Default for State {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Folds every block of an already padded message into a fresh [`State`].
///
/// `padded` must be a whole number of blocks, as produced by
/// [`pad`](super::pad). A trailing partial block is ignored.
#[must_use]
pub fn fold(padded: &[u8]) -> State {
    debug_assert_eq!(padded.len() % BLOCK_LEN, 0, "message must be padded");

    let mut state = State::INITIAL;
    for chunk in padded.chunks_exact(BLOCK_LEN) {
        state.compress(&Block::from_chunk(chunk));
    }

    tracing::trace!(
        target: "checksums::md5",
        blocks = padded.len() / BLOCK_LEN,
        "folded padded message"
    );
    state
}
