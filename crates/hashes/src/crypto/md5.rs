//! MD5 (RFC 1321) with an optional reduced round count.
//!
//! Portable, `no_std`, pure Rust. MD5 runs four rounds of sixteen steps; a
//! reduced engine runs only the first `rounds` of them and then applies the
//! usual feed-forward, so [`Md5::with_rounds`] with [`ROUNDS`] is plain MD5.
//! Weakened instances are a contrast baseline for the avalanche generators,
//! alongside BRAKE-256.

#![allow(clippy::indexing_slicing)] // Fixed-size state arrays and step-indexed tables

use traits::{Digest, DigestError, check_output};

use crate::util::load_le_words;

const BLOCK_LEN: usize = 64;

/// Digest size in bytes.
pub const OUTPUT_LEN: usize = 16;

/// Round count of MD5.
pub const ROUNDS: usize = 4;

const STEPS_PER_ROUND: usize = 16;

/// Bytes of the final block left for padding before the length field.
const LENGTH_OFFSET: usize = 56;

const IV: [u32; 4] = [0x6745_2301, 0xEFCD_AB89, 0x98BA_DCFE, 0x1032_5476];

/// `floor(|sin(i + 1)| * 2^32)`.
const K: [u32; 64] = [
  0xD76A_A478, 0xE8C7_B756, 0x2420_70DB, 0xC1BD_CEEE, 0xF57C_0FAF, 0x4787_C62A, 0xA830_4613, 0xFD46_9501,
  0x6980_98D8, 0x8B44_F7AF, 0xFFFF_5BB1, 0x895C_D7BE, 0x6B90_1122, 0xFD98_7193, 0xA679_438E, 0x49B4_0821,
  0xF61E_2562, 0xC040_B340, 0x265E_5A51, 0xE9B6_C7AA, 0xD62F_105D, 0x0244_1453, 0xD8A1_E681, 0xE7D3_FBC8,
  0x21E1_CDE6, 0xC337_07D6, 0xF4D5_0D87, 0x455A_14ED, 0xA9E3_E905, 0xFCEF_A3F8, 0x676F_02D9, 0x8D2A_4C8A,
  0xFFFA_3942, 0x8771_F681, 0x6D9D_6122, 0xFDE5_380C, 0xA4BE_EA44, 0x4BDE_CFA9, 0xF6BB_4B60, 0xBEBF_BC70,
  0x289B_7EC6, 0xEAA1_27FA, 0xD4EF_3085, 0x0488_1D05, 0xD9D4_D039, 0xE6DB_99E5, 0x1FA2_7CF8, 0xC4AC_5665,
  0xF429_2244, 0x432A_FF97, 0xAB94_23A7, 0xFC93_A039, 0x655B_59C3, 0x8F0C_CC92, 0xFFEF_F47D, 0x8584_5DD1,
  0x6FA8_7E4F, 0xFE2C_E6E0, 0xA301_4314, 0x4E08_11A1, 0xF753_7E82, 0xBD3A_F235, 0x2AD7_D2BB, 0xEB86_D391,
];

/// Left-rotation amounts, four per round.
const SHIFTS: [[u32; 4]; ROUNDS] = [[7, 12, 17, 22], [5, 9, 14, 20], [4, 11, 16, 23], [6, 10, 15, 21]];

#[inline(always)]
fn step_input(round: usize, b: u32, c: u32, d: u32, i: usize) -> (u32, usize) {
  match round {
    0 => ((b & c) | (!b & d), i),
    1 => ((d & b) | (!d & c), (5 * i + 1) % 16),
    2 => (b ^ c ^ d, (3 * i + 5) % 16),
    _ => (c ^ (b | !d), (7 * i) % 16),
  }
}

/// Streaming MD5 engine.
///
/// # Example
///
/// ```rust
/// use hashes::crypto::Md5;
///
/// let mut h = Md5::new();
/// h.update(b"a");
/// h.update(b"bc");
/// assert_eq!(h.finalize(), Md5::digest(b"abc"));
///
/// let weak = Md5::with_rounds(1)?;
/// assert_eq!(weak.rounds(), 1);
/// assert!(Md5::with_rounds(5).is_err());
/// # Ok::<(), hashes::DigestError>(())
/// ```
#[derive(Clone)]
pub struct Md5 {
  state: [u32; 4],
  buf: [u8; BLOCK_LEN],
  buf_len: usize,
  /// Message bytes absorbed so far.
  len: u64,
  rounds: usize,
}

impl Default for Md5 {
  #[inline]
  fn default() -> Self {
    Self::with_round_count(ROUNDS)
  }
}

impl Md5 {
  #[inline]
  const fn with_round_count(rounds: usize) -> Self {
    Self {
      state: IV,
      buf: [0; BLOCK_LEN],
      buf_len: 0,
      len: 0,
      rounds,
    }
  }

  /// Full four-round MD5.
  #[inline]
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// MD5 running only its first `rounds` rounds.
  ///
  /// # Errors
  ///
  /// [`DigestError::UnsupportedRounds`] unless `1 <= rounds <= 4`.
  pub const fn with_rounds(rounds: usize) -> Result<Self, DigestError> {
    if rounds == 0 || rounds > ROUNDS {
      return Err(DigestError::UnsupportedRounds { rounds, max: ROUNDS });
    }
    Ok(Self::with_round_count(rounds))
  }

  /// Compute the full-round digest of `data` in one shot.
  #[inline]
  #[must_use]
  pub fn digest(data: &[u8]) -> [u8; OUTPUT_LEN] {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Rounds run per compression.
  #[inline]
  #[must_use]
  pub const fn rounds(&self) -> usize {
    self.rounds
  }

  /// Absorb `data`.
  pub fn update(&mut self, mut data: &[u8]) {
    self.len = self.len.wrapping_add(data.len() as u64);

    if self.buf_len != 0 {
      let take = core::cmp::min(BLOCK_LEN - self.buf_len, data.len());
      self.buf[self.buf_len..self.buf_len + take].copy_from_slice(&data[..take]);
      self.buf_len += take;
      data = &data[take..];
      if self.buf_len < BLOCK_LEN {
        return;
      }
      let block = self.buf;
      self.compress(&block);
      self.buf_len = 0;
    }

    let mut blocks = data.chunks_exact(BLOCK_LEN);
    for chunk in &mut blocks {
      let mut block = [0u8; BLOCK_LEN];
      block.copy_from_slice(chunk);
      self.compress(&block);
    }

    let rest = blocks.remainder();
    self.buf[..rest.len()].copy_from_slice(rest);
    self.buf_len = rest.len();
  }

  /// Pad, compress the final block(s) and return the state little-endian.
  ///
  /// The engine must be reset before it is used again.
  #[must_use]
  pub fn finalize(&mut self) -> [u8; OUTPUT_LEN] {
    let bit_len = self.len.wrapping_mul(8);

    let mut block = [0u8; BLOCK_LEN];
    block[..self.buf_len].copy_from_slice(&self.buf[..self.buf_len]);
    block[self.buf_len] = 0x80;
    if self.buf_len >= LENGTH_OFFSET {
      self.compress(&block);
      block = [0u8; BLOCK_LEN];
    }
    block[LENGTH_OFFSET..].copy_from_slice(&bit_len.to_le_bytes());
    self.compress(&block);
    self.buf_len = 0;

    let mut out = [0u8; OUTPUT_LEN];
    for (chunk, word) in out.chunks_exact_mut(4).zip(self.state) {
      chunk.copy_from_slice(&word.to_le_bytes());
    }
    out
  }

  fn compress(&mut self, block: &[u8; BLOCK_LEN]) {
    let m = load_le_words(block);
    let [mut a, mut b, mut c, mut d] = self.state;

    for round in 0..self.rounds {
      for i in 0..STEPS_PER_ROUND {
        let step = round * STEPS_PER_ROUND + i;
        let (f, g) = step_input(round, b, c, d, step);
        let sum = f.wrapping_add(a).wrapping_add(K[step]).wrapping_add(m[g]);
        a = d;
        d = c;
        c = b;
        b = b.wrapping_add(sum.rotate_left(SHIFTS[round][i % 4]));
      }
    }

    for (h, v) in self.state.iter_mut().zip([a, b, c, d]) {
      *h = h.wrapping_add(v);
    }
  }
}

impl Digest for Md5 {
  #[inline]
  fn algorithm_name(&self) -> &str {
    "MD5"
  }

  #[inline]
  fn digest_size(&self) -> usize {
    OUTPUT_LEN
  }

  #[inline]
  fn reset(&mut self) {
    *self = Self::with_round_count(self.rounds);
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    Md5::update(self, data);
  }

  fn finalize_into(&mut self, out: &mut [u8], offset: usize) -> Result<usize, DigestError> {
    check_output(out.len(), offset, OUTPUT_LEN)?;
    let digest = self.finalize();
    out[..OUTPUT_LEN].copy_from_slice(&digest);
    Ok(OUTPUT_LEN)
  }
}
