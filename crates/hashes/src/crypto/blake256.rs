//! BLAKE-256 (SHA-3 finalist, final round parameters).
//!
//! Portable, `no_std`, pure Rust implementation (unsalted, 14 rounds).
//!
//! The engine is generic over a [`MixingPolicy`] so structural variants such
//! as [`Brake256`](super::Brake256) share the buffering, padding and counter
//! code. Only the compression function consults the policy.
//!
//! # Limitations
//!
//! Messages of 2^32 bits or more are outside the supported range. The bit
//! counter is a full 64-bit value and carries between its words, but no test
//! vectors cover that range.

#![allow(clippy::indexing_slicing)] // Fixed-size state arrays and sigma-driven message indexing

use core::marker::PhantomData;

use traits::{Digest, DigestError, check_output};

use self::padding::{PaddingPlan, PaddingStep, bits_contributed_by};
use crate::util::{load_be_words, rotr32, store_be_words};

mod padding;

pub(crate) const BLOCK_LEN: usize = 64;

/// Digest size in bytes.
pub const OUTPUT_LEN: usize = 32;

/// Round count of BLAKE-256.
pub const ROUNDS: usize = 14;

const BLOCK_BITS: u32 = (BLOCK_LEN * 8) as u32;

const IV: [u32; 8] = [
  0x6A09_E667,
  0xBB67_AE85,
  0x3C6E_F372,
  0xA54F_F53A,
  0x510E_527F,
  0x9B05_688C,
  0x1F83_D9AB,
  0x5BE0_CD19,
];

/// Leading digits of pi.
const C: [u32; 16] = [
  0x243F_6A88,
  0x85A3_08D3,
  0x1319_8A2E,
  0x0370_7344,
  0xA409_3822,
  0x299F_31D0,
  0x082E_FA98,
  0xEC4E_6C89,
  0x4528_21E6,
  0x38D0_1377,
  0xBE54_66CF,
  0x34E9_0C6C,
  0xC0AC_29B7,
  0xC97C_50DD,
  0x3F84_D5B5,
  0xB547_0917,
];

const SIGMA: [[usize; 16]; 10] = [
  [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
  [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
  [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
  [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
  [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
  [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
  [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
  [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
  [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
  [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
];

/// Four column steps, then four diagonal steps.
const QUADS: [[usize; 4]; 8] = [
  [0, 4, 8, 12],
  [1, 5, 9, 13],
  [2, 6, 10, 14],
  [3, 7, 11, 15],
  [0, 5, 10, 15],
  [1, 6, 11, 12],
  [2, 7, 8, 13],
  [3, 4, 9, 14],
];

/// Structural knobs of the compression function.
///
/// Implementors are zero-sized markers; every knob is resolved at compile
/// time.
pub trait MixingPolicy {
  /// Algorithm name reported through [`Digest::algorithm_name`].
  const NAME: &'static str;

  /// Message-word permutation per round (indexed by `round % 10`).
  const SIGMA: &'static [[usize; 16]; 10];

  /// Whether `G` XORs each message word with a round constant.
  const MIX_CONSTANTS: bool;

  /// Whether the chain fold keeps the previous chain value and the salt.
  const FEED_FORWARD: bool;
}

/// The published BLAKE-256 mixing.
#[derive(Clone, Copy, Debug, Default)]
pub struct Blake256Mixing;

impl MixingPolicy for Blake256Mixing {
  const NAME: &'static str = "BLAKE-256";
  const SIGMA: &'static [[usize; 16]; 10] = &SIGMA;
  const MIX_CONSTANTS: bool = true;
  const FEED_FORWARD: bool = true;
}

#[inline(always)]
fn g<P: MixingPolicy>(v: &mut [u32; 16], m: &[u32; 16], s: &[usize; 16], [a, b, c, d]: [usize; 4], i: usize) {
  let x = s[2 * i];
  let y = s[2 * i + 1];
  let (mx, my) = if P::MIX_CONSTANTS {
    (m[x] ^ C[y], m[y] ^ C[x])
  } else {
    (m[x], m[y])
  };

  v[a] = v[a].wrapping_add(v[b]).wrapping_add(mx);
  v[d] = rotr32(v[d] ^ v[a], 16);
  v[c] = v[c].wrapping_add(v[d]);
  v[b] = rotr32(v[b] ^ v[c], 12);
  v[a] = v[a].wrapping_add(v[b]).wrapping_add(my);
  v[d] = rotr32(v[d] ^ v[a], 8);
  v[c] = v[c].wrapping_add(v[d]);
  v[b] = rotr32(v[b] ^ v[c], 7);
}

/// Streaming BLAKE-family engine.
///
/// After [`finalize`](Self::finalize) the state is spent; call
/// [`Digest::reset`] before hashing another message.
pub struct BlakeEngine<P> {
  chain: [u32; 8],
  salt: [u32; 4],
  /// Message bits absorbed so far: `[low, high]`.
  t: [u32; 2],
  buf: [u8; BLOCK_LEN],
  buf_len: usize,
  padding_only: bool,
  rounds: usize,
  _policy: PhantomData<P>,
}

/// BLAKE-256.
///
/// # Example
///
/// ```rust
/// use hashes::crypto::Blake256;
///
/// let mut h = Blake256::new();
/// h.update(b"a");
/// h.update(b"bc");
/// assert_eq!(h.finalize(), Blake256::digest(b"abc"));
/// ```
pub type Blake256 = BlakeEngine<Blake256Mixing>;

impl<P> Clone for BlakeEngine<P> {
  #[inline]
  fn clone(&self) -> Self {
    Self {
      chain: self.chain,
      salt: self.salt,
      t: self.t,
      buf: self.buf,
      buf_len: self.buf_len,
      padding_only: self.padding_only,
      rounds: self.rounds,
      _policy: PhantomData,
    }
  }
}

impl<P: MixingPolicy> Default for BlakeEngine<P> {
  #[inline]
  fn default() -> Self {
    Self::with_round_count(ROUNDS)
  }
}

impl<P: MixingPolicy> BlakeEngine<P> {
  #[inline]
  pub(crate) const fn with_round_count(rounds: usize) -> Self {
    Self {
      chain: IV,
      salt: [0; 4],
      t: [0; 2],
      buf: [0; BLOCK_LEN],
      buf_len: 0,
      padding_only: false,
      rounds,
      _policy: PhantomData,
    }
  }

  /// Create an engine in its initial state.
  #[inline]
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Compute the digest of `data` in one shot.
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

  /// Message bits absorbed into completed compressions.
  #[inline]
  #[must_use]
  pub const fn counter(&self) -> u64 {
    ((self.t[1] as u64) << 32) | self.t[0] as u64
  }

  #[inline]
  fn set_counter(&mut self, bits: u64) {
    self.t = [bits as u32, (bits >> 32) as u32];
  }

  /// Add `bits`; a wrap of the low word carries into the high word.
  #[inline]
  fn advance(&mut self, bits: u32) {
    self.set_counter(self.counter().wrapping_add(bits as u64));
  }

  /// Remove `bits`; an underflow of the low word borrows from the high word.
  #[inline]
  fn retract(&mut self, bits: u32) {
    self.set_counter(self.counter().wrapping_sub(bits as u64));
  }

  /// Absorb `data`, compressing every block as soon as it is complete.
  pub fn update(&mut self, mut data: &[u8]) {
    if data.is_empty() {
      return;
    }

    if self.buf_len != 0 {
      let take = core::cmp::min(BLOCK_LEN - self.buf_len, data.len());
      self.buf[self.buf_len..self.buf_len + take].copy_from_slice(&data[..take]);
      self.buf_len += take;
      data = &data[take..];

      if self.buf_len < BLOCK_LEN {
        return;
      }
      let block = self.buf;
      self.absorb_block(&block);
      self.buf_len = 0;
    }

    let mut blocks = data.chunks_exact(BLOCK_LEN);
    for chunk in &mut blocks {
      let mut block = [0u8; BLOCK_LEN];
      block.copy_from_slice(chunk);
      self.absorb_block(&block);
    }

    let rest = blocks.remainder();
    self.buf[..rest.len()].copy_from_slice(rest);
    self.buf_len = rest.len();
  }

  /// Pad the message, compress the final block(s) and return the chain value.
  ///
  /// The engine must be reset before it is used again.
  #[must_use]
  pub fn finalize(&mut self) -> [u8; OUTPUT_LEN] {
    let message_bits = self.counter().wrapping_add((self.buf_len as u64) * 8);
    let plan = PaddingPlan::for_buffered(self.buf_len);

    for &step in plan.steps() {
      if step.starts_padding_only_block() {
        self.padding_only = true;
      }
      self.retract(bits_contributed_by(step));
      match step {
        PaddingStep::Length => self.update(&message_bits.to_be_bytes()),
        padding => self.update(padding.bytes()),
      }
    }
    debug_assert_eq!(self.buf_len, 0);

    store_be_words(&self.chain)
  }

  #[inline]
  fn absorb_block(&mut self, block: &[u8; BLOCK_LEN]) {
    self.advance(BLOCK_BITS);
    self.compress(block);
  }

  fn compress(&mut self, block: &[u8; BLOCK_LEN]) {
    let m = load_be_words(block);

    let mut v = [0u32; 16];
    v[..8].copy_from_slice(&self.chain);
    for k in 0..4 {
      v[8 + k] = self.salt[k] ^ C[k];
      v[12 + k] = C[4 + k];
    }
    // Blocks without message bits leave the counter out entirely.
    if !self.padding_only {
      v[12] ^= self.t[0];
      v[13] ^= self.t[0];
      v[14] ^= self.t[1];
      v[15] ^= self.t[1];
    }

    for r in 0..self.rounds {
      let s = &P::SIGMA[r % 10];
      for (i, quad) in QUADS.iter().enumerate() {
        g::<P>(&mut v, &m, s, *quad, i);
      }
    }

    for k in 0..8 {
      let folded = v[k] ^ v[k + 8];
      self.chain[k] = if P::FEED_FORWARD {
        self.chain[k] ^ self.salt[k % 4] ^ folded
      } else {
        folded
      };
    }
  }
}

impl<P: MixingPolicy> Digest for BlakeEngine<P> {
  #[inline]
  fn algorithm_name(&self) -> &str {
    P::NAME
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
    BlakeEngine::update(self, data);
  }

  fn finalize_into(&mut self, out: &mut [u8], offset: usize) -> Result<usize, DigestError> {
    check_output(out.len(), offset, OUTPUT_LEN)?;
    let digest = self.finalize();
    out[..OUTPUT_LEN].copy_from_slice(&digest);
    Ok(OUTPUT_LEN)
  }
}
