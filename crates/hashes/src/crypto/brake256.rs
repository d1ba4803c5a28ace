//! BRAKE-256: BLAKE-256 with its diffusion machinery removed (**NOT CRYPTO**).
//!
//! Relative to BLAKE-256:
//! - the round count is chosen at construction (default 14);
//! - every round uses the identity message order;
//! - `G` adds message words without XORing round constants;
//! - the chain fold drops the feed-forward of the previous chain value and
//!   the salt, leaving `h[k] = v[k] ^ v[k + 8]`.
//!
//! The result has poor avalanche behavior by construction and serves as a
//! contrast baseline for the generators.

use super::blake256::{BlakeEngine, MixingPolicy};

const IDENTITY: [usize; 16] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];

const IDENTITY_SIGMA: [[usize; 16]; 10] = [IDENTITY; 10];

/// Mixing with identity permutations, no constants and no feed-forward.
#[derive(Clone, Copy, Debug, Default)]
pub struct Brake256Mixing;

impl MixingPolicy for Brake256Mixing {
  const NAME: &'static str = "BRAKE-256";
  const SIGMA: &'static [[usize; 16]; 10] = &IDENTITY_SIGMA;
  const MIX_CONSTANTS: bool = false;
  const FEED_FORWARD: bool = false;
}

/// BRAKE-256.
///
/// # Example
///
/// ```rust
/// use hashes::crypto::{Blake256, Brake256};
///
/// assert_ne!(Brake256::digest(b""), Blake256::digest(b""));
/// assert_eq!(Brake256::with_rounds(1).rounds(), 1);
/// ```
pub type Brake256 = BlakeEngine<Brake256Mixing>;

impl BlakeEngine<Brake256Mixing> {
  /// Create an engine running `rounds` rounds per compression.
  ///
  /// Zero rounds is accepted: the working vector is folded unmixed.
  #[inline]
  #[must_use]
  pub const fn with_rounds(rounds: usize) -> Self {
    Self::with_round_count(rounds)
  }
}
