use traits::Digest;

use crate::{Density, GenerateError, Generator, pairwise};

/// Pairwise avalanche catalog over an all-zero baseline.
///
/// Pairs are deduplicated by index: once `(i, j)` is written, `(j, i)` is
/// skipped without hashing.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowDensityGenerator;

impl LowDensityGenerator {
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Generator for LowDensityGenerator {
  #[inline]
  fn name(&self) -> &'static str {
    "lowdensity"
  }

  fn generate_bytes(&self, digest: &mut dyn Digest) -> Result<Vec<u8>, GenerateError> {
    pairwise::run::<SymmetricPairs>(self.name(), Density::Low, digest)
  }
}

/// `bits x bits` table of pairs already emitted, marked symmetrically.
struct SymmetricPairs {
  bits: usize,
  seen: Vec<bool>,
}

impl SymmetricPairs {
  #[inline]
  fn mark(&mut self, a: usize, b: usize) {
    if let Some(slot) = self.seen.get_mut(a * self.bits + b) {
      *slot = true;
    }
  }
}

impl pairwise::PairFilter for SymmetricPairs {
  fn for_bits(bits: usize) -> Self {
    Self {
      bits,
      seen: vec![false; bits * bits],
    }
  }

  fn wants(&mut self, i: usize, j: usize) -> bool {
    if self.seen.get(i * self.bits + j).copied().unwrap_or(true) {
      return false;
    }
    self.mark(i, j);
    self.mark(j, i);
    true
  }
}
