use std::collections::HashSet;

use traits::Digest;

use crate::{Density, GenerateError, Generator, pairwise};

/// Pairwise avalanche catalog over an all-ones baseline.
///
/// Pairs are deduplicated by output: a pair digest already present anywhere
/// in the catalog (baseline and single flips included) is not written again.
/// Mirrored pairs hash the same input, so they are rejected the same way.
#[derive(Debug, Clone, Copy, Default)]
pub struct HighDensityGenerator;

impl HighDensityGenerator {
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Generator for HighDensityGenerator {
  #[inline]
  fn name(&self) -> &'static str {
    "highdensity"
  }

  fn generate_bytes(&self, digest: &mut dyn Digest) -> Result<Vec<u8>, GenerateError> {
    pairwise::run::<SeenDigests>(self.name(), Density::High, digest)
  }
}

/// Every digest written so far.
struct SeenDigests(HashSet<Vec<u8>>);

impl pairwise::PairFilter for SeenDigests {
  fn for_bits(bits: usize) -> Self {
    Self(HashSet::with_capacity(bits.saturating_mul(bits) / 2 + bits + 1))
  }

  fn observe(&mut self, digest: &[u8]) {
    self.0.insert(digest.to_vec());
  }

  fn admit(&mut self, digest: &[u8]) -> bool {
    if self.0.contains(digest) {
      return false;
    }
    self.0.insert(digest.to_vec())
  }
}
