use traits::Digest;

use crate::GenerateError;

/// Produces a catalog of digests from a [`Digest`].
///
/// Implementations reset the digest before first use and after every
/// finalize; they never rely on the digest resetting itself.
pub trait Generator {
  /// Short identifier used in output file names.
  fn name(&self) -> &'static str;

  /// Build the full catalog.
  ///
  /// # Errors
  ///
  /// Propagates digest usage errors and catalog sizing failures.
  fn generate_bytes(&self, digest: &mut dyn Digest) -> Result<Vec<u8>, GenerateError>;
}

/// Baseline bit density for the pairwise generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Density {
  /// All-zero baseline.
  Low,
  /// All-one baseline.
  High,
}

impl Density {
  /// Byte value the baseline is filled with.
  #[inline]
  #[must_use]
  pub const fn fill(self) -> u8 {
    match self {
      Self::Low => 0x00,
      Self::High => 0xFF,
    }
  }

  /// `len` bytes of [`fill`](Self::fill).
  #[inline]
  #[must_use]
  pub fn baseline(self, len: usize) -> Vec<u8> {
    vec![self.fill(); len]
  }
}
