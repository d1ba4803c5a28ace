use log::debug;
use traits::Digest;

use crate::{GenerateError, Generator, catalog::Catalog, pairwise::hash_into};

/// Default number of chained digests.
pub const DEFAULT_BLOCKS: usize = 8;

/// Smoke-test generator: hash a zero seed, then keep hashing the previous
/// digest, appending every output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainedGenerator {
  blocks: usize,
}

impl Default for ChainedGenerator {
  #[inline]
  fn default() -> Self {
    Self { blocks: DEFAULT_BLOCKS }
  }
}

impl ChainedGenerator {
  /// Chain `blocks` digests instead of [`DEFAULT_BLOCKS`].
  #[inline]
  #[must_use]
  pub const fn with_blocks(blocks: usize) -> Self {
    Self { blocks }
  }

  #[inline]
  #[must_use]
  pub const fn blocks(&self) -> usize {
    self.blocks
  }
}

impl Generator for ChainedGenerator {
  #[inline]
  fn name(&self) -> &'static str {
    "test"
  }

  fn generate_bytes(&self, digest: &mut dyn Digest) -> Result<Vec<u8>, GenerateError> {
    digest.reset();
    let d = digest.digest_size();
    if d == 0 {
      return Err(GenerateError::EmptyDigest {
        algorithm: digest.algorithm_name().to_owned(),
      });
    }
    let len = d
      .checked_mul(self.blocks)
      .ok_or(GenerateError::CatalogSizeOverflow { digest_size: d })?;
    debug!("test: chaining {} {} digests", self.blocks, digest.algorithm_name());

    let mut catalog = Catalog::with_len(len);
    let mut previous = vec![0u8; d];
    let mut next = vec![0u8; d];
    for _ in 0..self.blocks {
      hash_into(digest, &previous, &mut next)?;
      catalog.push(&next)?;
      core::mem::swap(&mut previous, &mut next);
    }
    Ok(catalog.into_bytes())
  }
}
