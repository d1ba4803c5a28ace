//! Shared baseline / single-flip / pair-flip driver.
//!
//! Both pairwise generators walk the same three phases over a `4d`-byte
//! baseline; they differ only in which pair digests reach the catalog.

use log::{debug, info, warn};
use traits::Digest;

use crate::{
  Density, GenerateError, bits,
  catalog::{Catalog, pairwise_catalog_len, pairwise_input_len},
};

/// Decides which two-bit perturbations are written.
pub(crate) trait PairFilter {
  /// Build a filter for a baseline of `bits` addressable bits.
  fn for_bits(bits: usize) -> Self
  where
    Self: Sized;

  /// Called with the baseline digest and every single-flip digest.
  fn observe(&mut self, _digest: &[u8]) {}

  /// Whether pair `(i, j)` should be hashed at all. `i != j` always.
  fn wants(&mut self, _i: usize, _j: usize) -> bool {
    true
  }

  /// Whether a hashed pair digest is written to the catalog.
  fn admit(&mut self, _digest: &[u8]) -> bool {
    true
  }
}

/// Hash `input` into `out`, leaving the digest ready for the next message.
#[inline]
pub(crate) fn hash_into(digest: &mut dyn Digest, input: &[u8], out: &mut [u8]) -> Result<(), GenerateError> {
  digest.update(input);
  digest.finalize_into(out, 0)?;
  digest.reset();
  Ok(())
}

pub(crate) fn run<F: PairFilter>(
  generator: &'static str,
  density: Density,
  digest: &mut dyn Digest,
) -> Result<Vec<u8>, GenerateError> {
  digest.reset();

  let d = digest.digest_size();
  if d == 0 {
    return Err(GenerateError::EmptyDigest {
      algorithm: digest.algorithm_name().to_owned(),
    });
  }
  let overflow = GenerateError::CatalogSizeOverflow { digest_size: d };
  let catalog_len = pairwise_catalog_len(d).ok_or_else(|| overflow.clone())?;
  let input_len = pairwise_input_len(d).ok_or(overflow)?;

  info!(
    "{generator}: {} catalog of {catalog_len} bytes ({} digests of {d} bytes)",
    digest.algorithm_name(),
    catalog_len / d
  );

  let baseline = density.baseline(input_len);
  let bit_count = bits::bit_len(&baseline);
  let mut filter = F::for_bits(bit_count);
  let mut catalog = Catalog::with_len(catalog_len);
  let mut out = vec![0u8; d];

  hash_into(digest, &baseline, &mut out)?;
  filter.observe(&out);
  catalog.push(&out)?;

  debug!("{generator}: single flips over {bit_count} bits");
  for position in 0..bit_count {
    hash_into(digest, &bits::flip(&baseline, position), &mut out)?;
    filter.observe(&out);
    catalog.push(&out)?;
  }

  debug!("{generator}: pair flips");
  let mut rejected = 0usize;
  for i in 0..bit_count {
    let once = bits::flip(&baseline, i);
    for j in 0..bit_count {
      if i == j || !filter.wants(i, j) {
        continue;
      }
      let mut twice = once.clone();
      bits::toggle(&mut twice, j);
      hash_into(digest, &twice, &mut out)?;
      if filter.admit(&out) {
        catalog.push(&out)?;
      } else {
        rejected += 1;
      }
    }
  }
  debug!("{generator}: {rejected} pair digests rejected");

  if !catalog.is_full() {
    warn!(
      "{generator}: {} collided on {} pair digests; last {} bytes of the catalog are zero",
      digest.algorithm_name(),
      catalog.remaining() / d,
      catalog.remaining()
    );
  }

  Ok(catalog.into_bytes())
}
