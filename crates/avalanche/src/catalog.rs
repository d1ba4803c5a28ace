//! Catalog sizing and assembly.
//!
//! Catalog lengths are computed analytically so the output buffer is
//! allocated once; generation never grows it.

use crate::GenerateError;

/// Pairwise generators hash inputs of `INPUT_MULTIPLIER * digest_size` bytes.
pub const INPUT_MULTIPLIER: usize = 4;

/// Baseline input length for the pairwise generators.
#[inline]
#[must_use]
pub const fn pairwise_input_len(digest_size: usize) -> Option<usize> {
  digest_size.checked_mul(INPUT_MULTIPLIER)
}

/// `d + bits * d + C(bits, 2) * d`, with `bits = 8 * INPUT_MULTIPLIER * d`.
///
/// Returns `None` when the length does not fit in `usize`.
#[must_use]
pub const fn pairwise_catalog_len(digest_size: usize) -> Option<usize> {
  let Some(input_len) = pairwise_input_len(digest_size) else {
    return None;
  };
  let Some(bits) = input_len.checked_mul(8) else {
    return None;
  };
  let Some(ordered) = bits.checked_mul(bits.saturating_sub(1)) else {
    return None;
  };
  let pairs = ordered / 2;
  let Some(blocks) = bits.checked_add(pairs) else {
    return None;
  };
  let Some(blocks) = blocks.checked_add(1) else {
    return None;
  };
  blocks.checked_mul(digest_size)
}

/// Pre-sized output buffer with a write cursor.
#[derive(Debug, Clone)]
pub struct Catalog {
  bytes: Vec<u8>,
  written: usize,
}

impl Catalog {
  /// Allocate a zero-filled catalog of exactly `len` bytes.
  #[must_use]
  pub fn with_len(len: usize) -> Self {
    Self {
      bytes: vec![0u8; len],
      written: 0,
    }
  }

  /// Append one digest.
  ///
  /// # Errors
  ///
  /// [`GenerateError::CatalogOverflow`] if the digest does not fit in the
  /// remaining space; nothing is written in that case.
  pub fn push(&mut self, digest: &[u8]) -> Result<(), GenerateError> {
    let capacity = self.bytes.len();
    let end = self.written.saturating_add(digest.len());
    let slot = self
      .bytes
      .get_mut(self.written..end)
      .ok_or(GenerateError::CatalogOverflow {
        capacity,
        attempted: end,
      })?;
    slot.copy_from_slice(digest);
    self.written = end;
    Ok(())
  }

  /// Total catalog length.
  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.bytes.len()
  }

  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.bytes.is_empty()
  }

  /// Bytes written so far.
  #[inline]
  #[must_use]
  pub fn written(&self) -> usize {
    self.written
  }

  /// Bytes still zero-filled at the tail.
  #[inline]
  #[must_use]
  pub fn remaining(&self) -> usize {
    self.bytes.len() - self.written
  }

  #[inline]
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.remaining() == 0
  }

  /// The whole catalog, including any unwritten tail.
  #[inline]
  #[must_use]
  pub fn into_bytes(self) -> Vec<u8> {
    self.bytes
  }
}
