//! Streaming digest capability.
//!
//! The trait is object safe: generators take `&mut dyn Digest` so one
//! generator can drive any engine selected at runtime.

use crate::DigestError;

/// Hash function producing a fixed-size digest from a byte stream.
///
/// # Lifecycle
///
/// `reset -> update* -> finalize_into`. After `finalize_into` the internal
/// state is spent: callers must call [`reset`](Self::reset) before hashing the
/// next message. Implementations never reset themselves implicitly.
///
/// # Example
///
/// ```rust
/// # use traits::{Digest, DigestError, check_output};
/// # struct SumDigest(u8);
/// # impl Digest for SumDigest {
/// #   fn algorithm_name(&self) -> &str { "SUM-8" }
/// #   fn digest_size(&self) -> usize { 1 }
/// #   fn reset(&mut self) { self.0 = 0; }
/// #   fn update(&mut self, data: &[u8]) {
/// #     self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(b));
/// #   }
/// #   fn finalize_into(&mut self, out: &mut [u8], offset: usize) -> Result<usize, DigestError> {
/// #     check_output(out.len(), offset, 1)?;
/// #     out[0] = self.0;
/// #     Ok(1)
/// #   }
/// # }
/// let mut h = SumDigest(0);
/// h.update(b"ab");
/// h.update_byte(b'c');
///
/// let mut out = [0u8; 1];
/// assert_eq!(h.finalize_reset(&mut out)?, 1);
/// assert_eq!(out[0], b'a'.wrapping_add(b'b').wrapping_add(b'c'));
///
/// assert_eq!(
///   h.finalize_into(&mut out, 3),
///   Err(DigestError::UnsupportedOffset { offset: 3 })
/// );
/// # Ok::<(), DigestError>(())
/// ```
pub trait Digest {
  /// Human-readable algorithm name, e.g. `"BLAKE-256"`.
  fn algorithm_name(&self) -> &str;

  /// Digest size in bytes.
  fn digest_size(&self) -> usize;

  /// Restore the initial state.
  fn reset(&mut self);

  /// Absorb `data`.
  fn update(&mut self, data: &[u8]);

  /// Absorb a single byte.
  #[inline]
  fn update_byte(&mut self, byte: u8) {
    self.update(core::slice::from_ref(&byte));
  }

  /// Finish the message and write the digest to the start of `out`.
  ///
  /// Returns the number of bytes written (always [`digest_size`](Self::digest_size)).
  ///
  /// # Errors
  ///
  /// - [`DigestError::UnsupportedOffset`] if `offset != 0`.
  /// - [`DigestError::OutputTooSmall`] if `out` cannot hold the digest.
  fn finalize_into(&mut self, out: &mut [u8], offset: usize) -> Result<usize, DigestError>;

  /// Finalize at offset zero, then reset.
  ///
  /// This is the per-message sequence the avalanche generators run.
  #[inline]
  fn finalize_reset(&mut self, out: &mut [u8]) -> Result<usize, DigestError> {
    let written = self.finalize_into(out, 0)?;
    self.reset();
    Ok(written)
  }
}

/// Validate an output request before an implementation writes its digest.
///
/// # Errors
///
/// Returns [`DigestError::UnsupportedOffset`] for any non-zero offset and
/// [`DigestError::OutputTooSmall`] when `out_len < digest_size`.
#[inline]
pub const fn check_output(out_len: usize, offset: usize, digest_size: usize) -> Result<(), DigestError> {
  if offset != 0 {
    return Err(DigestError::UnsupportedOffset { offset });
  }
  if out_len < digest_size {
    return Err(DigestError::OutputTooSmall {
      needed: digest_size,
      actual: out_len,
    });
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Default)]
  struct XorDigest {
    acc: u8,
    resets: usize,
  }

  impl Digest for XorDigest {
    fn algorithm_name(&self) -> &str {
      "XOR-8"
    }

    fn digest_size(&self) -> usize {
      1
    }

    fn reset(&mut self) {
      self.acc = 0;
      self.resets += 1;
    }

    fn update(&mut self, data: &[u8]) {
      self.acc = data.iter().fold(self.acc, |acc, &b| acc ^ b);
    }

    fn finalize_into(&mut self, out: &mut [u8], offset: usize) -> Result<usize, DigestError> {
      check_output(out.len(), offset, 1)?;
      out[0] = self.acc;
      Ok(1)
    }
  }

  #[test]
  fn update_byte_matches_slice_update() {
    let mut a = XorDigest::default();
    let mut b = XorDigest::default();
    a.update(&[0x12, 0x34]);
    b.update_byte(0x12);
    b.update_byte(0x34);

    let (mut oa, mut ob) = ([0u8; 1], [0u8; 1]);
    a.finalize_into(&mut oa, 0).unwrap();
    b.finalize_into(&mut ob, 0).unwrap();
    assert_eq!(oa, ob);
  }

  #[test]
  fn finalize_reset_resets_exactly_once() {
    let mut d = XorDigest::default();
    d.update(&[0xAA]);
    let mut out = [0u8; 1];
    assert_eq!(d.finalize_reset(&mut out), Ok(1));
    assert_eq!(out, [0xAA]);
    assert_eq!(d.resets, 1);
    assert_eq!(d.acc, 0);
  }

  #[test]
  fn finalize_reset_skips_reset_on_error() {
    let mut d = XorDigest::default();
    d.update(&[0xAA]);
    let mut out = [0u8; 0];
    assert!(d.finalize_reset(&mut out).is_err());
    assert_eq!(d.resets, 0);
    assert_eq!(d.acc, 0xAA);
  }

  #[test]
  fn nonzero_offset_is_rejected() {
    assert_eq!(check_output(64, 1, 32), Err(DigestError::UnsupportedOffset { offset: 1 }));
  }

  #[test]
  fn short_output_is_rejected() {
    assert_eq!(
      check_output(16, 0, 32),
      Err(DigestError::OutputTooSmall { needed: 32, actual: 16 })
    );
    assert_eq!(check_output(32, 0, 32), Ok(()));
  }

  #[test]
  fn trait_is_object_safe() {
    let mut concrete = XorDigest::default();
    let dynamic: &mut dyn Digest = &mut concrete;
    dynamic.update(b"x");
    assert_eq!(dynamic.algorithm_name(), "XOR-8");
    assert_eq!(dynamic.digest_size(), 1);
  }
}
