//! Bit addressing over byte strings.
//!
//! Bit `0` is the most significant bit of byte `0`; bit `8 * len - 1` is the
//! least significant bit of the last byte.

/// Mask selecting `position` within its byte.
#[inline]
#[must_use]
pub const fn bit_mask(position: usize) -> u8 {
  0x80 >> (position % 8)
}

/// Number of addressable bits in `bytes`.
#[inline]
#[must_use]
pub const fn bit_len(bytes: &[u8]) -> usize {
  bytes.len() * 8
}

/// Toggle one bit in place.
///
/// Positions past the end trip a debug assertion and are ignored in release
/// builds.
#[inline]
pub fn toggle(bytes: &mut [u8], position: usize) {
  debug_assert!(position < bit_len(bytes), "bit {position} out of range");
  if let Some(byte) = bytes.get_mut(position / 8) {
    *byte ^= bit_mask(position);
  }
}

/// Return a copy of `bytes` with one bit toggled; `bytes` is left untouched.
#[inline]
#[must_use]
pub fn flip(bytes: &[u8], position: usize) -> Vec<u8> {
  let mut out = bytes.to_vec();
  toggle(&mut out, position);
  out
}

/// Read one bit.
#[inline]
#[must_use]
pub fn is_set(bytes: &[u8], position: usize) -> bool {
  bytes.get(position / 8).is_some_and(|b| b & bit_mask(position) != 0)
}
