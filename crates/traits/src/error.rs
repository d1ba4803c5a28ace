//! Error types for digest operations.
//!
//! Only usage errors live here: they are raised immediately and are never
//! retried. Message lengths beyond 2^32 bits are a documented limitation of
//! the engines, not an error condition.

use thiserror::Error;

/// A digest was configured or read in a way the engines do not support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[non_exhaustive]
pub enum DigestError {
  /// Only a zero output offset is supported.
  #[error("output offsets are not supported (requested offset {offset})")]
  UnsupportedOffset {
    /// The rejected offset.
    offset: usize,
  },

  /// The output buffer cannot hold the digest.
  #[error("output buffer too small: need {needed} bytes, got {actual}")]
  OutputTooSmall {
    /// Digest size in bytes.
    needed: usize,
    /// Length of the buffer that was supplied.
    actual: usize,
  },

  /// The requested round count is outside what the algorithm defines.
  #[error("unsupported round count {rounds}: expected 1..={max}")]
  UnsupportedRounds {
    /// The rejected round count.
    rounds: usize,
    /// Largest valid round count.
    max: usize,
  },
}
