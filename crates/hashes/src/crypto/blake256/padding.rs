//! Final-block padding schedule.
//!
//! Padding is appended through the regular streaming path, so every step is
//! preceded by a counter retraction of exactly the bits it will add. The
//! length field written at the end therefore encodes the true message length.

#![allow(clippy::indexing_slicing)] // Slices of a fixed 64-byte padding table

use super::BLOCK_LEN;

/// Buffered length at which the marker, terminator and length field fill a
/// block exactly.
pub(crate) const LENGTH_BOUNDARY: usize = BLOCK_LEN - 9;

static COMBINED: [u8; 1] = [0x81];
static TERMINATOR: [u8; 1] = [0x01];

/// `0x80` followed by zeros.
static PADDING: [u8; BLOCK_LEN] = {
  let mut p = [0u8; BLOCK_LEN];
  p[0] = 0x80;
  p
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PaddingStep {
  /// `0x81` in the single byte left before the length field.
  Combined,
  /// `0x80` and zeros, taking the buffer from `buffered` to [`LENGTH_BOUNDARY`].
  OpenToBoundary { buffered: usize },
  /// `0x80` and zeros, taking the buffer from `buffered` to a full block.
  OpenToBlock { buffered: usize },
  /// Zeros opening a block that carries no message bits.
  ZeroPrefix,
  /// `0x01` closing the padding.
  Terminator,
  /// The 64-bit big-endian message length.
  Length,
}

impl PaddingStep {
  /// Number of bytes this step absorbs.
  #[inline]
  pub(crate) const fn len(self) -> usize {
    match self {
      Self::Combined | Self::Terminator => 1,
      Self::OpenToBoundary { buffered } => LENGTH_BOUNDARY - buffered,
      Self::OpenToBlock { buffered } => BLOCK_LEN - buffered,
      Self::ZeroPrefix => LENGTH_BOUNDARY,
      Self::Length => 8,
    }
  }

  /// Padding bytes for every step except [`Length`](Self::Length), whose
  /// content depends on the message.
  #[inline]
  pub(crate) fn bytes(self) -> &'static [u8] {
    match self {
      Self::Combined => &COMBINED,
      Self::Terminator => &TERMINATOR,
      Self::OpenToBoundary { .. } | Self::OpenToBlock { .. } => &PADDING[..self.len()],
      Self::ZeroPrefix => &PADDING[1..=LENGTH_BOUNDARY],
      Self::Length => &[],
    }
  }

  /// Whether the block completed by this plan from here on holds padding only.
  #[inline]
  pub(crate) const fn starts_padding_only_block(self) -> bool {
    matches!(self, Self::OpenToBoundary { buffered: 0 } | Self::ZeroPrefix)
  }
}

/// Counter bits a padding step would add if left unretracted.
#[inline]
pub(crate) const fn bits_contributed_by(step: PaddingStep) -> u32 {
  (step.len() * 8) as u32
}

/// Ordered padding steps for a given buffered length (at most four).
#[derive(Clone, Copy, Debug)]
pub(crate) struct PaddingPlan {
  steps: [PaddingStep; 4],
  len: usize,
}

impl PaddingPlan {
  pub(crate) const fn for_buffered(buffered: usize) -> Self {
    use PaddingStep::*;

    debug_assert!(buffered < BLOCK_LEN);
    if buffered == LENGTH_BOUNDARY {
      Self {
        steps: [Combined, Length, Length, Length],
        len: 2,
      }
    } else if buffered < LENGTH_BOUNDARY {
      Self {
        steps: [OpenToBoundary { buffered }, Terminator, Length, Length],
        len: 3,
      }
    } else {
      Self {
        steps: [OpenToBlock { buffered }, ZeroPrefix, Terminator, Length],
        len: 4,
      }
    }
  }

  #[inline]
  pub(crate) fn steps(&self) -> &[PaddingStep] {
    &self.steps[..self.len]
  }
}
