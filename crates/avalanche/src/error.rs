use thiserror::Error;
use traits::DigestError;

/// Failure while assembling a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GenerateError {
  /// The digest rejected an output request.
  #[error(transparent)]
  Digest(#[from] DigestError),

  /// The digest reports a zero-length output, so no catalog can be sized.
  #[error("digest {algorithm} reports a zero-byte output")]
  EmptyDigest {
    /// Name reported by the digest.
    algorithm: String,
  },

  /// The analytic catalog length does not fit in `usize`.
  #[error("catalog for a {digest_size}-byte digest does not fit in memory")]
  CatalogSizeOverflow {
    /// Digest size in bytes.
    digest_size: usize,
  },

  /// More bytes were pushed than the catalog was sized for.
  #[error("catalog overflow: write would end at byte {attempted} of a {capacity}-byte catalog")]
  CatalogOverflow {
    /// Pre-computed catalog length.
    capacity: usize,
    /// End offset of the rejected write.
    attempted: usize,
  },
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn digest_errors_pass_through_transparently() {
    let err: GenerateError = DigestError::UnsupportedOffset { offset: 2 }.into();
    assert_eq!(err.to_string(), DigestError::UnsupportedOffset { offset: 2 }.to_string());
  }

  #[test]
  fn overflow_message_names_both_bounds() {
    let err = GenerateError::CatalogOverflow {
      capacity: 529,
      attempted: 530,
    };
    assert_eq!(
      err.to_string(),
      "catalog overflow: write would end at byte 530 of a 529-byte catalog"
    );
  }
}
