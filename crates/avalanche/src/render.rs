//! Text rendering of binary catalogs.

/// One lowercase hex line per `digest_size`-byte block.
///
/// A short trailing block is rendered as-is. `digest_size == 0` is treated
/// as `1`.
#[must_use]
pub fn to_hex_lines(catalog: &[u8], digest_size: usize) -> Vec<String> {
  catalog.chunks(digest_size.max(1)).map(hex::encode).collect()
}
