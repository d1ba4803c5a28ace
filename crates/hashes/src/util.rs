#![allow(clippy::indexing_slicing)] // Block parsing over fixed-size arrays

#[inline(always)]
pub const fn rotr32(x: u32, n: u32) -> u32 {
  x.rotate_right(n)
}

/// Decode a 64-byte block into sixteen big-endian words.
#[inline(always)]
pub fn load_be_words(block: &[u8; 64]) -> [u32; 16] {
  let mut m = [0u32; 16];
  for (word, c) in m.iter_mut().zip(block.chunks_exact(4)) {
    *word = u32::from_be_bytes([c[0], c[1], c[2], c[3]]);
  }
  m
}

/// Encode eight words big-endian.
#[inline(always)]
pub fn store_be_words(words: &[u32; 8]) -> [u8; 32] {
  let mut out = [0u8; 32];
  for (chunk, word) in out.chunks_exact_mut(4).zip(words) {
    chunk.copy_from_slice(&word.to_be_bytes());
  }
  out
}

/// Decode a 64-byte block into sixteen little-endian words.
#[inline(always)]
pub fn load_le_words(block: &[u8; 64]) -> [u32; 16] {
  let mut m = [0u32; 16];
  for (word, c) in m.iter_mut().zip(block.chunks_exact(4)) {
    *word = u32::from_le_bytes([c[0], c[1], c[2], c[3]]);
  }
  m
}
