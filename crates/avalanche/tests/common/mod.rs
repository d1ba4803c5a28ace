//! Toy digests with predictable outputs, small enough for exhaustive pair
//! enumeration.

#![allow(dead_code)]

use traits::{Digest, DigestError, check_output};

/// Reports which bits of the message differ from a constant background byte.
///
/// Output byte `k` is `1 + position` of the `k`-th differing bit (MSB-first),
/// or `0` when there are fewer differing bits. Injective over the baseline,
/// its single flips and its pair flips.
pub struct Positions {
  background: u8,
  message: Vec<u8>,
}

impl Positions {
  pub fn new(background: u8) -> Self {
    Self {
      background,
      message: Vec::new(),
    }
  }
}

impl Digest for Positions {
  fn algorithm_name(&self) -> &str {
    "POSITIONS"
  }

  fn digest_size(&self) -> usize {
    2
  }

  fn reset(&mut self) {
    self.message.clear();
  }

  fn update(&mut self, data: &[u8]) {
    self.message.extend_from_slice(data);
  }

  fn finalize_into(&mut self, out: &mut [u8], offset: usize) -> Result<usize, DigestError> {
    check_output(out.len(), offset, 2)?;
    let mut found = [0u8; 2];
    let mut n = 0;
    for (index, byte) in self.message.iter().enumerate() {
      let diff = byte ^ self.background;
      for bit in 0..8 {
        if diff & (0x80 >> bit) != 0 && n < 2 {
          found[n] = u8::try_from(index * 8 + bit + 1).unwrap();
          n += 1;
        }
      }
    }
    out[..2].copy_from_slice(&found);
    Ok(2)
  }
}

/// One-byte digest: the number of set bits in the message. Collides freely.
#[derive(Default)]
pub struct PopCount(u32);

impl Digest for PopCount {
  fn algorithm_name(&self) -> &str {
    "POPCOUNT"
  }

  fn digest_size(&self) -> usize {
    1
  }

  fn reset(&mut self) {
    self.0 = 0;
  }

  fn update(&mut self, data: &[u8]) {
    self.0 += data.iter().map(|b| b.count_ones()).sum::<u32>();
  }

  fn finalize_into(&mut self, out: &mut [u8], offset: usize) -> Result<usize, DigestError> {
    check_output(out.len(), offset, 1)?;
    out[0] = self.0 as u8;
    Ok(1)
  }
}

/// Reports a zero-byte output.
pub struct Empty;

impl Digest for Empty {
  fn algorithm_name(&self) -> &str {
    "EMPTY"
  }

  fn digest_size(&self) -> usize {
    0
  }

  fn reset(&mut self) {}

  fn update(&mut self, _data: &[u8]) {}

  fn finalize_into(&mut self, _out: &mut [u8], offset: usize) -> Result<usize, DigestError> {
    check_output(0, offset, 0)?;
    Ok(0)
  }
}

pub fn init_logging() {
  let _ = env_logger::builder().is_test(true).try_init();
}
