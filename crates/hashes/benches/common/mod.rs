use core::hint::black_box;

use criterion::{BenchmarkGroup, Throughput, measurement::WallTime};

/// Input lengths covering each BLAKE-256 padding branch, one avalanche
/// baseline (`4 * 32` bytes) and a few bulk sizes.
const LENGTHS: [usize; 10] = [0, 1, 55, 56, 63, 64, 128, 1024, 16 * 1024, 1024 * 1024];

/// Filler bytes from a splitmix64 stream.
///
/// Benchmarks hash these instead of constant bytes so runs are not
/// measured on the all-zero or all-one inputs the generators start from.
pub fn filler(len: usize, seed: u64) -> Vec<u8> {
  let mut state = seed;
  let out: Vec<u8> = (0..len)
    .map(|_| {
      state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
      let mut z = state;
      z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
      z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
      (z ^ (z >> 31)) as u8
    })
    .collect();
  black_box(out)
}

pub fn sized_inputs() -> Vec<(usize, Vec<u8>)> {
  LENGTHS.into_iter().map(|len| (len, filler(len, len as u64))).collect()
}

/// Report bytes/s, or hashes/s for the empty message.
pub fn set_throughput(group: &mut BenchmarkGroup<'_, WallTime>, len: usize) {
  group.throughput(match len {
    0 => Throughput::Elements(1),
    n => Throughput::Bytes(n as u64),
  });
}
