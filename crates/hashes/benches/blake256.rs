use core::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hashes::crypto::{Blake256, Brake256, Md5};
use traits::Digest as _;

mod common;

fn one_shot(c: &mut Criterion) {
  let inputs = common::sized_inputs();
  let mut group = c.benchmark_group("hashes/one-shot");

  for (len, data) in &inputs {
    common::set_throughput(&mut group, *len);

    group.bench_with_input(BenchmarkId::new("blake256", len), data, |b, d| {
      b.iter(|| black_box(Blake256::digest(black_box(d))))
    });
    group.bench_with_input(BenchmarkId::new("brake256", len), data, |b, d| {
      b.iter(|| black_box(Brake256::digest(black_box(d))))
    });
    group.bench_with_input(BenchmarkId::new("md5", len), data, |b, d| {
      b.iter(|| black_box(Md5::digest(black_box(d))))
    });
  }

  group.finish();
}

fn brake_rounds(c: &mut Criterion) {
  let data = common::filler(128, 0xB7A4_E256);
  let mut group = c.benchmark_group("hashes/brake256-rounds");
  common::set_throughput(&mut group, data.len());

  for rounds in [1usize, 2, 4, 8, 14] {
    group.bench_with_input(BenchmarkId::from_parameter(rounds), &data, |b, d| {
      b.iter(|| {
        let mut h = Brake256::with_rounds(rounds);
        h.update(black_box(d));
        black_box(h.finalize())
      })
    });
  }

  group.finish();
}

fn md5_rounds(c: &mut Criterion) {
  let data = common::filler(64, 0x00D5_00D5);
  let mut group = c.benchmark_group("hashes/md5-rounds");
  common::set_throughput(&mut group, data.len());

  for rounds in 1usize..=4 {
    let Ok(proto) = Md5::with_rounds(rounds) else {
      continue;
    };
    group.bench_with_input(BenchmarkId::from_parameter(rounds), &data, |b, d| {
      b.iter(|| {
        let mut h = proto.clone();
        h.update(black_box(d));
        black_box(h.finalize())
      })
    });
  }

  group.finish();
}

fn finalize_reset_cycle(c: &mut Criterion) {
  // The per-message cycle the avalanche generators run.
  let data = common::filler(128, 0xA7A1_A4C4);
  let mut out = [0u8; 32];
  c.bench_function("hashes/blake256/update-finalize-reset", |b| {
    let mut h = Blake256::new();
    b.iter(|| {
      h.update(black_box(&data));
      let n = h.finalize_reset(&mut out).unwrap_or_default();
      black_box((n, &out));
    })
  });
}

criterion_group!(benches, one_shot, brake_rounds, md5_rounds, finalize_reset_cycle);
criterion_main!(benches);
