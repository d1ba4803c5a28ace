#![no_main]

use hashes::crypto::{Blake256, Brake256};
use libfuzzer_sys::fuzz_target;
use traits::Digest;

fn split_point(input: &[u8]) -> usize {
  if input.is_empty() {
    return 0;
  }
  (input[0] as usize) % (input.len() + 1)
}

fuzz_target!(|input: &[u8]| {
  let split = split_point(input);
  let (a, b) = input.split_at(split);

  {
    let ours = Blake256::digest(input);
    let mut h = Blake256::new();
    h.update(a);
    h.update(b);
    assert_eq!(ours, h.finalize());

    // Reuse after an explicit reset must not leak state.
    Digest::reset(&mut h);
    h.update(input);
    assert_eq!(ours, h.finalize());
  }

  {
    let rounds = input.len() % 15;
    let mut one = Brake256::with_rounds(rounds);
    one.update(input);
    let mut two = Brake256::with_rounds(rounds);
    two.update(a);
    two.update(b);
    assert_eq!(one.finalize(), two.finalize());
  }
});
