use hashes::crypto::{Blake256, Brake256};

fn bit_distance(a: &[u8], b: &[u8]) -> u32 {
  a.iter().zip(b).map(|(x, y)| (x ^ y).count_ones()).sum()
}

#[test]
fn brake256_differs_from_blake256_on_empty_message() {
  assert_ne!(Brake256::digest(b""), Blake256::digest(b""));
}

#[test]
fn brake256_default_matches_fourteen_rounds() {
  let mut h = Brake256::with_rounds(14);
  h.update(b"abc");
  assert_eq!(h.finalize(), Brake256::digest(b"abc"));
}

#[test]
fn single_round_brake256_barely_diffuses_a_bit_flip() {
  // A 55-byte message pads into a single block, so one round of one
  // compression is all the mixing BRAKE-256 applies. The flipped bit lands in
  // message word 13, which only feeds the second half of the seventh G.
  let base = [0u8; 55];
  let mut flipped = base;
  flipped[54] ^= 1;

  let mut a = Brake256::with_rounds(1);
  let mut b = Brake256::with_rounds(1);
  a.update(&base);
  b.update(&flipped);
  let weak = bit_distance(&a.finalize(), &b.finalize());

  let strong = bit_distance(&Blake256::digest(&base), &Blake256::digest(&flipped));

  assert!(weak > 0);
  assert!(weak < 64, "one BRAKE round should stay local, got {weak}");
  assert!(strong > 64, "BLAKE-256 should flip a large share of bits, got {strong}");
}
