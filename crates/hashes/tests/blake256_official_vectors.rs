use hashes::crypto::Blake256;
use traits::Digest;

fn expected(hex_digest: &str) -> [u8; 32] {
  let mut out = [0u8; 32];
  hex::decode_to_slice(hex_digest, &mut out).unwrap();
  out
}

fn streamed(data: &[u8]) -> [u8; 32] {
  let mut h = Blake256::new();
  let mut out = [0u8; 32];
  Digest::update(&mut h, data);
  h.finalize_into(&mut out, 0).unwrap();
  out
}

const VECTORS: &[(&str, &[u8], &str)] = &[
  (
    "0 bits",
    b"",
    "716f6e863f744b9ac22c97ec7b76ea5f5908bc5b2f67c61510bfc4751384ea7a",
  ),
  (
    "8 bits (single zero byte)",
    &[0u8],
    "0ce8d4ef4dd7cd8d62dfded9d4edb0a774ae6a41929a74da23109e8f11139c87",
  ),
  (
    "24 bits",
    b"abc",
    "1833a9fa7cf4086bd5fda73da32e5a1d75b4c3f89d5c436369f9d78bb2da5c28",
  ),
  (
    "448 bits",
    b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
    "adb13cb0da78463d36fcf40def3f291b3f0673e78127bdb70942cdd640b907b4",
  ),
  (
    "576 bits (72 zero bytes)",
    &[0u8; 72],
    "d419bad32d504fb7d44d460c42c5593fe544fa4c135dec31e21bd9abdcc22d41",
  ),
  (
    "896 bits",
    b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
    "8f69d890786569cc878e9995a0ebf5e319746482ab56b8184fec5267190e6ade",
  ),
];

#[test]
fn blake256_official_vectors() {
  for (name, input, digest) in VECTORS {
    assert_eq!(Blake256::digest(input), expected(digest), "one-shot mismatch for {name}");
    assert_eq!(streamed(input), expected(digest), "trait path mismatch for {name}");
  }
}

#[test]
fn blake256_million_a() {
  let data = vec![b'a'; 1_000_000];
  let want = expected("22be6de4aa4214c9403f10598f0a6b0e834570251a13bc27589437f7139a5d44");
  assert_eq!(Blake256::digest(&data), want);

  // Same message fed in uneven pieces.
  let mut h = Blake256::new();
  for chunk in data.chunks(1000 - 1) {
    h.update(chunk);
  }
  assert_eq!(h.finalize(), want);
}

#[test]
fn blake256_vector_lengths_cover_each_padding_branch() {
  // 0 and 1_000_000 end block-aligned (padding-only final block), 56 spills
  // padding into a second block, the rest fit in one.
  let tails: Vec<usize> = VECTORS.iter().map(|(_, input, _)| input.len() % 64).collect();
  assert!(tails.contains(&0));
  assert!(tails.iter().any(|&t| t < 55 && t != 0));
  assert!(tails.iter().any(|&t| t >= 56));
}

#[test]
fn blake256_is_deterministic_across_instances() {
  let data = b"The quick brown fox jumps over the lazy dog";
  let mut a = Blake256::new();
  let mut b = Blake256::new();
  a.update(data);
  b.update(data);
  assert_eq!(a.finalize(), b.finalize());
}
