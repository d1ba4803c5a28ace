//! Hash functions exposed through [`traits::Digest`].

pub mod blake256;
pub mod brake256;
pub mod md5;

pub use blake256::{Blake256, Blake256Mixing, BlakeEngine, MixingPolicy};
pub use brake256::{Brake256, Brake256Mixing};
pub use md5::Md5;
