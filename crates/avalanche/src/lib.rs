//! Avalanche catalog generators.
//!
//! A generator drives any [`Digest`] over a fixed baseline input and every
//! one- and two-bit perturbation of it, concatenating the digests into a
//! catalog whose length is known before generation starts.
//!
//! | Generator | Name | Baseline | Pair dedup |
//! |-----------|------|----------|------------|
//! | [`ChainedGenerator`] | `test` | zero seed, fed back | n/a |
//! | [`LowDensityGenerator`] | `lowdensity` | `4d` zero bytes | index pair `(i, j) == (j, i)` |
//! | [`HighDensityGenerator`] | `highdensity` | `4d` `0xFF` bytes | digest already in the catalog |
//!
//! # Example
//!
//! ```rust
//! use avalanche::{ChainedGenerator, Generator, catalog::pairwise_catalog_len};
//! use hashes::crypto::Md5;
//!
//! # fn main() -> Result<(), avalanche::GenerateError> {
//! let mut md5 = Md5::new();
//! let catalog = ChainedGenerator::default().generate_bytes(&mut md5)?;
//! assert_eq!(catalog.len(), 8 * 16);
//!
//! // 16 + 512 * 16 + C(512, 2) * 16
//! assert_eq!(pairwise_catalog_len(16), Some(2_101_264));
//! # Ok(())
//! # }
//! ```
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]

pub mod bits;
pub mod catalog;
mod chained;
mod error;
mod generator;
mod high_density;
mod low_density;
mod pairwise;
pub mod render;

pub use chained::{ChainedGenerator, DEFAULT_BLOCKS};
pub use error::GenerateError;
pub use generator::{Density, Generator};
pub use high_density::HighDensityGenerator;
pub use low_density::LowDensityGenerator;
pub use traits::Digest;
