//! Hash engines for avalanche research.
//!
//! This crate is `no_std` compatible with no library dependencies besides
//! `traits`. BLAKE-256, its weakened variant and MD5 are implemented from
//! first principles so each can run a reduced number of rounds through the
//! same [`Digest`] contract.
//!
//! # Modules
//!
//! - [`crypto`] - BLAKE-256, BRAKE-256 (**NOT CRYPTO**), MD5 (full or reduced rounds).
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

pub mod crypto;

mod util;

pub use traits::{Digest, DigestError};
