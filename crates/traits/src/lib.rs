//! Core traits for hash-mechanic.
//!
//! This crate defines the contract every hash primitive in the workspace
//! conforms to. It is `no_std` compatible and its only dependency is
//! `thiserror` for the error type.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Implementors |
//! |-------|---------|--------------|
//! | [`Digest`] | Streaming hash with explicit reset | BLAKE-256, BRAKE-256, MD5 |
//!
//! # Error Types
//!
//! - [`DigestError`] - Usage errors raised while configuring or extracting a digest
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

mod digest;
pub mod error;

pub use digest::{Digest, check_output};
pub use error::DigestError;
