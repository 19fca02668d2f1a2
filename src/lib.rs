//! A Rust implementation of the NIST SP 800-90A Hash_DRBG (Hash-based
//! Deterministic Random Bit Generator).
//!
//! Provides the DRBG mechanism's core state machine (`Instantiate`,
//! `Reseed`, `Generate`, `Uninstantiate`), built on a generic `Digest`
//! backend, with static parameter tables and known-answer vectors for
//! SHA-1, SHA-224, SHA-256, SHA-384, and SHA-512.
//!
//! # Features
//! - Generic over any [`digest::Digest`] implementor, monomorphized per hash.
//! - Static, `'static` [`Profile`] tables (seed length, request/reseed
//!   limits, supported security strengths) for all five standard hashes.
//! - Known-answer self-test suite (`self_test::run_kat`) runnable on demand
//!   or automatically at a configurable instantiation interval.
//! - Secure memory zeroization of `V`/`C` on drop.
//! - No silent recovery from a failed digest: once poisoned, an instance
//!   only accepts `uninstantiate`.
//!
//! # Example
//! ```
//! use hash_drbg::DrbgEngine;
//! use hash_drbg::profile::SHA256_PROFILE;
//! use sha2::Sha256;
//!
//! let mut drbg = DrbgEngine::<Sha256>::instantiate(
//!     &SHA256_PROFILE,
//!     &[0x11; 32], // entropy_input
//!     &[0x22; 16], // nonce
//!     b"example application",
//! )
//! .expect("instantiate");
//!
//! let mut output = [0u8; 32];
//! drbg.generate(&mut output, &[]).expect("generate");
//! ```

mod arith;
mod byte_stack;
mod engine;
mod error;
mod hash_df;
pub mod profile;
pub mod self_test;
mod state;

pub use engine::DrbgEngine;
pub use error::DrbgError;
pub use profile::{HashId, KatVector, Profile};
pub use state::Mode;
