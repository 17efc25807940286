//! Pure Rust implementation of the SHA-2 hash function family (FIPS 180-4):
//! SHA-224, SHA-256, SHA-384, SHA-512, SHA-512/224 and SHA-512/256.
//!
//! Two generic engines do the work, one per word size. A variant is only a
//! configuration on top of its engine: initial hash value and digest length.
//!
//! The typed hashers implement the [`Digest`] trait:
//!
//! ```
//! use inve_sha2::{Digest, Sha384};
//!
//! let mut hasher = Sha384::new();
//! hasher.update(b"hello ");
//! hasher.update(b"world");
//! let out = hasher.finalize();
//! assert_eq!(out.len(), 48);
//! ```
//!
//! [`HashSession`] selects the variant at runtime and reports misuse as
//! [`Error`] values instead of panicking:
//!
//! ```
//! use inve_sha2::{hash, Variant};
//!
//! let digest = hash(Variant::Sha224, b"abc")?;
//! assert_eq!(
//!     digest.to_string(),
//!     "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7",
//! );
//! # Ok::<(), inve_sha2::Error>(())
//! ```
#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "std")]
extern crate std;

pub use digest::{self, Digest};

use digest::{
    consts::{U28, U32, U48, U64},
    core_api::{CoreWrapper, CtVariableCoreWrapper},
};

#[macro_use]
mod macros;

#[rustfmt::skip]
mod consts;
mod core_api;
mod engine;
mod error;
mod output;
mod padding;
mod session;
mod sha256;
mod sha512;

#[cfg(feature = "compress")]
pub use sha256::compress256;
#[cfg(feature = "compress")]
pub use sha512::compress512;

pub use core_api::{Sha256VarCore, Sha512VarCore};
pub use error::Error;
pub use output::{HashValue, MAX_OUTPUT_SIZE};
pub use session::{hash, HashSession, Phase, Variant};

/// SHA-224 hasher.
pub type Sha224 = CoreWrapper<CtVariableCoreWrapper<Sha256VarCore, U28>>;
/// SHA-256 hasher.
pub type Sha256 = CoreWrapper<CtVariableCoreWrapper<Sha256VarCore, U32>>;
/// SHA-512/224 hasher: SHA-512 with its own initial value, truncated to 224 bits.
pub type Sha512_224 = CoreWrapper<CtVariableCoreWrapper<Sha512VarCore, U28>>;
/// SHA-512/256 hasher: SHA-512 with its own initial value, truncated to 256 bits.
pub type Sha512_256 = CoreWrapper<CtVariableCoreWrapper<Sha512VarCore, U32>>;
/// SHA-384 hasher.
pub type Sha384 = CoreWrapper<CtVariableCoreWrapper<Sha512VarCore, U48>>;
/// SHA-512 hasher.
pub type Sha512 = CoreWrapper<CtVariableCoreWrapper<Sha512VarCore, U64>>;
