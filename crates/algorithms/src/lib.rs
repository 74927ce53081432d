//! Algorithm primitives for the ringblind workspace
//!
//! Everything the blind signature scheme computes with lives here: scalar
//! and polynomial arithmetic over Z_q[x]/(x^n + 1), the negacyclic NTT
//! with its precomputed root catalog, uniform and Gaussian samplers, and
//! SHA-256. The crate knows nothing about the protocol; it provides exact
//! arithmetic and leaves composition to the `sign` crate.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub mod hash;
pub mod poly;

pub use error::{Error, Result};
pub use hash::Sha256;
pub use poly::{DefaultSamplers, Ntt, Polynomial};
