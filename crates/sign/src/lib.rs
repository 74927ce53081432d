//! Blind signature schemes for the ringblind workspace
//!
//! Currently one construction: RLWE blind signatures over the negacyclic
//! ring Z_q[x]/(x^n + 1), in [`rlwe`].

#![forbid(unsafe_code)]

pub mod error;
pub mod rlwe;

pub use rlwe::{
    RlweBlindSigner, RlweBlindedMessage, RlweBlindingFactor, RlwePublicKey, RlweSignature,
};
