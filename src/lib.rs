//! # ringblind
//!
//! RLWE-based blind signatures over the negacyclic ring Z_q[x]/(x^n + 1).
//!
//! This is a facade crate that re-exports the workspace members:
//!
//! - [`api`]: shared error types and the `BlindSignature` trait
//! - [`params`]: the security-level catalog and advisory warnings
//! - [`algorithms`]: polynomial arithmetic, the negacyclic NTT, samplers,
//!   and SHA-256
//! - [`sign`]: the `RlweBlindSigner` scheme
//!
//! ## Example
//!
//! ```
//! use ringblind::prelude::*;
//! use rand::rngs::OsRng;
//!
//! let mut signer = RlweBlindSigner::new(SecurityLevel::Kyber512)?;
//! signer.generate_keys(&mut OsRng)?;
//!
//! // Client blinds, server signs blind, client unblinds.
//! let (blinded, r) = signer.blind_message(b"secret message", &mut OsRng)?;
//! let blind_sig = signer.blind_sign(&blinded, &mut OsRng)?;
//! let signature = signer.unblind(&blind_sig, &r)?;
//!
//! assert!(signer.verify(b"secret message", &signature)?);
//! # Ok::<(), ringblind::api::Error>(())
//! ```
//!
//! This construction is research-grade: verification requires the secret
//! key, the samplers are not constant-time, and the catalog's security
//! estimates are advisory only.

#![forbid(unsafe_code)]

pub use ringblind_algorithms as algorithms;
pub use ringblind_api as api;
pub use ringblind_params as params;
pub use ringblind_sign as sign;

/// Common imports for ringblind users.
pub mod prelude {
    pub use crate::api::{BlindSignature, Error, Result};
    pub use crate::params::rlwe::{ParameterWarning, RlweParams, SecurityLevel};
    pub use crate::sign::{RlweBlindSigner, RlweSignature};

    pub use crate::algorithms::poly::{Ntt, Polynomial};
}
