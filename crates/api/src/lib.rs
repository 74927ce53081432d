//! Core traits and error types for the ringblind workspace
//!
//! This crate defines the error taxonomy shared by every layer and the
//! [`BlindSignature`] trait that concrete schemes implement. Nothing in
//! here performs cryptography; it is the contract between the algorithm
//! crates and their consumers.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub mod traits;

pub use error::{Error, Result};
pub use traits::BlindSignature;
