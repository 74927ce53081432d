//! Parameter sets and constants for the ringblind workspace
//!
//! This crate is pure data: named RLWE parameter sets with their security
//! estimates, advisory warnings about weak choices, and the size constants
//! shared by the hash implementations. It deliberately has no dependencies
//! so that every other crate in the workspace can consume it.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod rlwe;
pub mod utils;

pub use rlwe::{ParameterWarning, RlweParams, SecurityLevel};
