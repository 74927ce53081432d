//! Polynomial ring arithmetic over Z_q[x]/(x^n + 1)
//!
//! - [`arithmetic`]: scalar operations modulo q
//! - [`polynomial`]: the ring element type and its operations
//! - [`ntt`]: the negacyclic transform and its baked root catalog
//! - [`sampling`]: uniform and Gaussian polynomial samplers
//! - [`serialize`]: canonical little-endian wire encoding

pub mod arithmetic;
pub mod ntt;
pub mod polynomial;
pub mod sampling;
pub mod serialize;

pub use ntt::Ntt;
pub use polynomial::Polynomial;
pub use sampling::{DefaultSamplers, GaussianSampler, UniformSampler};
