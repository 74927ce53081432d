//! Hash function implementations
//!
//! The workspace carries its own SHA-256 rather than an external digest
//! crate so that the message-to-polynomial expansion depends on nothing
//! outside the workspace. The trait split mirrors the rest of the crate:
//! a marker type describes the algorithm, a state struct implements it.

pub mod sha2;

pub use sha2::Sha256;

use crate::error::Result;

/// Raw digest bytes produced by a hash function.
pub type Hash = Vec<u8>;

/// Compile-time description of a hash algorithm.
pub trait HashAlgorithm {
    /// Digest size in bytes.
    const OUTPUT_SIZE: usize;
    /// Compression block size in bytes.
    const BLOCK_SIZE: usize;
    /// Human-readable algorithm name.
    const ALGORITHM_ID: &'static str;
}

/// Streaming hash interface.
pub trait HashFunction: Sized {
    /// The algorithm this state implements.
    type Algorithm: HashAlgorithm;

    /// Creates a fresh hash state.
    fn new() -> Self;

    /// Absorbs input bytes.
    fn update(&mut self, data: &[u8]) -> Result<()>;

    /// Produces the digest and wipes the state.
    fn finalize(&mut self) -> Result<Hash>;

    /// One-shot convenience: hash a single byte string.
    fn digest(data: &[u8]) -> Result<Hash> {
        let mut hasher = Self::new();
        hasher.update(data)?;
        hasher.finalize()
    }

    /// Digest size in bytes.
    fn output_size() -> usize {
        Self::Algorithm::OUTPUT_SIZE
    }

    /// Compression block size in bytes.
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }

    /// Human-readable algorithm name.
    fn name() -> &'static str {
        Self::Algorithm::ALGORITHM_ID
    }
}
