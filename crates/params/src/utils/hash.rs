//! Size constants for the hash functions implemented in the workspace.

/// SHA-256 digest size in bytes.
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// SHA-256 compression block size in bytes.
pub const SHA256_BLOCK_SIZE: usize = 64;
