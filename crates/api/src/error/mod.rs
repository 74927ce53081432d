//! Error type definitions for the public API surface
//!
//! Every failure crossing a crate boundary is expressed as one of these
//! variants. Lower layers carry richer error types and convert into this
//! one at the seam. All errors surface synchronously to the caller of the
//! offending operation; nothing is retried internally.

use std::fmt;

/// Primary error type for blind signature operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Key material is missing or unusable.
    InvalidKey {
        /// Operation that required the key.
        context: &'static str,
        /// Human-readable detail.
        message: String,
    },

    /// A parameter failed validation (ring dimension, modulus, sigma, or
    /// an unsupported (n, q) combination).
    InvalidParameter {
        /// Component that rejected the parameter.
        context: &'static str,
        /// Human-readable detail.
        message: String,
    },

    /// Two ring elements disagree on dimension or modulus.
    IncompatibleRings {
        /// Operation that detected the mismatch.
        context: &'static str,
        /// Human-readable detail.
        message: String,
    },

    /// The operating system entropy source failed.
    RandomGenerationError {
        /// The entropy source that failed.
        context: &'static str,
        /// Human-readable detail.
        message: String,
    },

    /// Any other failure.
    Other {
        /// Component that failed.
        context: &'static str,
        /// Human-readable detail.
        message: String,
    },
}

/// Result type for blind signature operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its kind.
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::IncompatibleRings { message, .. } => Self::IncompatibleRings { context, message },
            Self::RandomGenerationError { message, .. } => {
                Self::RandomGenerationError { context, message }
            }
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }

    /// Replace the message of an existing error, keeping its kind.
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::InvalidKey { context, .. } => Self::InvalidKey { context, message },
            Self::InvalidParameter { context, .. } => Self::InvalidParameter { context, message },
            Self::IncompatibleRings { context, .. } => Self::IncompatibleRings { context, message },
            Self::RandomGenerationError { context, .. } => {
                Self::RandomGenerationError { context, message }
            }
            Self::Other { context, .. } => Self::Other { context, message },
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKey { context, message } => {
                write!(f, "invalid key in {}: {}", context, message)
            }
            Self::InvalidParameter { context, message } => {
                write!(f, "invalid parameter in {}: {}", context, message)
            }
            Self::IncompatibleRings { context, message } => {
                write!(f, "incompatible rings in {}: {}", context, message)
            }
            Self::RandomGenerationError { context, message } => {
                write!(f, "random generation failed ({}): {}", context, message)
            }
            Self::Other { context, message } => write!(f, "{}: {}", context, message),
        }
    }
}

impl std::error::Error for Error {}
