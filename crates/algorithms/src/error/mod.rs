//! Error handling for the algorithm primitives
//!
//! Arithmetic and transform failures are reported through this enum and
//! converted into [`api::Error`] at the crate boundary. The variants map
//! onto the failure kinds of the scheme: invalid parameters, shape
//! mismatches between ring elements, a missing modular inverse, and an
//! unavailable entropy source.

use std::borrow::Cow;
use std::fmt;

/// The error type for the algorithm primitives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error.
    Parameter {
        /// Name of the invalid parameter.
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid.
        reason: Cow<'static, str>,
    },

    /// Two polynomials disagree on ring dimension.
    Dimension {
        /// Operation that detected the mismatch.
        context: &'static str,
        /// Expected ring dimension.
        expected: usize,
        /// Actual ring dimension.
        actual: usize,
    },

    /// Two polynomials disagree on coefficient modulus.
    Modulus {
        /// Operation that detected the mismatch.
        context: &'static str,
        /// Expected modulus.
        expected: u64,
        /// Actual modulus.
        actual: u64,
    },

    /// An element has no inverse modulo the given modulus. Outside of
    /// deliberately broken inputs this indicates a bug in the caller.
    NoInverse {
        /// The non-invertible element.
        element: u64,
        /// The modulus.
        modulus: u64,
    },

    /// The operating system entropy source failed or returned short.
    Random {
        /// The entropy source that failed.
        source: &'static str,
    },
}

impl Error {
    /// Shorthand to create a [`Error::Parameter`].
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for the algorithm primitives.
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "invalid parameter '{}': {}", name, reason)
            }
            Error::Dimension {
                context,
                expected,
                actual,
            } => write!(
                f,
                "{}: ring dimension mismatch (expected {}, got {})",
                context, expected, actual
            ),
            Error::Modulus {
                context,
                expected,
                actual,
            } => write!(
                f,
                "{}: modulus mismatch (expected {}, got {})",
                context, expected, actual
            ),
            Error::NoInverse { element, modulus } => {
                write!(f, "{} has no inverse modulo {}", element, modulus)
            }
            Error::Random { source } => write!(f, "entropy source {} unavailable", source),
        }
    }
}

impl std::error::Error for Error {}

impl From<Error> for api::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => api::Error::InvalidParameter {
                context: "algorithms",
                message: format!("{}: {}", name, reason),
            },
            Error::Dimension {
                context,
                expected,
                actual,
            } => api::Error::IncompatibleRings {
                context,
                message: format!("ring dimension mismatch (expected {}, got {})", expected, actual),
            },
            Error::Modulus {
                context,
                expected,
                actual,
            } => api::Error::IncompatibleRings {
                context,
                message: format!("modulus mismatch (expected {}, got {})", expected, actual),
            },
            Error::NoInverse { element, modulus } => api::Error::Other {
                context: "modular arithmetic",
                message: format!("{} has no inverse modulo {}", element, modulus),
            },
            Error::Random { source } => api::Error::RandomGenerationError {
                context: source,
                message: "failed to read from the OS entropy source".into(),
            },
        }
    }
}
