//! Error handling for the signature crate
//!
//! Protocol code reports either missing key material or a failure bubbled
//! up from the algorithm primitives. Both convert losslessly into
//! [`api::Error`] at the public boundary.

use std::fmt;

/// Errors raised by the blind signature scheme internals.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// An operation needed key material that has not been generated.
    Key {
        /// Operation that required the key.
        context: &'static str,
    },
    /// A failure inside the algorithm primitives.
    Algorithm(algorithms::Error),
}

/// Result type for the signature crate internals.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wraps an algorithms-layer error.
    pub(crate) fn from_algo(err: algorithms::Error) -> Self {
        Error::Algorithm(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Key { context } => {
                write!(f, "{}: no key pair has been generated", context)
            }
            Error::Algorithm(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Algorithm(err) => Some(err),
            Error::Key { .. } => None,
        }
    }
}

impl From<Error> for api::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Key { context } => api::Error::InvalidKey {
                context,
                message: "call generate_keys first".into(),
            },
            Error::Algorithm(inner) => api::Error::from(inner),
        }
    }
}
