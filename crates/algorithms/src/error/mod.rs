//! Error handling for the saltcrypt building blocks

use std::borrow::Cow;
use std::fmt;

use api::{Error as CoreError, Result as CoreResult};

/// The error type for padding, block-mode and key-stream operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// IV or nonce length error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// A primitive refused its key
    KeyLength {
        /// Algorithm that rejected the key
        algorithm: &'static str,
        /// Actual key length in bytes
        actual: usize,
    },

    /// Malformed padding or misaligned padded data
    Padding {
        /// Padding scheme that detected the problem
        scheme: &'static str,
        /// What was wrong with the padding
        reason: &'static str,
    },

    /// Authentication failure (AEAD tag verification)
    Authentication {
        /// Algorithm that failed authentication
        algorithm: &'static str,
    },

    /// Input exceeds what the primitive may process in one call
    TooLarge {
        /// Operation that refused the input
        context: &'static str,
        /// Largest accepted input in bytes
        limit: u64,
        /// Actual input size in bytes
        actual: u64,
    },

    /// Processing error during cryptographic operation
    Processing {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
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

/// Result type for the building blocks
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::KeyLength { algorithm, actual } => {
                write!(f, "{} rejected a {}-byte key", algorithm, actual)
            }
            Error::Padding { scheme, reason } => {
                write!(f, "{} padding error: {}", scheme, reason)
            }
            Error::Authentication { algorithm } => {
                write!(f, "Authentication failed for {}", algorithm)
            }
            Error::TooLarge {
                context,
                limit,
                actual,
            } => {
                write!(f, "{}: input of {} bytes exceeds {}", context, actual, limit)
            }
            Error::Processing { operation, details } => {
                write!(f, "Processing error in {}: {}", operation, details)
            }
        }
    }
}

impl std::error::Error for Error {}

// Implement conversion to the public error
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: match name {
                    Cow::Borrowed(s) => s,
                    Cow::Owned(_) => "parameter",
                },
                message: reason.into_owned(),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::NonceLength {
                context,
                expected,
                actual,
            },
            Error::KeyLength { algorithm, actual } => CoreError::KeyLength {
                context: algorithm,
                actual,
            },
            Error::Padding { scheme, reason } => CoreError::Padding {
                context: scheme,
                reason,
            },
            Error::Authentication { algorithm } => CoreError::Authentication {
                context: algorithm,
            },
            Error::TooLarge {
                context,
                limit,
                actual,
            } => CoreError::PlaintextTooLarge {
                context,
                limit,
                actual,
            },
            Error::Processing { operation, details } => CoreError::Primitive {
                context: operation,
                message: details.to_string(),
            },
        }
    }
}

/// Convert a building-block result to a public result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.map_err(|e| CoreError::from(e).with_context(ctx))
}

// Include the validation submodule
pub mod validate;
