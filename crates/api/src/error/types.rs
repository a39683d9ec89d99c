//! Error type definitions for cryptographic operations

use thiserror::Error as ThisError;

/// Primary error type for saltcrypt operations
///
/// Every failure is reported synchronously at the point of detection.
/// No operation retries internally and no partial output is ever returned
/// alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// The key is too short, or otherwise unusable, for the algorithm
    #[error("{context}: invalid key size {actual}")]
    KeyLength {
        context: &'static str,
        actual: usize,
    },

    /// The IV or nonce has the wrong length for the mode
    #[error("{context}: invalid nonce length (expected {expected}, got {actual})")]
    NonceLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The algorithm cannot be combined with the requested mode
    #[error("{context}: {algorithm} does not support mode {mode}")]
    UnsupportedCombination {
        context: &'static str,
        algorithm: &'static str,
        mode: &'static str,
    },

    /// Malformed padding, including input that is not block aligned
    #[error("{context}: invalid padding: {reason}")]
    Padding {
        context: &'static str,
        reason: &'static str,
    },

    /// Authenticated decryption rejected the tag
    ///
    /// This signals tampering, not corruption, and is never folded into a
    /// generic decryption failure.
    #[error("{context}: authentication failed")]
    Authentication { context: &'static str },

    /// The authenticated mode cannot seal this much data under one nonce
    #[error("{context}: plaintext too large ({actual} bytes, limit {limit})")]
    PlaintextTooLarge {
        context: &'static str,
        limit: u64,
        actual: u64,
    },

    /// Algorithm tag outside the enumerated set
    #[error("unknown cipher algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Mode tag outside the enumerated set
    #[error("unknown block mode: {0}")]
    UnknownMode(String),

    /// Padding tag outside the enumerated set
    #[error("unknown padding scheme: {0}")]
    UnknownPadding(String),

    /// A parameter is outside its allowed range
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// An external primitive rejected its input
    #[error("{context}: {message}")]
    Primitive {
        context: &'static str,
        message: String,
    },
}

/// Result type for saltcrypt operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error
    ///
    /// Tag errors (`Unknown*`) carry no context and are returned unchanged.
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::KeyLength { actual, .. } => Self::KeyLength { context, actual },
            Self::NonceLength { expected, actual, .. } => Self::NonceLength {
                context,
                expected,
                actual,
            },
            Self::UnsupportedCombination { algorithm, mode, .. } => {
                Self::UnsupportedCombination {
                    context,
                    algorithm,
                    mode,
                }
            }
            Self::Padding { reason, .. } => Self::Padding { context, reason },
            Self::Authentication { .. } => Self::Authentication { context },
            Self::PlaintextTooLarge { limit, actual, .. } => Self::PlaintextTooLarge {
                context,
                limit,
                actual,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::Primitive { message, .. } => Self::Primitive { context, message },
            tag @ (Self::UnknownAlgorithm(_) | Self::UnknownMode(_) | Self::UnknownPadding(_)) => {
                tag
            }
        }
    }

    /// Context of the operation that failed, if the variant carries one
    pub fn context(&self) -> Option<&'static str> {
        match self {
            Self::KeyLength { context, .. }
            | Self::NonceLength { context, .. }
            | Self::UnsupportedCombination { context, .. }
            | Self::Padding { context, .. }
            | Self::Authentication { context }
            | Self::PlaintextTooLarge { context, .. }
            | Self::InvalidParameter { context, .. }
            | Self::Primitive { context, .. } => Some(context),
            Self::UnknownAlgorithm(_) | Self::UnknownMode(_) | Self::UnknownPadding(_) => None,
        }
    }

    /// True when the error means the ciphertext was tampered with
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }
}
