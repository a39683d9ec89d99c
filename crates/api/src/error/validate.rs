//! Validation utilities shared by the saltcrypt crates

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, message: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidParameter {
            context,
            message: message.to_string(),
        });
    }
    Ok(())
}

/// Validate an IV or nonce length
#[inline(always)]
pub fn nonce_length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::NonceLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that a nonce length is one of several accepted sizes
///
/// On failure the error reports the largest accepted size as expected.
#[inline(always)]
pub fn nonce_length_one_of(context: &'static str, actual: usize, accepted: &[usize]) -> Result<()> {
    if !accepted.contains(&actual) {
        return Err(Error::NonceLength {
            context,
            expected: accepted.iter().copied().max().unwrap_or(0),
            actual,
        });
    }
    Ok(())
}

/// Validate a key length against an inclusive range
#[inline(always)]
pub fn key_length_range(context: &'static str, actual: usize, min: usize, max: usize) -> Result<()> {
    if actual < min || actual > max {
        return Err(Error::KeyLength { context, actual });
    }
    Ok(())
}
