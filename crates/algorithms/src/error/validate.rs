//! Validation utilities for the building blocks

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that a padded buffer is a whole number of blocks
#[inline(always)]
pub fn block_aligned(scheme: &'static str, actual: usize, block_size: usize) -> Result<()> {
    if block_size == 0 || actual % block_size != 0 {
        return Err(Error::Padding {
            scheme,
            reason: "data length is not a multiple of the block size",
        });
    }
    Ok(())
}

/// Validate a maximum input size
#[inline(always)]
pub fn max_size(context: &'static str, actual: u64, limit: u64) -> Result<()> {
    if actual > limit {
        return Err(Error::TooLarge {
            context,
            limit,
            actual,
        });
    }
    Ok(())
}

/// Validate authentication
#[inline(always)]
pub fn authentication(is_valid: bool, algorithm: &'static str) -> Result<()> {
    if !is_valid {
        return Err(Error::Authentication { algorithm });
    }
    Ok(())
}
