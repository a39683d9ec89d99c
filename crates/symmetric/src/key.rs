//! Key and nonce validation
//!
//! Keys longer than the algorithm accepts are silently truncated to the
//! largest accepted length that fits. Keys shorter than every accepted
//! length are rejected.

use params::utils::symmetric::CHACHA20_NONCE_SIZES;
use zeroize::Zeroizing;

use crate::algorithm::{Algorithm, KeyPolicy};
use crate::error::{validate, Error, Result};
use crate::mode::Mode;

/// Validate `raw` for `algorithm`, truncating over-long keys
///
/// For algorithms with a fixed set of lengths an exact match is used as-is;
/// otherwise the key is cut to the largest accepted length below its own
/// (a 40-byte AES key becomes AES-256, a 20-byte one AES-128).
pub fn normalize(algorithm: Algorithm, raw: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    let context = algorithm.context();
    let len = match algorithm.key_policy() {
        KeyPolicy::Fixed(accepted) => {
            if accepted.contains(&raw.len()) {
                raw.len()
            } else {
                accepted
                    .iter()
                    .copied()
                    .filter(|&n| n < raw.len())
                    .max()
                    .ok_or(Error::KeyLength {
                        context,
                        actual: raw.len(),
                    })?
            }
        }
        KeyPolicy::Range { max } => {
            let len = raw.len().min(max);
            validate::key_length_range(context, len, 1, max)?;
            len
        }
    };
    Ok(Zeroizing::new(raw[..len].to_vec()))
}

/// Check that `algorithm` may run under `mode`
pub fn check_combination(algorithm: Algorithm, mode: Mode) -> Result<()> {
    if !algorithm.supports(mode) {
        return Err(Error::UnsupportedCombination {
            context: algorithm.context(),
            algorithm: algorithm.name(),
            mode: mode.name(),
        });
    }
    Ok(())
}

/// Check a caller-supplied IV or nonce
///
/// A missing IV is always accepted here; the engine then uses a salted
/// header instead. ECB ignores the IV entirely.
pub fn check_nonce(algorithm: Algorithm, mode: Mode, iv: Option<&[u8]>) -> Result<()> {
    let Some(iv) = iv else {
        return Ok(());
    };
    let context = algorithm.context();
    match algorithm {
        Algorithm::ChaCha20 => validate::nonce_length_one_of(context, iv.len(), CHACHA20_NONCE_SIZES),
        Algorithm::Rc4 => Ok(()),
        _ => match algorithm.iv_size(mode) {
            Some(expected) => validate::nonce_length(context, iv.len(), expected),
            None => Ok(()),
        },
    }
}
