//! ChaCha20 stream cipher
//!
//! The nonce length selects the variant:
//!
//! | Nonce    | Variant                          | Counter |
//! |----------|----------------------------------|---------|
//! | 8 bytes  | original (Bernstein) ChaCha20    | 64-bit  |
//! | 12 bytes | IETF ChaCha20 (RFC 8439)         | 32-bit  |
//! | 24 bytes | XChaCha20                        | 32-bit  |

use chacha20::cipher::{KeyIvInit, StreamCipher};
use chacha20::{ChaCha20, ChaCha20Legacy, XChaCha20};

use super::KeyStream;
use crate::error::{Error, Result};

pub use params::utils::symmetric::{
    CHACHA20_KEY_SIZE, CHACHA20_LEGACY_NONCE_SIZE, CHACHA20_NONCE_SIZE, XCHACHA20_NONCE_SIZE,
};

/// A keyed ChaCha20 keystream in one of its nonce variants
pub enum ChaCha20Stream {
    /// 8-byte nonce
    Legacy(ChaCha20Legacy),
    /// 12-byte nonce
    Ietf(ChaCha20),
    /// 24-byte nonce
    Extended(XChaCha20),
}

impl ChaCha20Stream {
    /// Build the variant matching `nonce.len()`
    pub fn new(key: &[u8], nonce: &[u8]) -> Result<Self> {
        if key.len() != CHACHA20_KEY_SIZE {
            return Err(Error::KeyLength {
                algorithm: "ChaCha20",
                actual: key.len(),
            });
        }
        let stream = match nonce.len() {
            CHACHA20_LEGACY_NONCE_SIZE => {
                ChaCha20Legacy::new_from_slices(key, nonce).map(ChaCha20Stream::Legacy)
            }
            CHACHA20_NONCE_SIZE => ChaCha20::new_from_slices(key, nonce).map(ChaCha20Stream::Ietf),
            XCHACHA20_NONCE_SIZE => {
                XChaCha20::new_from_slices(key, nonce).map(ChaCha20Stream::Extended)
            }
            other => {
                return Err(Error::Length {
                    context: "ChaCha20 nonce",
                    expected: XCHACHA20_NONCE_SIZE,
                    actual: other,
                })
            }
        };
        stream.map_err(|_| Error::param("nonce", "rejected by ChaCha20"))
    }

    /// Nonce length this stream was built with
    pub fn nonce_size(&self) -> usize {
        match self {
            ChaCha20Stream::Legacy(_) => CHACHA20_LEGACY_NONCE_SIZE,
            ChaCha20Stream::Ietf(_) => CHACHA20_NONCE_SIZE,
            ChaCha20Stream::Extended(_) => XCHACHA20_NONCE_SIZE,
        }
    }
}

impl KeyStream for ChaCha20Stream {
    const NAME: &'static str = "ChaCha20";

    fn apply_keystream(&mut self, data: &mut [u8]) -> Result<()> {
        let applied = match self {
            ChaCha20Stream::Legacy(c) => c.try_apply_keystream(data),
            ChaCha20Stream::Ietf(c) => c.try_apply_keystream(data),
            ChaCha20Stream::Extended(c) => c.try_apply_keystream(data),
        };
        applied.map_err(|_| Error::Processing {
            operation: "ChaCha20",
            details: "keystream exhausted",
        })
    }
}
