//! Stream cipher implementations
//!
//! Stream ciphers are symmetric key ciphers that XOR the data with a
//! pseudorandom keystream, so encryption and decryption are the same
//! operation and any data length is accepted.
//!
//! # Available Stream Ciphers
//!
//! - ChaCha20 with 8-, 12- or 24-byte nonces (backed by the `chacha20` crate)
//! - RC4 (Alleged RC4) with 1 to 256 byte keys
//!
//! # Security Considerations
//!
//! Stream ciphers require unique nonces for each encryption operation with the
//! same key. Reusing a nonce with the same key completely breaks the security
//! of the cipher. RC4 has no nonce at all and is kept for compatibility only.

/// ChaCha family of stream ciphers
pub mod chacha;
/// RC4 stream cipher
pub mod rc4;

// Re-export commonly used types
pub use self::chacha::{ChaCha20Stream, CHACHA20_KEY_SIZE};
pub use self::rc4::Rc4;

use crate::error::Result;

/// Common trait for keystream generators
pub trait KeyStream {
    /// Algorithm name used in errors and log events
    const NAME: &'static str;

    /// XOR the keystream into `data` in place, advancing the stream
    fn apply_keystream(&mut self, data: &mut [u8]) -> Result<()>;

    /// Encrypt `data` into a new buffer
    fn encrypt(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        let mut out = data.to_vec();
        self.apply_keystream(&mut out)?;
        Ok(out)
    }

    /// Decrypt `data` into a new buffer
    fn decrypt(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        self.encrypt(data)
    }
}
