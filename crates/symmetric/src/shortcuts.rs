//! One-shot façades, one per algorithm
//!
//! Each façade builds a [`Crypt`] context and runs a single call. Build the
//! context once with `new` when encrypting more than one message.

use algorithms::padding::PaddingScheme;
use params::utils::symmetric::BLOWFISH_BLOCK_SIZE;

use crate::algorithm::Algorithm;
use crate::cipher::Crypt;
use crate::error::Result;
use crate::mode::Mode;
use crate::options::Options;

macro_rules! block_facade {
    ($(#[$doc:meta])* $name:ident, $algorithm:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl $name {
            /// Build a context
            pub fn new(key: &[u8], iv: Option<&[u8]>, options: Options) -> Result<Crypt> {
                Crypt::new($algorithm, key, iv, options)
            }

            /// Encrypt one message
            pub fn encrypt(
                plaintext: &[u8],
                key: &[u8],
                iv: Option<&[u8]>,
                options: Options,
            ) -> Result<Vec<u8>> {
                Self::new(key, iv, options)?.encrypt(plaintext)
            }

            /// Decrypt one message
            pub fn decrypt(
                ciphertext: &[u8],
                key: &[u8],
                iv: Option<&[u8]>,
                options: Options,
            ) -> Result<Vec<u8>> {
                Self::new(key, iv, options)?.decrypt(ciphertext)
            }
        }
    };
}

block_facade!(
    /// AES with a 16, 24 or 32 byte key
    Aes,
    Algorithm::Aes
);
block_facade!(
    /// Single DES
    Des,
    Algorithm::Des
);
block_facade!(
    /// Triple DES with a 24 byte key
    TripleDes,
    Algorithm::TripleDes
);

/// ChaCha20 with an optional 8, 12 or 24 byte nonce
#[derive(Debug, Clone, Copy, Default)]
pub struct ChaCha20;

impl ChaCha20 {
    /// Build a context
    pub fn new(key: &[u8], nonce: Option<&[u8]>) -> Result<Crypt> {
        Crypt::new(Algorithm::ChaCha20, key, nonce, Options::default())
    }

    /// Encrypt one message
    pub fn encrypt(plaintext: &[u8], key: &[u8], nonce: Option<&[u8]>) -> Result<Vec<u8>> {
        Self::new(key, nonce)?.encrypt(plaintext)
    }

    /// Decrypt one message
    pub fn decrypt(ciphertext: &[u8], key: &[u8], nonce: Option<&[u8]>) -> Result<Vec<u8>> {
        Self::new(key, nonce)?.decrypt(ciphertext)
    }
}

/// Blowfish in codebook mode with zero padding
///
/// Block-aligned input is encrypted as-is, without an extra padding block.
/// Decryption strips every trailing zero byte.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blowfish;

impl Blowfish {
    /// Build a context
    pub fn new(key: &[u8]) -> Result<Crypt> {
        Self::with_padding(key, PaddingScheme::ZeroPadding)
    }

    fn with_padding(key: &[u8], padding: PaddingScheme) -> Result<Crypt> {
        Crypt::new(Algorithm::Blowfish, key, None, Options::new(Mode::Ecb, padding))
    }

    /// Encrypt one message
    pub fn encrypt(plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        let padding = if plaintext.len() % BLOWFISH_BLOCK_SIZE == 0 {
            PaddingScheme::NoPadding
        } else {
            PaddingScheme::ZeroPadding
        };
        Self::with_padding(key, padding)?.encrypt(plaintext)
    }

    /// Decrypt one message
    pub fn decrypt(ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        Self::new(key)?.decrypt(ciphertext)
    }
}

/// RC4 keystream, no IV and no header
#[derive(Debug, Clone, Copy, Default)]
pub struct Rc4;

impl Rc4 {
    /// Build a context
    pub fn new(key: &[u8]) -> Result<Crypt> {
        Crypt::new(Algorithm::Rc4, key, None, Options::default())
    }

    /// Encrypt one message
    pub fn encrypt(plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        Self::new(key)?.encrypt(plaintext)
    }

    /// Decrypt one message
    pub fn decrypt(ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        Self::new(key)?.decrypt(ciphertext)
    }
}
