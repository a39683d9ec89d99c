//! Output Feedback (OFB) mode
//!
//! The block transform is applied repeatedly to the IV and its own output;
//! the resulting keystream is XORed with the data. Encryption and decryption
//! are the same operation.

use zeroize::Zeroizing;

use crate::block::BlockPrimitive;
use crate::error::{validate, Result};

/// OFB mode implementation
#[derive(Clone)]
pub struct Ofb<B: BlockPrimitive> {
    cipher: B,
    iv: Zeroizing<Vec<u8>>,
}

impl<B: BlockPrimitive> Ofb<B> {
    /// Creates a new OFB mode instance; `iv` must be one block long
    pub fn new(cipher: B, iv: &[u8]) -> Result<Self> {
        validate::length("OFB initialization vector", iv.len(), B::width())?;
        Ok(Self {
            cipher,
            iv: Zeroizing::new(iv.to_vec()),
        })
    }

    /// Encrypt `plaintext` into a new buffer
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut out = plaintext.to_vec();
        self.cipher.ofb_keystream(&self.iv, &mut out)?;
        Ok(out)
    }

    /// Decrypt `ciphertext` into a new buffer
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.encrypt(ciphertext)
    }
}
