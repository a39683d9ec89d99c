//! Counter (CTR) mode
//!
//! Counter mode turns a block cipher into a stream cipher by encrypting
//! successive values of a counter and XORing the result with the data. The
//! IV is the initial counter block; the whole block is incremented as one
//! big-endian integer, so the keystream matches NIST SP 800-38A.
//!
//! Encryption and decryption are the same operation and accept data of any
//! length.

use zeroize::Zeroizing;

use crate::block::BlockPrimitive;
use crate::error::{validate, Result};

/// Counter mode implementation
#[derive(Clone)]
pub struct Ctr<B: BlockPrimitive> {
    cipher: B,
    counter: Zeroizing<Vec<u8>>,
}

impl<B: BlockPrimitive> Ctr<B> {
    /// Creates a new CTR mode instance
    ///
    /// `iv` is the initial counter block and must be one block long.
    pub fn new(cipher: B, iv: &[u8]) -> Result<Self> {
        validate::length("CTR initial counter", iv.len(), B::width())?;
        Ok(Self {
            cipher,
            counter: Zeroizing::new(iv.to_vec()),
        })
    }

    /// XOR the keystream into `data` in place
    pub fn apply_keystream(&self, data: &mut [u8]) -> Result<()> {
        self.cipher.ctr_keystream(&self.counter, data)
    }

    /// Encrypt `plaintext` into a new buffer
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut out = plaintext.to_vec();
        self.apply_keystream(&mut out)?;
        Ok(out)
    }

    /// Decrypt `ciphertext` into a new buffer
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.encrypt(ciphertext)
    }
}

#[cfg(test)]
mod tests;
