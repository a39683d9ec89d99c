//! Cipher Feedback (CFB) mode
//!
//! Full-block CFB: the previous ciphertext block is encrypted to produce the
//! next keystream block. Backed by the `cfb-mode` crate; a trailing partial
//! block is handled there, so data of any length is accepted.

use cipher::{AsyncStreamCipher, InnerIvInit};
use zeroize::Zeroizing;

use crate::block::BlockPrimitive;
use crate::error::{validate, Error, Result};

/// CFB mode implementation
#[derive(Clone)]
pub struct Cfb<B: BlockPrimitive> {
    cipher: B,
    iv: Zeroizing<Vec<u8>>,
}

impl<B: BlockPrimitive> Cfb<B> {
    /// Creates a new CFB mode instance; `iv` must be one block long
    pub fn new(cipher: B, iv: &[u8]) -> Result<Self> {
        validate::length("CFB initialization vector", iv.len(), B::width())?;
        Ok(Self {
            cipher,
            iv: Zeroizing::new(iv.to_vec()),
        })
    }

    /// Encrypt `plaintext` into a new buffer
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let enc =
            <B::CfbEnc as InnerIvInit>::inner_iv_slice_init(self.cipher.clone(), &self.iv)
                .map_err(|_| self.iv_error())?;
        let mut out = plaintext.to_vec();
        AsyncStreamCipher::encrypt(enc, &mut out);
        Ok(out)
    }

    /// Decrypt `ciphertext` into a new buffer
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let dec =
            <B::CfbDec as InnerIvInit>::inner_iv_slice_init(self.cipher.clone(), &self.iv)
                .map_err(|_| self.iv_error())?;
        let mut out = ciphertext.to_vec();
        AsyncStreamCipher::decrypt(dec, &mut out);
        Ok(out)
    }

    fn iv_error(&self) -> Error {
        Error::Length {
            context: "CFB initialization vector",
            expected: B::width(),
            actual: self.iv.len(),
        }
    }
}
