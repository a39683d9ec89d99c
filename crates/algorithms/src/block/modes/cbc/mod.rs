//! Cipher Block Chaining (CBC) mode
//!
//! CBC mode provides confidentiality by XORing each plaintext block with the
//! previous ciphertext block before encryption. The first block is XORed
//! with an initialization vector (IV). The chaining itself comes from the
//! `cbc` crate; this wrapper owns the IV and checks block alignment.
//!
//! Plaintext must already be padded to a whole number of blocks.

use cipher::generic_array::GenericArray;
use cipher::{BlockDecryptMut, BlockEncryptMut, InnerIvInit};
use zeroize::Zeroizing;

use crate::block::BlockPrimitive;
use crate::error::{validate, Error, Result};

/// CBC mode implementation
#[derive(Clone)]
pub struct Cbc<B: BlockPrimitive> {
    cipher: B,
    iv: Zeroizing<Vec<u8>>,
}

impl<B: BlockPrimitive> Cbc<B> {
    /// Creates a new CBC mode instance with the given cipher and IV
    ///
    /// The IV must be the same size as the block size of the cipher.
    pub fn new(cipher: B, iv: &[u8]) -> Result<Self> {
        validate::length("CBC initialization vector", iv.len(), B::width())?;
        Ok(Self {
            cipher,
            iv: Zeroizing::new(iv.to_vec()),
        })
    }

    /// Encrypts a block-aligned message
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let bs = B::width();
        validate::block_aligned("CBC", plaintext.len(), bs)?;

        let mut chain =
            <B::CbcEnc as InnerIvInit>::inner_iv_slice_init(self.cipher.clone(), &self.iv)
                .map_err(|_| iv_error::<B>(self.iv.len()))?;
        let mut out = plaintext.to_vec();
        for block in out.chunks_exact_mut(bs) {
            chain.encrypt_block_mut(GenericArray::from_mut_slice(block));
        }
        Ok(out)
    }

    /// Decrypts a block-aligned message
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let bs = B::width();
        validate::block_aligned("CBC", ciphertext.len(), bs)?;

        let mut chain =
            <B::CbcDec as InnerIvInit>::inner_iv_slice_init(self.cipher.clone(), &self.iv)
                .map_err(|_| iv_error::<B>(self.iv.len()))?;
        let mut out = ciphertext.to_vec();
        for block in out.chunks_exact_mut(bs) {
            chain.decrypt_block_mut(GenericArray::from_mut_slice(block));
        }
        Ok(out)
    }
}

fn iv_error<B: BlockPrimitive>(actual: usize) -> Error {
    Error::Length {
        context: "CBC initialization vector",
        expected: B::width(),
        actual,
    }
}
