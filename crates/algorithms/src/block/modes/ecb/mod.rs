//! Electronic Codebook (ECB) mode
//!
//! Each block is transformed independently with no chaining state, so equal
//! plaintext blocks produce equal ciphertext blocks. Only use it for
//! compatibility with data that was already encrypted this way.

use cipher::generic_array::GenericArray;

use crate::block::BlockPrimitive;
use crate::error::{validate, Result};

/// ECB mode over a keyed block primitive
#[derive(Clone)]
pub struct Ecb<B: BlockPrimitive> {
    cipher: B,
}

impl<B: BlockPrimitive> Ecb<B> {
    /// Wrap a keyed primitive
    pub fn new(cipher: B) -> Self {
        Self { cipher }
    }

    /// Block width of the underlying primitive
    pub fn block_size(&self) -> usize {
        B::width()
    }

    /// Encrypt whole blocks from `src` into `dst`
    ///
    /// # Panics
    ///
    /// Panics if `src` is not a multiple of the block size or if `dst` is
    /// shorter than `src`. Callers pad before reaching this point.
    pub fn encrypt_blocks(&self, dst: &mut [u8], src: &[u8]) {
        let bs = check_blocks::<B>(dst, src);
        for (out, block) in dst.chunks_exact_mut(bs).zip(src.chunks_exact(bs)) {
            out.copy_from_slice(block);
            self.cipher.encrypt_block(GenericArray::from_mut_slice(out));
        }
    }

    /// Decrypt whole blocks from `src` into `dst`
    ///
    /// # Panics
    ///
    /// Same contract as [`Ecb::encrypt_blocks`].
    pub fn decrypt_blocks(&self, dst: &mut [u8], src: &[u8]) {
        let bs = check_blocks::<B>(dst, src);
        for (out, block) in dst.chunks_exact_mut(bs).zip(src.chunks_exact(bs)) {
            out.copy_from_slice(block);
            self.cipher.decrypt_block(GenericArray::from_mut_slice(out));
        }
    }

    /// Encrypt block-aligned data into a new buffer
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        validate::block_aligned("ECB", plaintext.len(), B::width())?;
        let mut out = vec![0u8; plaintext.len()];
        self.encrypt_blocks(&mut out, plaintext);
        Ok(out)
    }

    /// Decrypt block-aligned data into a new buffer
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        validate::block_aligned("ECB", ciphertext.len(), B::width())?;
        let mut out = vec![0u8; ciphertext.len()];
        self.decrypt_blocks(&mut out, ciphertext);
        Ok(out)
    }
}

fn check_blocks<B: BlockPrimitive>(dst: &[u8], src: &[u8]) -> usize {
    let bs = B::width();
    assert!(
        src.len() % bs == 0,
        "ECB input is not a multiple of the {}-byte block",
        bs
    );
    assert!(dst.len() >= src.len(), "ECB output buffer too small");
    bs
}
