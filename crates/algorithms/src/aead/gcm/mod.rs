//! Galois/Counter Mode (GCM)
//!
//! AEAD over a 128-bit block primitive with a 96-bit nonce and a 128-bit
//! tag appended to the ciphertext, as produced by the `aes-gcm` crate.
//!
//! A single seal is limited to `(2^32 - 2)` blocks of plaintext
//! (NIST SP 800-38D, section 5.2.1.1). Tag mismatches are reported as
//! [`Error::Authentication`] and never return any plaintext.

use aes_gcm::aead::consts::U12;
use aes_gcm::aead::{Aead, Nonce, Payload};
use aes_gcm::AesGcm;
use tracing::trace;
use zeroize::Zeroizing;

use crate::block::BlockPrimitive;
use crate::error::{validate, Error, Result};

/// Nonce size in bytes
pub const GCM_NONCE_SIZE: usize = params::utils::symmetric::GCM_NONCE_SIZE;

/// Tag size in bytes
pub const GCM_TAG_SIZE: usize = params::utils::symmetric::GCM_TAG_SIZE;

/// Largest plaintext a single seal accepts, in bytes
pub const GCM_MAX_PLAINTEXT: u64 = params::utils::symmetric::GCM_MAX_BLOCKS * 16;

/// GCM mode implementation
#[derive(Clone)]
pub struct Gcm<B: BlockPrimitive> {
    cipher: B,
    nonce: Zeroizing<Vec<u8>>,
}

impl<B> Gcm<B>
where
    B: BlockPrimitive,
    AesGcm<B, U12>: Aead + From<B>,
{
    /// Creates a new GCM instance; `nonce` must be exactly 12 bytes
    pub fn new(cipher: B, nonce: &[u8]) -> Result<Self> {
        validate::length("GCM nonce", nonce.len(), GCM_NONCE_SIZE)?;
        validate::parameter(B::width() == 16, "cipher", "GCM requires a 128-bit block")?;
        Ok(Self {
            cipher,
            nonce: Zeroizing::new(nonce.to_vec()),
        })
    }

    /// Seal `plaintext`, returning ciphertext followed by the tag
    pub fn encrypt(&self, plaintext: &[u8], aad: Option<&[u8]>) -> Result<Vec<u8>> {
        validate::max_size("GCM plaintext", plaintext.len() as u64, GCM_MAX_PLAINTEXT)?;
        trace!(algorithm = B::NAME, len = plaintext.len(), "GCM seal");

        let aead = AesGcm::<B, U12>::from(self.cipher.clone());
        let payload = Payload {
            msg: plaintext,
            aad: aad.unwrap_or_default(),
        };
        aead.encrypt(Nonce::<AesGcm<B, U12>>::from_slice(&self.nonce), payload)
            .map_err(|_| Error::Processing {
                operation: "GCM",
                details: "seal failed",
            })
    }

    /// Open `ciphertext` (ciphertext followed by the tag)
    pub fn decrypt(&self, ciphertext: &[u8], aad: Option<&[u8]>) -> Result<Vec<u8>> {
        validate::authentication(ciphertext.len() >= GCM_TAG_SIZE, "GCM")?;
        trace!(algorithm = B::NAME, len = ciphertext.len(), "GCM open");

        let aead = AesGcm::<B, U12>::from(self.cipher.clone());
        let payload = Payload {
            msg: ciphertext,
            aad: aad.unwrap_or_default(),
        };
        aead.decrypt(Nonce::<AesGcm<B, U12>>::from_slice(&self.nonce), payload)
            .map_err(|_| Error::Authentication { algorithm: "GCM" })
    }
}
