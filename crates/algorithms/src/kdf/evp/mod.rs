//! OpenSSL-compatible `EVP_BytesToKey`
//!
//! ```text
//! D_0 = H(password || salt)
//! D_i = H(D_{i-1} || password || salt)
//! output = D_0 || D_1 || ...   truncated to the requested length
//! ```
//!
//! The first `key_size` bytes of the output are the key, the remainder is
//! the IV or nonce.

use core::marker::PhantomData;

use digest::Digest;
use md5::Md5;
use tracing::debug;
use zeroize::Zeroizing;

use crate::error::{validate, Result};

pub use params::utils::kdf::SALT_SIZE;

/// Key and IV produced from a password and salt
#[derive(Clone)]
pub struct DerivedKeyMaterial {
    /// Cipher key
    pub key: Zeroizing<Vec<u8>>,
    /// IV or nonce; empty when none was requested
    pub iv: Zeroizing<Vec<u8>>,
}

impl core::fmt::Debug for DerivedKeyMaterial {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DerivedKeyMaterial")
            .field("key_len", &self.key.len())
            .field("iv_len", &self.iv.len())
            .finish()
    }
}

/// `EVP_BytesToKey` over the digest `D`, MD5 unless stated otherwise
#[derive(Debug, Clone, Default)]
pub struct EvpKdf<D: Digest = Md5> {
    _digest: PhantomData<D>,
}

impl<D: Digest> EvpKdf<D> {
    /// Create a new instance
    pub fn new() -> Self {
        Self {
            _digest: PhantomData,
        }
    }

    /// Derive `total` bytes and split them at `key_size`
    pub fn derive(
        &self,
        password: &[u8],
        salt: &[u8; SALT_SIZE],
        key_size: usize,
        total: usize,
    ) -> Result<DerivedKeyMaterial> {
        validate::parameter(key_size <= total, "key_size", "key size exceeds total output")?;

        let mut seed = Zeroizing::new(Vec::with_capacity(password.len() + SALT_SIZE));
        seed.extend_from_slice(password);
        seed.extend_from_slice(salt);

        let mut output = Zeroizing::new(Vec::with_capacity(total + <D as Digest>::output_size()));
        let mut block = D::digest(seed.as_slice());
        output.extend_from_slice(&block);
        while output.len() < total {
            let mut hasher = D::new();
            hasher.update(&block);
            hasher.update(seed.as_slice());
            block = hasher.finalize();
            output.extend_from_slice(&block);
        }

        debug!(key_size, iv_size = total - key_size, "derived salted key material");
        Ok(DerivedKeyMaterial {
            key: Zeroizing::new(output[..key_size].to_vec()),
            iv: Zeroizing::new(output[key_size..total].to_vec()),
        })
    }
}

/// Shorthand for MD5-based `EVP_BytesToKey`
pub fn bytes_to_key(
    password: &[u8],
    salt: &[u8; SALT_SIZE],
    key_size: usize,
    total: usize,
) -> Result<DerivedKeyMaterial> {
    EvpKdf::<Md5>::new().derive(password, salt, key_size, total)
}
