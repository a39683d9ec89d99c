//! Primitive handle bound to a validated key
//!
//! One closed enum over every supported block transform and keystream.
//! The mode transform is chosen per call from the context's [`Mode`].

use algorithms::block::{Aes128, Aes192, Aes256, BlockPrimitive, Blowfish, Des, TdesEde3};
use algorithms::stream::{ChaCha20Stream, KeyStream, Rc4};
use algorithms::{Cbc, Cfb, Ctr, Ecb, Gcm, Ofb};
use params::utils::symmetric::{AES128_KEY_SIZE, AES192_KEY_SIZE, BLOWFISH_MAX_KEY_SIZE};
use tracing::trace;
use zeroize::Zeroizing;

use crate::algorithm::Algorithm;
use crate::error::{Result, SymmetricResultExt};
use crate::mode::Mode;

/// Smallest key the Blowfish primitive takes directly
const BLOWFISH_MIN_PRIMITIVE_KEY: usize = 4;

pub(crate) enum Primitive {
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
    Des(Des),
    TripleDes(TdesEde3),
    Blowfish(Blowfish),
    ChaCha20(Zeroizing<Vec<u8>>),
    Rc4(Zeroizing<Vec<u8>>),
}

impl Primitive {
    /// Bind `algorithm` to an already normalized key
    pub(crate) fn bind(algorithm: Algorithm, key: &[u8]) -> Result<Self> {
        let context = algorithm.context();
        let bound = match algorithm {
            Algorithm::Aes => match key.len() {
                AES128_KEY_SIZE => Aes128::from_key(key).map(Primitive::Aes128),
                AES192_KEY_SIZE => Aes192::from_key(key).map(Primitive::Aes192),
                _ => Aes256::from_key(key).map(Primitive::Aes256),
            },
            Algorithm::Des => Des::from_key(key).map(Primitive::Des),
            Algorithm::TripleDes => TdesEde3::from_key(key).map(Primitive::TripleDes),
            Algorithm::Blowfish => {
                Blowfish::from_key(&blowfish_schedule_key(key)).map(Primitive::Blowfish)
            }
            Algorithm::ChaCha20 => Ok(Primitive::ChaCha20(Zeroizing::new(key.to_vec()))),
            Algorithm::Rc4 => Ok(Primitive::Rc4(Zeroizing::new(key.to_vec()))),
        };
        bound.map_primitive_err_in(context)
    }

    /// Encrypt already padded `data` under `mode`
    pub(crate) fn seal(&self, mode: Mode, iv: &[u8], data: &[u8]) -> algorithms::Result<Vec<u8>> {
        trace!(mode = %mode, len = data.len(), "seal");
        match (self, mode) {
            (Primitive::Aes128(c), Mode::Gcm) => Gcm::new(c.clone(), iv)?.encrypt(data, None),
            (Primitive::Aes192(c), Mode::Gcm) => Gcm::new(c.clone(), iv)?.encrypt(data, None),
            (Primitive::Aes256(c), Mode::Gcm) => Gcm::new(c.clone(), iv)?.encrypt(data, None),
            (Primitive::Aes128(c), _) => seal_block(c, mode, iv, data),
            (Primitive::Aes192(c), _) => seal_block(c, mode, iv, data),
            (Primitive::Aes256(c), _) => seal_block(c, mode, iv, data),
            (Primitive::Des(c), _) => seal_block(c, mode, iv, data),
            (Primitive::TripleDes(c), _) => seal_block(c, mode, iv, data),
            (Primitive::Blowfish(c), _) => seal_block(c, mode, iv, data),
            (Primitive::ChaCha20(key), _) => ChaCha20Stream::new(key, iv)?.encrypt(data),
            (Primitive::Rc4(key), _) => Rc4::new(key)?.encrypt(data),
        }
    }

    /// Decrypt `data` under `mode`; padding is left in place
    pub(crate) fn open(&self, mode: Mode, iv: &[u8], data: &[u8]) -> algorithms::Result<Vec<u8>> {
        trace!(mode = %mode, len = data.len(), "open");
        match (self, mode) {
            (Primitive::Aes128(c), Mode::Gcm) => Gcm::new(c.clone(), iv)?.decrypt(data, None),
            (Primitive::Aes192(c), Mode::Gcm) => Gcm::new(c.clone(), iv)?.decrypt(data, None),
            (Primitive::Aes256(c), Mode::Gcm) => Gcm::new(c.clone(), iv)?.decrypt(data, None),
            (Primitive::Aes128(c), _) => open_block(c, mode, iv, data),
            (Primitive::Aes192(c), _) => open_block(c, mode, iv, data),
            (Primitive::Aes256(c), _) => open_block(c, mode, iv, data),
            (Primitive::Des(c), _) => open_block(c, mode, iv, data),
            (Primitive::TripleDes(c), _) => open_block(c, mode, iv, data),
            (Primitive::Blowfish(c), _) => open_block(c, mode, iv, data),
            (Primitive::ChaCha20(key), _) => ChaCha20Stream::new(key, iv)?.decrypt(data),
            (Primitive::Rc4(key), _) => Rc4::new(key)?.decrypt(data),
        }
    }
}

fn seal_block<B: BlockPrimitive>(
    cipher: &B,
    mode: Mode,
    iv: &[u8],
    data: &[u8],
) -> algorithms::Result<Vec<u8>> {
    match mode {
        Mode::Cbc => Cbc::new(cipher.clone(), iv)?.encrypt(data),
        Mode::Cfb => Cfb::new(cipher.clone(), iv)?.encrypt(data),
        Mode::Ctr => Ctr::new(cipher.clone(), iv)?.encrypt(data),
        Mode::Ofb => Ofb::new(cipher.clone(), iv)?.encrypt(data),
        Mode::Ecb => Ecb::new(cipher.clone()).encrypt(data),
        Mode::Gcm => Err(gcm_block_error::<B>()),
    }
}

fn open_block<B: BlockPrimitive>(
    cipher: &B,
    mode: Mode,
    iv: &[u8],
    data: &[u8],
) -> algorithms::Result<Vec<u8>> {
    match mode {
        Mode::Cbc => Cbc::new(cipher.clone(), iv)?.decrypt(data),
        Mode::Cfb => Cfb::new(cipher.clone(), iv)?.decrypt(data),
        Mode::Ctr => Ctr::new(cipher.clone(), iv)?.decrypt(data),
        Mode::Ofb => Ofb::new(cipher.clone(), iv)?.decrypt(data),
        Mode::Ecb => Ecb::new(cipher.clone()).decrypt(data),
        Mode::Gcm => Err(gcm_block_error::<B>()),
    }
}

fn gcm_block_error<B: BlockPrimitive>() -> algorithms::Error {
    algorithms::Error::param(B::NAME, "GCM requires a 128-bit block cipher")
}

/// Key handed to the Blowfish primitive
///
/// The Blowfish key schedule reads the key cyclically, so repeating a short
/// key up to the largest whole multiple that fits yields the identical
/// schedule. This lets 1 to 3 byte keys through a primitive that only takes
/// 4 or more.
fn blowfish_schedule_key(key: &[u8]) -> Zeroizing<Vec<u8>> {
    if key.is_empty() || key.len() >= BLOWFISH_MIN_PRIMITIVE_KEY {
        return Zeroizing::new(key.to_vec());
    }
    let repeats = BLOWFISH_MAX_KEY_SIZE / key.len();
    Zeroizing::new(key.repeat(repeats))
}
