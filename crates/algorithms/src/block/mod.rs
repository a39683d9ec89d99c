//! Block cipher primitives
//!
//! The block transforms themselves come from the RustCrypto `aes`, `des`
//! and `blowfish` crates. [`BlockPrimitive`] is the seam the mode wrappers
//! in [`modes`] are generic over.

use cipher::{
    AsyncStreamCipher, BlockCipher, BlockDecrypt, BlockDecryptMut, BlockEncrypt, BlockEncryptMut,
    InnerIvInit, KeyInit, StreamCipher, StreamCipherCoreWrapper,
};
use tracing::debug;

use crate::error::{Error, Result};

pub mod modes;

pub use aes::{Aes128, Aes192, Aes256};
pub use blowfish::Blowfish;
pub use des::{Des, TdesEde3};

/// A keyed block transform usable by every mode in this crate
///
/// Besides the transform itself, each primitive names the CBC and CFB
/// types the RustCrypto mode crates build on it and applies its own OFB and
/// CTR keystreams, so the wrappers in [`modes`] only need `B: BlockPrimitive`.
pub trait BlockPrimitive: BlockCipher + BlockEncrypt + BlockDecrypt + KeyInit + Clone {
    /// Algorithm name used in errors and log events
    const NAME: &'static str;

    /// CBC encryptor
    type CbcEnc: BlockEncryptMut + InnerIvInit<Inner = Self>;
    /// CBC decryptor
    type CbcDec: BlockDecryptMut + InnerIvInit<Inner = Self>;
    /// Full-block CFB encryptor
    type CfbEnc: AsyncStreamCipher + BlockEncryptMut + InnerIvInit<Inner = Self>;
    /// Full-block CFB decryptor
    type CfbDec: AsyncStreamCipher + BlockDecryptMut + InnerIvInit<Inner = Self>;

    /// XOR the OFB keystream started from `iv` into `data`
    fn ofb_keystream(&self, iv: &[u8], data: &mut [u8]) -> Result<()>;

    /// XOR the counter-mode keystream into `data`
    ///
    /// The whole `counter` block is one big-endian integer. Running past its
    /// end is a processing error.
    fn ctr_keystream(&self, counter: &[u8], data: &mut [u8]) -> Result<()>;

    /// Bind the primitive to `key`
    fn from_key(key: &[u8]) -> Result<Self> {
        let cipher = Self::new_from_slice(key).map_err(|_| Error::KeyLength {
            algorithm: Self::NAME,
            actual: key.len(),
        })?;
        debug!(algorithm = Self::NAME, key_len = key.len(), "bound block primitive");
        Ok(cipher)
    }

    /// Block width in bytes
    fn width() -> usize {
        <Self as cipher::BlockSizeUser>::block_size()
    }
}

macro_rules! block_primitive {
    ($ty:ty, $name:literal, $ctr:ident) => {
        impl BlockPrimitive for $ty {
            const NAME: &'static str = $name;
            type CbcEnc = cbc::Encryptor<$ty>;
            type CbcDec = cbc::Decryptor<$ty>;
            type CfbEnc = cfb_mode::Encryptor<$ty>;
            type CfbDec = cfb_mode::Decryptor<$ty>;

            fn ofb_keystream(&self, iv: &[u8], data: &mut [u8]) -> Result<()> {
                let core = ::ofb::OfbCore::<$ty>::inner_iv_slice_init(self.clone(), iv)
                    .map_err(|_| Error::Length {
                        context: "OFB initialization vector",
                        expected: Self::width(),
                        actual: iv.len(),
                    })?;
                StreamCipherCoreWrapper::from_core(core).apply_keystream(data);
                Ok(())
            }

            fn ctr_keystream(&self, counter: &[u8], data: &mut [u8]) -> Result<()> {
                let core = ::ctr::CtrCore::<$ty, ::ctr::flavors::$ctr>::inner_iv_slice_init(
                    self.clone(),
                    counter,
                )
                .map_err(|_| Error::Length {
                    context: "CTR initial counter",
                    expected: Self::width(),
                    actual: counter.len(),
                })?;
                StreamCipherCoreWrapper::from_core(core)
                    .try_apply_keystream(data)
                    .map_err(|_| Error::Processing {
                        operation: "CTR",
                        details: "counter space exhausted",
                    })
            }
        }
    };
}

block_primitive!(Aes128, "AES-128", Ctr128BE);
block_primitive!(Aes192, "AES-192", Ctr128BE);
block_primitive!(Aes256, "AES-256", Ctr128BE);
block_primitive!(Des, "DES", Ctr64BE);
block_primitive!(TdesEde3, "3DES", Ctr64BE);
block_primitive!(Blowfish, "Blowfish", Ctr64BE);
