//! One-shot digest helpers
//!
//! Thin wrappers over the RustCrypto `md-5` and `sha3` crates returning
//! owned byte vectors. MD5 is here because salted key derivation is defined
//! over it; do not use it for anything that needs collision resistance.

use digest::{Digest, ExtendableOutput, Update, XofReader};
use md5::Md5;
use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512, Shake128, Shake256};

pub use params::utils::hash::{
    MD5_OUTPUT_SIZE, SHA3_224_OUTPUT_SIZE, SHA3_256_OUTPUT_SIZE, SHA3_384_OUTPUT_SIZE,
    SHA3_512_OUTPUT_SIZE,
};

/// MD5 digest of `data`
pub fn md5(data: &[u8]) -> [u8; MD5_OUTPUT_SIZE] {
    Md5::digest(data).into()
}

/// Lowercase hex MD5 digest of `data`
pub fn md5_hex(data: &[u8]) -> String {
    hex::encode(Md5::digest(data))
}

/// SHA3-224 digest of `data`
pub fn sha3_224(data: &[u8]) -> Vec<u8> {
    Sha3_224::digest(data).to_vec()
}

/// SHA3-256 digest of `data`
pub fn sha3_256(data: &[u8]) -> Vec<u8> {
    Sha3_256::digest(data).to_vec()
}

/// SHA3-384 digest of `data`
pub fn sha3_384(data: &[u8]) -> Vec<u8> {
    Sha3_384::digest(data).to_vec()
}

/// SHA3-512 digest of `data`
pub fn sha3_512(data: &[u8]) -> Vec<u8> {
    Sha3_512::digest(data).to_vec()
}

/// `size` bytes of SHAKE128 output over `data`
pub fn shake128(data: &[u8], size: usize) -> Vec<u8> {
    let mut xof = Shake128::default();
    xof.update(data);
    read_xof(xof.finalize_xof(), size)
}

/// `size` bytes of SHAKE256 output over `data`
pub fn shake256(data: &[u8], size: usize) -> Vec<u8> {
    let mut xof = Shake256::default();
    xof.update(data);
    read_xof(xof.finalize_xof(), size)
}

fn read_xof(mut reader: impl XofReader, size: usize) -> Vec<u8> {
    let mut out = vec![0u8; size];
    reader.read(&mut out);
    out
}
