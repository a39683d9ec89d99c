//! Building blocks for the saltcrypt symmetric cipher layer
//!
//! The block transforms, keystreams and digests come from the RustCrypto
//! crates. This crate adds what those crates leave to the caller:
//!
//! - block padding schemes ([`padding`])
//! - mode wrappers that own their IV, plus a from-scratch ECB
//!   ([`block::modes`])
//! - a GCM wrapper with the NIST input limit and a distinct authentication
//!   error ([`aead`])
//! - ChaCha20 nonce-variant selection and RC4 ([`stream`])
//! - OpenSSL `EVP_BytesToKey` ([`kdf`])
//! - one-shot MD5/SHA-3/SHAKE helpers ([`hash`])
//! - an OS random source with a reported fallback ([`random`])
//!
//! Everything here is stateless across calls: a keyed mode wrapper can be
//! shared between threads and reused for any number of messages.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Padding schemes
pub mod padding;
pub use padding::PaddingScheme;

// Block cipher primitives and modes
pub mod block;
pub use block::modes::{Cbc, Cfb, Ctr, Ecb, Ofb};
pub use block::{Aes128, Aes192, Aes256, BlockPrimitive, Blowfish, Des, TdesEde3};

// AEAD
pub mod aead;
pub use aead::Gcm;

// Stream ciphers
pub mod stream;
pub use stream::{ChaCha20Stream, KeyStream, Rc4};

// Key derivation
pub mod kdf;
pub use kdf::{bytes_to_key, DerivedKeyMaterial, EvpKdf};

// Digest helpers
pub mod hash;

// Randomness
pub mod random;
pub use random::{fill_random, random_bytes, EntropySource};
