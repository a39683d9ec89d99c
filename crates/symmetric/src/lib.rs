//! Symmetric cipher engine for the saltcrypt library
//!
//! This crate composes the building blocks in `saltcrypt-algorithms` into
//! keyed [`Crypt`] contexts: an algorithm, a mode of operation and a padding
//! scheme bound to a validated key and an optional IV.
//!
//! When no IV is supplied, every encryption writes an OpenSSL-style salted
//! header and derives a fresh key and IV from the caller's key; decryption
//! reads the header back. With an explicit IV the ciphertext carries no
//! header.
//!
//! ```
//! use saltcrypt_symmetric::{Algorithm, Crypt, Mode, Options};
//!
//! let crypt = Crypt::new(
//!     Algorithm::Aes,
//!     b"0123456789abcdef",
//!     None,
//!     Options::default().with_mode(Mode::Ctr),
//! )?;
//! let ciphertext = crypt.encrypt(b"hello")?;
//! assert_eq!(&ciphertext[..8], b"salted__");
//! assert_eq!(crypt.decrypt(&ciphertext)?, b"hello");
//! # Ok::<(), saltcrypt_symmetric::Error>(())
//! ```

#![forbid(unsafe_code)]

pub mod algorithm;
pub mod cipher;
pub mod error;
pub mod key;
pub mod mode;
pub mod options;
pub mod salt;
pub mod shortcuts;

mod primitive;

// Re-export main types for convenience
pub use algorithm::{Algorithm, KeyPolicy};
pub use cipher::Crypt;
pub use mode::Mode;
pub use options::Options;
pub use salt::SaltHeader;
pub use shortcuts::{Aes, Blowfish, ChaCha20, Des, Rc4, TripleDes};

pub use algorithms::padding::PaddingScheme;

// Re-export the API error system
pub use error::{validate, Error, Result, SymmetricResultExt};
