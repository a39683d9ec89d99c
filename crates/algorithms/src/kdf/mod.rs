//! Key derivation functions
//!
//! Only the legacy OpenSSL `EVP_BytesToKey` construction (one iteration, no
//! count parameter) is provided. It exists to read and write salted
//! ciphertexts compatible with `openssl enc`; it is not a password hashing
//! scheme and should not be used to protect new secrets.

pub mod evp;

pub use self::evp::{bytes_to_key, DerivedKeyMaterial, EvpKdf};
