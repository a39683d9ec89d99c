//! Authenticated encryption
//!
//! Only Galois/Counter Mode over a 128-bit block primitive is provided.

pub mod gcm;

pub use self::gcm::Gcm;
