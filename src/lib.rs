//! # saltcrypt
//!
//! One encrypt/decrypt contract over the classic symmetric ciphers.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! saltcrypt = "0.3"
//! ```
//!
//! ```
//! use saltcrypt::prelude::*;
//!
//! let ciphertext = Aes::encrypt(b"secret message", b"0123456789abcdef", None, Options::default())?;
//! let plaintext = Aes::decrypt(&ciphertext, b"0123456789abcdef", None, Options::default())?;
//! assert_eq!(plaintext, b"secret message");
//! # Ok::<(), saltcrypt::prelude::Error>(())
//! ```
//!
//! ## Features
//!
//! - `symmetric` (default): the [`Crypt`](symmetric::Crypt) engine and the
//!   per-algorithm façades
//! - `algorithms`: padding schemes, mode wrappers, RC4, the key-derivation
//!   function and hash helpers on their own
//! - `serde`: `Serialize`/`Deserialize` for the algorithm, mode and padding
//!   tags and for `Options`
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`saltcrypt-api`]: error taxonomy and validation helpers
//! - [`saltcrypt-params`]: size and marker constants
//! - [`saltcrypt-algorithms`]: padding, block modes, key-streams, KDF
//! - [`saltcrypt-symmetric`]: the cipher engine and salted header

// Core re-exports (always available)
pub use saltcrypt_api as api;
pub use saltcrypt_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use saltcrypt_algorithms as algorithms;

#[cfg(feature = "symmetric")]
pub use saltcrypt_symmetric as symmetric;

/// Common imports for saltcrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::PaddingScheme;

    #[cfg(feature = "symmetric")]
    pub use crate::symmetric::{
        Aes, Algorithm, Blowfish, ChaCha20, Crypt, Des, Mode, Options, Rc4, TripleDes,
    };
}
