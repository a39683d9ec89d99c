//! Salted key-derivation header
//!
//! When no IV is supplied, each encryption draws a fresh 8-byte salt,
//! derives key and IV from the caller's key (used as a password) with
//! `EVP_BytesToKey`/MD5, and prefixes the ciphertext with
//!
//! ```text
//! +----------------+----------------+---------------------+
//! | "salted__" (8) | salt (8)       | ciphertext ...      |
//! +----------------+----------------+---------------------+
//! ```
//!
//! Decryption recognises the marker, re-derives the same key and IV from
//! the embedded salt, and strips the 16 header bytes.

use algorithms::kdf::{bytes_to_key, DerivedKeyMaterial};
use algorithms::random::fill_random;
use params::utils::kdf::{SALT_HEADER_SIZE, SALT_MARKER, SALT_MARKER_SIZE, SALT_SIZE};
use params::utils::symmetric::GCM_NONCE_SIZE;
use tracing::debug;

use crate::error::{Result, SymmetricResultExt};
use crate::mode::Mode;

/// The 16-byte marker-plus-salt prefix of a salted ciphertext
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaltHeader {
    salt: [u8; SALT_SIZE],
}

impl SaltHeader {
    /// A header with a fresh random salt
    pub fn generate() -> Self {
        let mut salt = [0u8; SALT_SIZE];
        let source = fill_random(&mut salt);
        debug!(cryptographic = source.is_cryptographic(), "generated salt header");
        Self { salt }
    }

    /// A header around a known salt
    pub fn from_salt(salt: [u8; SALT_SIZE]) -> Self {
        Self { salt }
    }

    /// Recognise a header at the start of `data`
    ///
    /// Requires at least 16 bytes whose first 8 are the marker.
    pub fn detect(data: &[u8]) -> Option<Self> {
        if data.len() < SALT_HEADER_SIZE || &data[..SALT_MARKER_SIZE] != SALT_MARKER {
            return None;
        }
        let mut salt = [0u8; SALT_SIZE];
        salt.copy_from_slice(&data[SALT_MARKER_SIZE..SALT_HEADER_SIZE]);
        Some(Self { salt })
    }

    /// The embedded salt
    pub fn salt(&self) -> &[u8; SALT_SIZE] {
        &self.salt
    }

    /// Marker followed by salt
    pub fn to_bytes(&self) -> [u8; SALT_HEADER_SIZE] {
        let mut out = [0u8; SALT_HEADER_SIZE];
        out[..SALT_MARKER_SIZE].copy_from_slice(SALT_MARKER);
        out[SALT_MARKER_SIZE..].copy_from_slice(&self.salt);
        out
    }

    /// Derive key and IV for this salt
    ///
    /// The IV part is 12 bytes under GCM, `block_or_nonce_size` under the
    /// other IV-consuming modes and empty under ECB.
    pub fn derive(
        &self,
        password: &[u8],
        block_or_nonce_size: usize,
        mode: Mode,
        base_key_size: usize,
    ) -> Result<DerivedKeyMaterial> {
        let total = base_key_size + derived_iv_size(block_or_nonce_size, mode);
        bytes_to_key(password, &self.salt, base_key_size, total).map_primitive_err_in("salt header")
    }
}

/// Length of the IV part of the derived material
pub fn derived_iv_size(block_or_nonce_size: usize, mode: Mode) -> usize {
    match mode {
        Mode::Gcm => GCM_NONCE_SIZE,
        Mode::Ecb => 0,
        _ => block_or_nonce_size,
    }
}

/// Draw a salt and derive key and IV for one encryption
pub fn generate_header(
    password: &[u8],
    block_or_nonce_size: usize,
    mode: Mode,
    base_key_size: usize,
) -> Result<(SaltHeader, DerivedKeyMaterial)> {
    let header = SaltHeader::generate();
    let material = header.derive(password, block_or_nonce_size, mode, base_key_size)?;
    Ok((header, material))
}

/// Re-derive key and IV from an existing header
pub fn parse_header(
    header: &SaltHeader,
    password: &[u8],
    block_or_nonce_size: usize,
    mode: Mode,
    base_key_size: usize,
) -> Result<DerivedKeyMaterial> {
    debug!(mode = %mode, base_key_size, "parsing salt header");
    header.derive(password, block_or_nonce_size, mode, base_key_size)
}
