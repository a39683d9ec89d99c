//! Constants for the salted key-derivation header
//!
//! A salted ciphertext starts with `SALT_MARKER || salt`, followed by the
//! mode-specific ciphertext.

/// Literal marker opening every salted ciphertext
pub const SALT_MARKER: &[u8; SALT_MARKER_SIZE] = b"salted__";

/// Marker length in bytes
pub const SALT_MARKER_SIZE: usize = 8;

/// Random salt length in bytes
pub const SALT_SIZE: usize = 8;

/// Full header length (marker plus salt)
pub const SALT_HEADER_SIZE: usize = SALT_MARKER_SIZE + SALT_SIZE;
