//! Constants for symmetric encryption algorithms

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES-192 key size in bytes
pub const AES192_KEY_SIZE: usize = 24;

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// Accepted AES key sizes, preferred size first
pub const AES_KEY_SIZES: &[usize] = &[AES256_KEY_SIZE, AES192_KEY_SIZE, AES128_KEY_SIZE];

/// DES key size in bytes
pub const DES_KEY_SIZE: usize = 8;

/// Triple-DES (EDE3) key size in bytes
pub const TDES_KEY_SIZE: usize = 24;

/// DES and Triple-DES block size in bytes
pub const DES_BLOCK_SIZE: usize = 8;

/// Blowfish maximum key size in bytes
pub const BLOWFISH_MAX_KEY_SIZE: usize = 56;

/// Blowfish block size in bytes
pub const BLOWFISH_BLOCK_SIZE: usize = 8;

/// ChaCha20 key size in bytes
pub const CHACHA20_KEY_SIZE: usize = 32;

/// ChaCha20 nonce size of the original 64-bit-nonce variant
pub const CHACHA20_LEGACY_NONCE_SIZE: usize = 8;

/// ChaCha20 nonce size of the IETF variant (RFC 8439)
pub const CHACHA20_NONCE_SIZE: usize = 12;

/// XChaCha20 extended nonce size in bytes
pub const XCHACHA20_NONCE_SIZE: usize = 24;

/// Accepted ChaCha20 nonce sizes
pub const CHACHA20_NONCE_SIZES: &[usize] = &[
    CHACHA20_LEGACY_NONCE_SIZE,
    CHACHA20_NONCE_SIZE,
    XCHACHA20_NONCE_SIZE,
];

/// RC4 maximum key size in bytes
pub const RC4_MAX_KEY_SIZE: usize = 256;

/// GCM standard nonce size in bytes
pub const GCM_NONCE_SIZE: usize = 12;

/// GCM authentication tag size in bytes
pub const GCM_TAG_SIZE: usize = 16;

/// Largest number of blocks GCM may seal under a single nonce
pub const GCM_MAX_BLOCKS: u64 = (1 << 32) - 2;
