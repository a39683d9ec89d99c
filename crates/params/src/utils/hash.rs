//! Constants for hash functions

/// Output size of MD5 in bytes
pub const MD5_OUTPUT_SIZE: usize = 16;

/// Output size of SHA3-224 in bytes
pub const SHA3_224_OUTPUT_SIZE: usize = 28;

/// Output size of SHA3-256 in bytes
pub const SHA3_256_OUTPUT_SIZE: usize = 32;

/// Output size of SHA3-384 in bytes
pub const SHA3_384_OUTPUT_SIZE: usize = 48;

/// Output size of SHA3-512 in bytes
pub const SHA3_512_OUTPUT_SIZE: usize = 64;
