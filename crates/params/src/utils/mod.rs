//! Constant values grouped by concern

pub mod hash;
pub mod kdf;
pub mod symmetric;
