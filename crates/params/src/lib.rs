//! Constant values for saltcrypt cryptographic operations
//!
//! This library provides the size tables shared by every saltcrypt crate:
//! block sizes, accepted key sizes, nonce sizes and the layout of the
//! salted key-derivation header.

#![no_std]

pub mod utils;
