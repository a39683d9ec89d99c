//! Public API types for the saltcrypt library
//!
//! This crate provides the error surface shared by every saltcrypt crate:
//! the [`Error`] taxonomy, the [`Result`] alias and the [`validate`]
//! helpers used at the points where lengths and parameters are checked.

pub mod error;

// Re-export commonly used items at the crate level for convenience
pub use error::{validate, Error, Result};
