//! Error handling for the cipher engine
//!
//! The engine reports failures with the api error type. Building-block
//! errors from `saltcrypt-algorithms` are converted on the way out, with
//! the operation's context attached.

// Re-export the primary API error system
pub use api::error::{validate, Error, Result};

// Import for conversions
use algorithms::error::Error as PrimitiveError;

/// Convert a building-block error to an API error
pub fn from_primitive_error(err: PrimitiveError) -> Error {
    Error::from(err)
}

/// Extension trait to make conversions more ergonomic
pub trait SymmetricResultExt<T> {
    /// Convert a building-block result to an API result
    fn map_primitive_err(self) -> Result<T>;

    /// Convert a building-block result, replacing the error context
    fn map_primitive_err_in(self, context: &'static str) -> Result<T>;
}

impl<T> SymmetricResultExt<T> for core::result::Result<T, PrimitiveError> {
    fn map_primitive_err(self) -> Result<T> {
        self.map_err(from_primitive_error)
    }

    fn map_primitive_err_in(self, context: &'static str) -> Result<T> {
        self.map_err(|e| from_primitive_error(e).with_context(context))
    }
}

// Already the right type, pass through
impl<T> SymmetricResultExt<T> for core::result::Result<T, Error> {
    fn map_primitive_err(self) -> Result<T> {
        self
    }

    fn map_primitive_err_in(self, context: &'static str) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}
