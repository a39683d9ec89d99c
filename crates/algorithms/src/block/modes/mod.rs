//! Block cipher modes of operation
//!
//! CBC, CFB, CTR and OFB wrap the RustCrypto mode crates. ECB has no
//! upstream implementation and is built here directly on the block
//! transform.
//!
//! Every wrapper takes the keyed primitive plus an IV at construction and
//! keeps both immutable, so a single instance can encrypt or decrypt any
//! number of messages. Each call starts from the stored IV.

pub mod cbc;
pub mod cfb;
pub mod ctr;
pub mod ecb;
pub mod ofb;

// Re-exports
pub use self::cbc::Cbc;
pub use self::cfb::Cfb;
pub use self::ctr::Ctr;
pub use self::ecb::Ecb;
pub use self::ofb::Ofb;
