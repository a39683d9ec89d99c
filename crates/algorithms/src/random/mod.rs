//! Random byte source
//!
//! Salts and ISO 10126 filler bytes come from the operating system CSPRNG.
//! If that source fails, the bytes are drawn from a time-seeded
//! non-cryptographic generator instead. The fallback is never silent: it
//! emits a `warn!` event and is reported through [`EntropySource`], so
//! callers that cannot tolerate it can refuse the output.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::{OsRng, SmallRng};
use rand::{RngCore, SeedableRng};
use tracing::warn;

/// Where a batch of random bytes came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntropySource {
    /// The operating system CSPRNG
    Os,
    /// The non-cryptographic fallback generator
    Fallback,
}

impl EntropySource {
    /// True when the bytes are fit for key material
    pub fn is_cryptographic(self) -> bool {
        matches!(self, EntropySource::Os)
    }
}

/// Fill `buf` with unpredictable bytes
///
/// Safe to call from any number of threads at once; every call draws
/// independently from the OS source.
pub fn fill_random(buf: &mut [u8]) -> EntropySource {
    match OsRng.try_fill_bytes(buf) {
        Ok(()) => EntropySource::Os,
        Err(err) => {
            warn!(
                error = %err,
                len = buf.len(),
                "OS random source unavailable, falling back to a non-cryptographic generator"
            );
            fallback_rng().fill_bytes(buf);
            EntropySource::Fallback
        }
    }
}

/// Produce `len` random bytes
pub fn random_bytes(len: usize) -> (Vec<u8>, EntropySource) {
    let mut out = vec![0u8; len];
    let source = fill_random(&mut out);
    (out, source)
}

fn fallback_rng() -> SmallRng {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    SmallRng::seed_from_u64(nanos)
}
