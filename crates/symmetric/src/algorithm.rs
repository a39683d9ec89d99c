//! Cipher algorithm tags and their static properties

use core::fmt;
use core::str::FromStr;

use api::Error;
use params::utils::symmetric::{
    AES_BLOCK_SIZE, AES_KEY_SIZES, BLOWFISH_BLOCK_SIZE, BLOWFISH_MAX_KEY_SIZE, CHACHA20_KEY_SIZE,
    DES_BLOCK_SIZE, DES_KEY_SIZE, GCM_NONCE_SIZE, RC4_MAX_KEY_SIZE, TDES_KEY_SIZE,
    XCHACHA20_NONCE_SIZE,
};

use crate::mode::Mode;

/// Symmetric algorithm selected for a [`Crypt`](crate::Crypt) context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Algorithm {
    /// AES-128/192/256, picked by key length
    Aes = 0,
    /// Single DES
    Des = 1,
    /// Triple DES (EDE, three keys)
    TripleDes = 2,
    /// ChaCha20 with an 8, 12 or 24 byte nonce
    ChaCha20 = 3,
    /// Blowfish
    Blowfish = 4,
    /// RC4
    Rc4 = 5,
}

/// Accepted key lengths for an algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPolicy {
    /// Exact lengths, largest first; longer keys are truncated
    Fixed(&'static [usize]),
    /// Any length in `1..=max`; longer keys are truncated to `max`
    Range {
        /// Largest accepted key length
        max: usize,
    },
}

impl Algorithm {
    /// All algorithms, in discriminant order
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Aes,
        Algorithm::Des,
        Algorithm::TripleDes,
        Algorithm::ChaCha20,
        Algorithm::Blowfish,
        Algorithm::Rc4,
    ];

    /// Canonical name
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Aes => "AES",
            Algorithm::Des => "DES",
            Algorithm::TripleDes => "DES3",
            Algorithm::ChaCha20 => "ChaCha20",
            Algorithm::Blowfish => "Blowfish",
            Algorithm::Rc4 => "RC4",
        }
    }

    /// Error context for operations on this algorithm
    pub fn context(self) -> &'static str {
        match self {
            Algorithm::Aes => "crypt AES",
            Algorithm::Des => "crypt DES",
            Algorithm::TripleDes => "crypt DES3",
            Algorithm::ChaCha20 => "crypt ChaCha20",
            Algorithm::Blowfish => "crypt Blowfish",
            Algorithm::Rc4 => "crypt RC4",
        }
    }

    /// Block width, `None` for stream ciphers
    pub fn block_size(self) -> Option<usize> {
        match self {
            Algorithm::Aes => Some(AES_BLOCK_SIZE),
            Algorithm::Des | Algorithm::TripleDes => Some(DES_BLOCK_SIZE),
            Algorithm::Blowfish => Some(BLOWFISH_BLOCK_SIZE),
            Algorithm::ChaCha20 | Algorithm::Rc4 => None,
        }
    }

    /// True for ChaCha20 and RC4
    pub fn is_stream(self) -> bool {
        self.block_size().is_none()
    }

    /// Accepted key lengths
    pub fn key_policy(self) -> KeyPolicy {
        match self {
            Algorithm::Aes => KeyPolicy::Fixed(AES_KEY_SIZES),
            Algorithm::Des => KeyPolicy::Fixed(&[DES_KEY_SIZE]),
            Algorithm::TripleDes => KeyPolicy::Fixed(&[TDES_KEY_SIZE]),
            Algorithm::ChaCha20 => KeyPolicy::Fixed(&[CHACHA20_KEY_SIZE]),
            Algorithm::Blowfish => KeyPolicy::Range {
                max: BLOWFISH_MAX_KEY_SIZE,
            },
            Algorithm::Rc4 => KeyPolicy::Range {
                max: RC4_MAX_KEY_SIZE,
            },
        }
    }

    /// True when `mode` may be combined with this algorithm
    ///
    /// GCM needs a 128-bit block, so only AES supports it.
    pub fn supports(self, mode: Mode) -> bool {
        mode != Mode::Gcm || self == Algorithm::Aes
    }

    /// True when encryption without an IV produces a salted header
    ///
    /// RC4 has no IV, and ECB never uses one.
    pub fn uses_salt_header(self, mode: Mode) -> bool {
        match self {
            Algorithm::Rc4 => false,
            Algorithm::ChaCha20 => true,
            _ => mode.uses_iv(),
        }
    }

    /// Key length derived from a password by the salted header
    pub fn derived_key_size(self) -> usize {
        match self {
            Algorithm::Aes => AES_KEY_SIZES[0],
            Algorithm::Des => DES_KEY_SIZE,
            Algorithm::TripleDes => TDES_KEY_SIZE,
            Algorithm::ChaCha20 => CHACHA20_KEY_SIZE,
            Algorithm::Blowfish => BLOWFISH_MAX_KEY_SIZE,
            Algorithm::Rc4 => RC4_MAX_KEY_SIZE,
        }
    }

    /// The block or nonce size handed to the salted key derivation
    ///
    /// ChaCha20 derives a 24-byte extended nonce.
    pub fn derivation_block_size(self) -> usize {
        self.block_size().unwrap_or(XCHACHA20_NONCE_SIZE)
    }

    /// Mode the salted key derivation runs under
    ///
    /// Stream ciphers always derive a full nonce, whatever mode the context
    /// carries.
    pub fn derivation_mode(self, mode: Mode) -> Mode {
        if self.is_stream() {
            Mode::Cbc
        } else {
            mode
        }
    }

    /// Required IV or nonce length for `mode`, if a single length applies
    pub fn iv_size(self, mode: Mode) -> Option<usize> {
        match (self, mode) {
            (Algorithm::ChaCha20 | Algorithm::Rc4, _) => None,
            (_, Mode::Ecb) => None,
            (_, Mode::Gcm) => Some(GCM_NONCE_SIZE),
            _ => self.block_size(),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "aes" => Ok(Algorithm::Aes),
            "des" => Ok(Algorithm::Des),
            "des3" | "3des" | "tripledes" | "tdes" => Ok(Algorithm::TripleDes),
            "chacha20" | "chacha" => Ok(Algorithm::ChaCha20),
            "blowfish" => Ok(Algorithm::Blowfish),
            "rc4" | "arc4" => Ok(Algorithm::Rc4),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl TryFrom<u8> for Algorithm {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Algorithm::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| Error::UnknownAlgorithm(value.to_string()))
    }
}
