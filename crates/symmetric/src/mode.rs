//! Block modes of operation

use core::fmt;
use core::str::FromStr;

use api::Error;

/// Mode of operation applied to a block cipher
///
/// Stream ciphers (ChaCha20, RC4) ignore the mode, but still refuse
/// [`Mode::Gcm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Mode {
    /// Cipher block chaining
    #[default]
    Cbc = 0,
    /// Cipher feedback
    Cfb = 1,
    /// Counter
    Ctr = 2,
    /// Output feedback
    Ofb = 3,
    /// Galois/counter mode (authenticated)
    Gcm = 4,
    /// Electronic codebook
    Ecb = 5,
}

impl Mode {
    /// All modes, in discriminant order
    pub const ALL: [Mode; 6] = [Mode::Cbc, Mode::Cfb, Mode::Ctr, Mode::Ofb, Mode::Gcm, Mode::Ecb];

    /// Canonical upper-case name
    pub fn name(self) -> &'static str {
        match self {
            Mode::Cbc => "CBC",
            Mode::Cfb => "CFB",
            Mode::Ctr => "CTR",
            Mode::Ofb => "OFB",
            Mode::Gcm => "GCM",
            Mode::Ecb => "ECB",
        }
    }

    /// Only the whole-block modes need a padding scheme
    pub fn requires_padding(self) -> bool {
        matches!(self, Mode::Cbc | Mode::Ecb)
    }

    /// True for the AEAD mode
    pub fn is_authenticated(self) -> bool {
        matches!(self, Mode::Gcm)
    }

    /// True when the mode consumes an IV or nonce
    pub fn uses_iv(self) -> bool {
        !matches!(self, Mode::Ecb)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownMode(s.to_string()))
    }
}

impl TryFrom<u8> for Mode {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Mode::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| Error::UnknownMode(value.to_string()))
    }
}
