//! Block padding schemes
//!
//! Chained (CBC) and codebook (ECB) modes only operate on whole blocks, so
//! the plaintext is extended to a block boundary before encryption and the
//! extension is removed after decryption. Five schemes are supported:
//!
//! | Scheme          | Pad bytes for `k` missing bytes              |
//! |-----------------|----------------------------------------------|
//! | PKCS#7          | `k` bytes of value `k`                        |
//! | ISO/IEC 9797-1  | `0x80` then zero padding of the marked data   |
//! | ANSI X.923      | `k - 1` zeros then one byte of value `k`      |
//! | ISO 10126       | `k - 1` random bytes then one byte of value `k` |
//! | Zero padding    | `k` zero bytes                                |
//!
//! For the other schemes `k` is always in `[1, block_size]`: data that
//! already ends on a block boundary gets a full extra block. ISO/IEC 9797-1
//! zero-pads the data *after* appending the marker, so it adds
//! `1..=block_size` zeros and `k` reaches `block_size + 1` when the marker
//! itself lands on a boundary.
//!
//! Zero padding cannot round-trip plaintext that itself ends in zero bytes:
//! unpadding strips *every* trailing zero. This is kept as-is for
//! compatibility with existing ciphertexts.

use core::fmt;
use core::str::FromStr;

use subtle::{Choice, ConstantTimeEq};

use crate::error::{validate, Error, Result};
use crate::random::fill_random;

/// Largest block size the single-byte pad counters can describe
pub const MAX_BLOCK_SIZE: usize = 255;

/// Largest block size accepted by ISO 10126
pub const ISO10126_MAX_BLOCK_SIZE: usize = 256;

/// Padding scheme applied before chained or codebook encryption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum PaddingScheme {
    /// PKCS#7
    #[default]
    Pkcs7 = 0,
    /// ISO/IEC 9797-1 padding method 2
    Iso97971 = 1,
    /// ANSI X.923
    AnsiX923 = 2,
    /// ISO 10126 (withdrawn in 2007)
    Iso10126 = 3,
    /// Zero padding
    ZeroPadding = 4,
    /// No padding; data must already be block aligned
    NoPadding = 5,
}

impl PaddingScheme {
    /// All schemes, in discriminant order
    pub const ALL: [PaddingScheme; 6] = [
        PaddingScheme::Pkcs7,
        PaddingScheme::Iso97971,
        PaddingScheme::AnsiX923,
        PaddingScheme::Iso10126,
        PaddingScheme::ZeroPadding,
        PaddingScheme::NoPadding,
    ];

    /// Human readable name
    pub fn name(self) -> &'static str {
        match self {
            PaddingScheme::Pkcs7 => "PKCS7",
            PaddingScheme::Iso97971 => "ISO/IEC 9797-1",
            PaddingScheme::AnsiX923 => "ANSI X.923",
            PaddingScheme::Iso10126 => "ISO10126",
            PaddingScheme::ZeroPadding => "ZeroPadding",
            PaddingScheme::NoPadding => "NoPadding",
        }
    }

    /// Pad `data` to a multiple of `block_size`
    pub fn pad(self, data: &[u8], block_size: usize) -> Result<Vec<u8>> {
        pad(self, data, block_size)
    }

    /// Remove padding previously added by [`PaddingScheme::pad`]
    pub fn unpad(self, data: &[u8], block_size: usize) -> Result<Vec<u8>> {
        unpad(self, data, block_size)
    }
}

impl fmt::Display for PaddingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for PaddingScheme {
    type Error = api::Error;

    fn try_from(value: u8) -> core::result::Result<Self, Self::Error> {
        PaddingScheme::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| api::Error::UnknownPadding(value.to_string()))
    }
}

impl FromStr for PaddingScheme {
    type Err = api::Error;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "pkcs7" | "pkcs5" => Ok(PaddingScheme::Pkcs7),
            "iso97971" | "isoiec97971" => Ok(PaddingScheme::Iso97971),
            "ansix923" | "x923" => Ok(PaddingScheme::AnsiX923),
            "iso10126" => Ok(PaddingScheme::Iso10126),
            "zero" | "zeropadding" => Ok(PaddingScheme::ZeroPadding),
            "none" | "nopadding" => Ok(PaddingScheme::NoPadding),
            _ => Err(api::Error::UnknownPadding(s.to_string())),
        }
    }
}

/// Pad `data` to a multiple of `block_size` under `scheme`
pub fn pad(scheme: PaddingScheme, data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    match scheme {
        PaddingScheme::Pkcs7 => pkcs7_pad(data, block_size),
        PaddingScheme::Iso97971 => iso97971_pad(data, block_size),
        PaddingScheme::AnsiX923 => ansix923_pad(data, block_size),
        PaddingScheme::Iso10126 => iso10126_pad(data, block_size),
        PaddingScheme::ZeroPadding => zero_pad(data, block_size),
        PaddingScheme::NoPadding => {
            check_block_size(block_size, MAX_BLOCK_SIZE)?;
            validate::block_aligned("NoPadding", data.len(), block_size)?;
            Ok(data.to_vec())
        }
    }
}

/// Remove `scheme` padding from `data`
pub fn unpad(scheme: PaddingScheme, data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    match scheme {
        PaddingScheme::Pkcs7 => pkcs7_unpad(data, block_size),
        PaddingScheme::Iso97971 => iso97971_unpad(data, block_size),
        PaddingScheme::AnsiX923 => ansix923_unpad(data, block_size),
        PaddingScheme::Iso10126 => iso10126_unpad(data, block_size),
        PaddingScheme::ZeroPadding => zero_unpad(data, block_size),
        PaddingScheme::NoPadding => {
            check_block_size(block_size, MAX_BLOCK_SIZE)?;
            Ok(data.to_vec())
        }
    }
}

fn check_block_size(block_size: usize, max: usize) -> Result<()> {
    validate::parameter(
        (1..=max).contains(&block_size),
        "block_size",
        "block size is out of bounds",
    )
}

/// Number of pad bytes needed to reach the next block boundary
fn pad_len(data_len: usize, block_size: usize) -> usize {
    block_size - data_len % block_size
}

/// Final pad-count byte, checked against the block size
fn trailing_count(scheme: &'static str, data: &[u8], block_size: usize) -> Result<usize> {
    validate::block_aligned(scheme, data.len(), block_size)?;
    let count = match data.last() {
        Some(&b) => b as usize,
        None => {
            return Err(Error::Padding {
                scheme,
                reason: "no padded data",
            })
        }
    };
    if count == 0 || count > block_size {
        return Err(Error::Padding {
            scheme,
            reason: "invalid padding length byte",
        });
    }
    Ok(count)
}

fn all_equal(bytes: &[u8], expected: u8) -> bool {
    let mut ok = Choice::from(1u8);
    for b in bytes {
        ok &= b.ct_eq(&expected);
    }
    bool::from(ok)
}

/// PKCS#7 padding
pub fn pkcs7_pad(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    check_block_size(block_size, MAX_BLOCK_SIZE)?;
    let k = pad_len(data.len(), block_size);
    let mut out = Vec::with_capacity(data.len() + k);
    out.extend_from_slice(data);
    out.resize(data.len() + k, k as u8);
    Ok(out)
}

/// Strip PKCS#7 padding
pub fn pkcs7_unpad(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    check_block_size(block_size, MAX_BLOCK_SIZE)?;
    let k = trailing_count("PKCS7", data, block_size)?;
    let end = data.len() - k;
    if !all_equal(&data[end..], k as u8) {
        return Err(Error::Padding {
            scheme: "PKCS7",
            reason: "padding bytes do not match the padding length",
        });
    }
    Ok(data[..end].to_vec())
}

/// Zero padding
pub fn zero_pad(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    check_block_size(block_size, MAX_BLOCK_SIZE)?;
    let k = pad_len(data.len(), block_size);
    let mut out = Vec::with_capacity(data.len() + k);
    out.extend_from_slice(data);
    out.resize(data.len() + k, 0);
    Ok(out)
}

/// Strip zero padding
///
/// Every trailing zero byte is removed, including zeros that belonged to
/// the original plaintext.
pub fn zero_unpad(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    check_block_size(block_size, MAX_BLOCK_SIZE)?;
    let end = data.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    Ok(data[..end].to_vec())
}

/// ISO/IEC 9797-1 padding method 2
///
/// The `0x80` marker is appended first and the result is zero padded, so a
/// marker that completes a block is followed by a whole block of zeros.
pub fn iso97971_pad(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    let mut marked = Vec::with_capacity(data.len() + 1);
    marked.extend_from_slice(data);
    marked.push(0x80);
    zero_pad(&marked, block_size)
}

/// Strip ISO/IEC 9797-1 method 2 padding
pub fn iso97971_unpad(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    let mut stripped = zero_unpad(data, block_size)?;
    match stripped.pop() {
        Some(0x80) => Ok(stripped),
        _ => Err(Error::Padding {
            scheme: "ISO/IEC 9797-1",
            reason: "missing 0x80 padding marker",
        }),
    }
}

/// ANSI X.923 padding
pub fn ansix923_pad(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    check_block_size(block_size, MAX_BLOCK_SIZE)?;
    let k = pad_len(data.len(), block_size);
    let mut out = Vec::with_capacity(data.len() + k);
    out.extend_from_slice(data);
    out.resize(data.len() + k - 1, 0);
    out.push(k as u8);
    Ok(out)
}

/// Strip ANSI X.923 padding
///
/// Every filler byte before the count byte must be zero.
pub fn ansix923_unpad(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    check_block_size(block_size, MAX_BLOCK_SIZE)?;
    let k = trailing_count("ANSI X.923", data, block_size)?;
    let end = data.len() - k;
    if !all_equal(&data[end..data.len() - 1], 0) {
        return Err(Error::Padding {
            scheme: "ANSI X.923",
            reason: "non-zero filler byte",
        });
    }
    Ok(data[..end].to_vec())
}

/// ISO 10126 padding
///
/// With a 256-byte block a full pad block has length 256, which is stored
/// as the byte `0x00`.
pub fn iso10126_pad(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    check_block_size(block_size, ISO10126_MAX_BLOCK_SIZE)?;
    let k = pad_len(data.len(), block_size);
    let mut out = Vec::with_capacity(data.len() + k);
    out.extend_from_slice(data);
    out.resize(data.len() + k - 1, 0);
    fill_random(&mut out[data.len()..]);
    out.push(k as u8);
    Ok(out)
}

/// Strip ISO 10126 padding
///
/// Only the final length byte is checked; the filler is random.
pub fn iso10126_unpad(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    check_block_size(block_size, ISO10126_MAX_BLOCK_SIZE)?;
    validate::block_aligned("ISO10126", data.len(), block_size)?;
    let k = match data.last() {
        Some(0) if block_size == ISO10126_MAX_BLOCK_SIZE => ISO10126_MAX_BLOCK_SIZE,
        Some(&b) => b as usize,
        None => {
            return Err(Error::Padding {
                scheme: "ISO10126",
                reason: "no padded data",
            })
        }
    };
    if k == 0 || k > block_size {
        return Err(Error::Padding {
            scheme: "ISO10126",
            reason: "invalid padding length byte",
        });
    }
    Ok(data[..data.len() - k].to_vec())
}
