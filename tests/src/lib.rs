//! Shared fixtures for the saltcrypt integration and property tests

use saltcrypt_symmetric::{Algorithm, Mode, Options, PaddingScheme};

/// One supported algorithm/mode/padding triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Combination {
    pub algorithm: Algorithm,
    pub mode: Mode,
    pub padding: PaddingScheme,
}

impl Combination {
    pub fn options(&self) -> Options {
        Options::new(self.mode, self.padding)
    }

    /// A full-length key for the algorithm
    pub fn key(&self) -> Vec<u8> {
        key_for(self.algorithm)
    }

    /// An explicit IV or nonce of the length the pair requires
    pub fn iv(&self) -> Option<Vec<u8>> {
        iv_for(self.algorithm, self.mode)
    }

    /// Adjust `msg` to something this combination can reproduce exactly
    ///
    /// Without padding the whole-block modes need aligned input, and zero
    /// padding cannot restore trailing zero bytes.
    pub fn admissible(&self, mut msg: Vec<u8>) -> Vec<u8> {
        let Some(bs) = self.algorithm.block_size() else {
            return msg;
        };
        if !self.mode.requires_padding() {
            return msg;
        }
        match self.padding {
            PaddingScheme::NoPadding => {
                let aligned = msg.len() - msg.len() % bs;
                msg.truncate(aligned);
            }
            PaddingScheme::ZeroPadding => {
                while msg.last() == Some(&0) {
                    msg.pop();
                }
            }
            _ => {}
        }
        msg
    }
}

/// Every combination the engine accepts
///
/// Padding only varies for CBC and ECB; the other modes and the stream
/// ciphers run unpadded whatever scheme is requested.
pub fn combinations() -> Vec<Combination> {
    let mut out = Vec::new();
    for algorithm in Algorithm::ALL {
        for mode in Mode::ALL {
            if !algorithm.supports(mode) {
                continue;
            }
            let paddings: &[PaddingScheme] = if algorithm.is_stream() || !mode.requires_padding() {
                &[PaddingScheme::NoPadding]
            } else {
                &PaddingScheme::ALL
            };
            for &padding in paddings {
                out.push(Combination {
                    algorithm,
                    mode,
                    padding,
                });
            }
        }
    }
    out
}

/// A deterministic key of the preferred length
pub fn key_for(algorithm: Algorithm) -> Vec<u8> {
    let len = match algorithm {
        Algorithm::Aes | Algorithm::ChaCha20 => 32,
        Algorithm::Des => 8,
        Algorithm::TripleDes => 24,
        Algorithm::Blowfish => 16,
        Algorithm::Rc4 => 16,
    };
    (0..len as u8).map(|i| i.wrapping_mul(31).wrapping_add(7)).collect()
}

/// An explicit IV, or `None` where the pair takes none
pub fn iv_for(algorithm: Algorithm, mode: Mode) -> Option<Vec<u8>> {
    let len = match algorithm {
        Algorithm::ChaCha20 => 12,
        Algorithm::Rc4 => return None,
        _ => algorithm.iv_size(mode)?,
    };
    Some((0..len as u8).map(|i| 0xa0 ^ i).collect())
}
