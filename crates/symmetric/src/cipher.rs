//! The cipher engine
//!
//! A [`Crypt`] context binds one algorithm, mode and padding scheme to a
//! validated key and an optional IV. Contexts are immutable: every call
//! that needs a fresh key derives it locally, so a context may be shared
//! between threads without locking.

use core::fmt;

use algorithms::padding::PaddingScheme;
use params::utils::kdf::SALT_HEADER_SIZE;
use tracing::{debug, trace};
use zeroize::Zeroizing;

use crate::algorithm::Algorithm;
use crate::error::{validate, Error, Result, SymmetricResultExt};
use crate::key;
use crate::mode::Mode;
use crate::options::Options;
use crate::primitive::Primitive;
use crate::salt::{generate_header, parse_header, SaltHeader};

/// A keyed cipher context
///
/// Without an IV, each [`encrypt`](Crypt::encrypt) draws a new salt,
/// derives key and IV from the context key with `EVP_BytesToKey`, and
/// prefixes the output with the 16-byte salt header. With an IV the
/// context key and IV are used directly and no header is written.
pub struct Crypt {
    algorithm: Algorithm,
    mode: Mode,
    padding: PaddingScheme,
    key: Zeroizing<Vec<u8>>,
    iv: Option<Zeroizing<Vec<u8>>>,
    primitive: Primitive,
}

impl Crypt {
    /// Build a context
    ///
    /// Over-long keys are truncated to the largest length the algorithm
    /// accepts. Fails on short keys, a wrong IV length, or a mode the
    /// algorithm cannot run under.
    pub fn new(
        algorithm: Algorithm,
        key: &[u8],
        iv: Option<&[u8]>,
        options: Options,
    ) -> Result<Self> {
        let key = key::normalize(algorithm, key)?;
        let mode = options.mode;
        key::check_combination(algorithm, mode)?;
        key::check_nonce(algorithm, mode, iv)?;

        let padding = if algorithm.is_stream() {
            PaddingScheme::NoPadding
        } else {
            options.effective_padding()
        };
        let primitive = Primitive::bind(algorithm, &key)?;

        debug!(
            algorithm = algorithm.name(),
            mode = mode.name(),
            padding = padding.name(),
            key_len = key.len(),
            has_iv = iv.is_some(),
            "created cipher context"
        );

        Ok(Self {
            algorithm,
            mode,
            padding,
            key,
            iv: iv.map(|iv| Zeroizing::new(iv.to_vec())),
            primitive,
        })
    }

    /// The bound algorithm
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The mode of operation
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The padding scheme actually applied
    pub fn padding(&self) -> PaddingScheme {
        self.padding
    }

    /// Length of the key after normalisation
    pub fn key_len(&self) -> usize {
        self.key.len()
    }

    /// True when the context carries a caller-supplied IV or nonce
    pub fn has_iv(&self) -> bool {
        self.iv.is_some()
    }

    /// Encrypt `plaintext`
    ///
    /// The output is `header || ciphertext` when the context has no IV and
    /// the algorithm/mode pair uses one; otherwise it is the bare ciphertext.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let context = self.algorithm.context();
        let data = self.pad(plaintext)?;
        trace!(
            algorithm = self.algorithm.name(),
            mode = self.mode.name(),
            len = data.len(),
            "encrypt"
        );

        if self.algorithm.uses_salt_header(self.mode) && self.iv.is_none() {
            let (header, material) = generate_header(
                &self.key,
                self.algorithm.derivation_block_size(),
                self.algorithm.derivation_mode(self.mode),
                self.algorithm.derived_key_size(),
            )?;
            let primitive = Primitive::bind(self.algorithm, &material.key)?;
            let body = primitive
                .seal(self.mode, &material.iv, &data)
                .map_primitive_err_in(context)?;

            let mut out = Vec::with_capacity(SALT_HEADER_SIZE + body.len());
            out.extend_from_slice(&header.to_bytes());
            out.extend_from_slice(&body);
            return Ok(out);
        }

        self.primitive
            .seal(self.mode, self.iv_bytes(), &data)
            .map_primitive_err_in(context)
    }

    /// Decrypt `ciphertext`
    ///
    /// A leading salt header is honoured whenever the algorithm/mode pair
    /// can produce one, and takes precedence over the context IV.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let context = self.algorithm.context();
        trace!(
            algorithm = self.algorithm.name(),
            mode = self.mode.name(),
            len = ciphertext.len(),
            "decrypt"
        );

        let header = if self.algorithm.uses_salt_header(self.mode) {
            SaltHeader::detect(ciphertext)
        } else {
            None
        };

        let data = match header {
            Some(header) => {
                let material = parse_header(
                    &header,
                    &self.key,
                    self.algorithm.derivation_block_size(),
                    self.algorithm.derivation_mode(self.mode),
                    self.algorithm.derived_key_size(),
                )?;
                let body = &ciphertext[SALT_HEADER_SIZE..];
                self.check_aligned(body)?;
                Primitive::bind(self.algorithm, &material.key)?
                    .open(self.mode, &material.iv, body)
                    .map_primitive_err_in(context)?
            }
            None => {
                self.check_iv_present()?;
                self.check_aligned(ciphertext)?;
                self.primitive
                    .open(self.mode, self.iv_bytes(), ciphertext)
                    .map_primitive_err_in(context)?
            }
        };

        self.unpad(data)
    }

    fn iv_bytes(&self) -> &[u8] {
        self.iv.as_deref().map(Vec::as_slice).unwrap_or(&[])
    }

    fn pad(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        match self.algorithm.block_size() {
            Some(bs) if self.padding != PaddingScheme::NoPadding => self
                .padding
                .pad(plaintext, bs)
                .map_primitive_err_in(self.algorithm.context()),
            _ => Ok(plaintext.to_vec()),
        }
    }

    fn unpad(&self, data: Vec<u8>) -> Result<Vec<u8>> {
        match self.algorithm.block_size() {
            Some(bs) if self.padding != PaddingScheme::NoPadding => self
                .padding
                .unpad(&data, bs)
                .map_primitive_err_in(self.algorithm.context()),
            _ => Ok(data),
        }
    }

    // Without a header the context IV is the only source of one
    fn check_iv_present(&self) -> Result<()> {
        if self.iv.is_some() || !self.algorithm.uses_salt_header(self.mode) {
            return Ok(());
        }
        let expected = self
            .algorithm
            .iv_size(self.mode)
            .unwrap_or_else(|| self.algorithm.derivation_block_size());
        validate::nonce_length(self.algorithm.context(), 0, expected)
    }

    // The whole-block modes cannot take a partial final block
    fn check_aligned(&self, data: &[u8]) -> Result<()> {
        match self.algorithm.block_size() {
            Some(bs) if self.mode.requires_padding() && data.len() % bs != 0 => {
                Err(Error::Padding {
                    context: self.algorithm.context(),
                    reason: "ciphertext length is not a multiple of the block size",
                })
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Debug for Crypt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Crypt")
            .field("algorithm", &self.algorithm)
            .field("mode", &self.mode)
            .field("padding", &self.padding)
            .field("key", &"<redacted>")
            .field("iv", &self.iv.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
