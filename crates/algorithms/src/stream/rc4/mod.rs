//! RC4 stream cipher
//!
//! Variable key length from 1 to 256 bytes. The key schedule and output
//! generator follow the original ARC4 description; there is no nonce and no
//! keystream dropping, so output matches every other plain RC4
//! implementation.

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::KeyStream;
use crate::error::{Error, Result};

pub use params::utils::symmetric::RC4_MAX_KEY_SIZE;

/// RC4 keystream state
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Rc4 {
    state: [u8; 256],
    i: u8,
    j: u8,
}

impl Rc4 {
    /// Run the key schedule over `key`
    pub fn new(key: &[u8]) -> Result<Self> {
        if key.is_empty() || key.len() > RC4_MAX_KEY_SIZE {
            return Err(Error::KeyLength {
                algorithm: "RC4",
                actual: key.len(),
            });
        }

        let mut state = [0u8; 256];
        for (i, s) in state.iter_mut().enumerate() {
            *s = i as u8;
        }
        let mut j = 0u8;
        for i in 0..256 {
            j = j.wrapping_add(state[i]).wrapping_add(key[i % key.len()]);
            state.swap(i, j as usize);
        }

        Ok(Self { state, i: 0, j: 0 })
    }

    fn next_byte(&mut self) -> u8 {
        self.i = self.i.wrapping_add(1);
        self.j = self.j.wrapping_add(self.state[self.i as usize]);
        self.state.swap(self.i as usize, self.j as usize);
        let idx = self.state[self.i as usize].wrapping_add(self.state[self.j as usize]);
        self.state[idx as usize]
    }
}

impl KeyStream for Rc4 {
    const NAME: &'static str = "RC4";

    fn apply_keystream(&mut self, data: &mut [u8]) -> Result<()> {
        for b in data.iter_mut() {
            *b ^= self.next_byte();
        }
        Ok(())
    }
}
