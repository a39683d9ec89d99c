//! Per-context configuration

use algorithms::padding::PaddingScheme;

use crate::mode::Mode;

/// Mode and padding for a [`Crypt`](crate::Crypt) context
///
/// The padding is only honoured for [`Mode::Cbc`] and [`Mode::Ecb`]; every
/// other mode, and every stream cipher, runs without padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Options {
    /// Mode of operation
    pub mode: Mode,
    /// Padding scheme for the whole-block modes
    pub padding: PaddingScheme,
}

impl Options {
    /// Options with the given mode and padding
    pub fn new(mode: Mode, padding: PaddingScheme) -> Self {
        Self { mode, padding }
    }

    /// Replace the mode
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Replace the padding scheme
    pub fn with_padding(mut self, padding: PaddingScheme) -> Self {
        self.padding = padding;
        self
    }

    /// Padding actually applied under these options
    pub fn effective_padding(&self) -> PaddingScheme {
        if self.mode.requires_padding() {
            self.padding
        } else {
            PaddingScheme::NoPadding
        }
    }
}
