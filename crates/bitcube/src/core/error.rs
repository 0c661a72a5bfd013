//! Error type for checked accessors and label parsing.

use core::fmt;

/// Errors reported by the checked parts of the API.
///
/// Move application and construction from colors are total and never
/// produce one of these. Only inspection (`color_at`), adopting raw words,
/// color construction and move-label parsing can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CubeError {
    /// A face, facelet or color value fell outside its domain.
    OutOfRange {
        /// Which argument was out of range.
        what: Bound,
        /// The offending value.
        value: usize,
    },
    /// A raw face word with bits set in the five padding bits.
    Padding {
        /// The padding bits that were set.
        bits: u32,
    },
    /// A move label that is not one of the six base quarter turns.
    UnknownMove,
}

/// The domain a [`CubeError::OutOfRange`] value violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// Face index, valid range `0..=5`.
    Face,
    /// Facelet index, valid range `0..=8`.
    Facelet,
    /// Color value, valid range `0..=5`.
    Color,
}

impl Bound {
    /// Largest valid value for this domain.
    #[must_use]
    pub const fn max(self) -> usize {
        match self {
            Self::Face | Self::Color => 5,
            Self::Facelet => 8,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Face => "face",
            Self::Facelet => "facelet",
            Self::Color => "color",
        }
    }
}

impl CubeError {
    pub(crate) const fn out_of_range(what: Bound, value: usize) -> Self {
        Self::OutOfRange { what, value }
    }
}

impl fmt::Display for CubeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { what, value } => write!(
                f,
                "{} index {} out of range (expected 0..={})",
                what.name(),
                value,
                what.max()
            ),
            Self::Padding { bits } => {
                write!(f, "face word has padding bits {bits:#07b} set (must be zero)")
            }
            Self::UnknownMove => {
                write!(f, "unknown move label (expected one of U1 D1 R1 L1 F1 B1)")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CubeError {}
