//! Facelet colors.

use super::constants::COLOR_COUNT;
use super::error::{Bound, CubeError};
use core::fmt;

/// One of the six facelet colors, `0..=5`.
///
/// Colors carry no name: color `i` is simply the color of face `i` in the
/// solved state. [`Color::letter`] gives a display letter for rendering.
///
/// # Example
///
/// ```
/// use bitcube::Color;
///
/// let c = Color::new(2).unwrap();
/// assert_eq!(c.value(), 2);
/// assert!(Color::new(6).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
#[repr(transparent)]
pub struct Color(u8);

/// Display letters, indexed by color value.
const LETTERS: [char; COLOR_COUNT] = ['W', 'O', 'G', 'R', 'B', 'Y'];

impl Color {
    /// All six colors in value order.
    pub const ALL: [Self; COLOR_COUNT] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
    ];

    /// Create a color, rejecting values above 5.
    ///
    /// # Errors
    ///
    /// Returns [`CubeError::OutOfRange`] when `value > 5`.
    pub const fn new(value: u8) -> Result<Self, CubeError> {
        if (value as usize) < COLOR_COUNT {
            Ok(Self(value))
        } else {
            Err(CubeError::out_of_range(Bound::Color, value as usize))
        }
    }

    /// Wrap a value already known to be in range.
    ///
    /// Used when decoding cells of a face whose validity is an invariant.
    #[inline]
    pub(crate) const fn from_cell(value: u32) -> Self {
        debug_assert!((value as usize) < COLOR_COUNT, "cell holds an invalid color");
        Self(value as u8)
    }

    /// The numeric color value.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Value widened for index arithmetic.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Letter used by the text renderer.
    #[inline]
    pub const fn letter(self) -> char {
        LETTERS[self.0 as usize]
    }
}

impl TryFrom<u8> for Color {
    type Error = CubeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Color> for u8 {
    fn from(c: Color) -> Self {
        c.value()
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
