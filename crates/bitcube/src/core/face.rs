//! Packed faces and face identifiers.
//!
//! A [`Face`] is nine 3-bit colors in one `u32`, facelet 0 in the top bits and
//! the low five bits always zero. A [`FaceId`] names one of the six positions
//! on the cube.

use super::color::Color;
use super::constants::{cell_shift, COLOR_MASK, FACELETS_PER_FACE, FACE_COUNT};
use super::error::{Bound, CubeError};
use crate::mask;
use core::fmt;

// ============================================================================
// FaceId
// ============================================================================

/// Position of a face on the cube.
///
/// The discriminant is the face index used throughout the crate and is also
/// the color that face shows when solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum FaceId {
    /// Top face (index 0).
    Up = 0,
    /// Left face (index 1).
    Left = 1,
    /// Front face (index 2).
    Front = 2,
    /// Right face (index 3).
    Right = 3,
    /// Back face (index 4).
    Back = 4,
    /// Bottom face (index 5).
    Down = 5,
}

impl FaceId {
    /// All faces in index order.
    pub const ALL: [Self; FACE_COUNT] = [
        Self::Up,
        Self::Left,
        Self::Front,
        Self::Right,
        Self::Back,
        Self::Down,
    ];

    /// Face index, `0..=5`.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a face by index.
    ///
    /// # Errors
    ///
    /// Returns [`CubeError::OutOfRange`] when `index > 5`.
    pub const fn from_index(index: usize) -> Result<Self, CubeError> {
        if index < FACE_COUNT {
            Ok(Self::ALL[index])
        } else {
            Err(CubeError::out_of_range(Bound::Face, index))
        }
    }

    /// Color this face carries in the solved state.
    #[inline]
    pub const fn solved_color(self) -> Color {
        Color::ALL[self as usize]
    }
}

impl TryFrom<usize> for FaceId {
    type Error = CubeError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}

// ============================================================================
// Face
// ============================================================================

/// Nine facelet colors packed into a single word.
///
/// # Example
///
/// ```
/// use bitcube::{Color, Face};
///
/// let green = Color::new(2).unwrap();
/// let face = Face::solved(green);
/// assert_eq!(face.packed_color_at(0), green);
/// assert_eq!(face.packed_color_at(8), green);
/// assert_eq!(face.bits() & 0b11111, 0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u32", into = "u32")
)]
#[repr(transparent)]
pub struct Face(u32);

/// Solved face words, indexed by color.
pub static SOLVED_FACES: [Face; FACE_COUNT] = {
    let mut table = [Face(0); FACE_COUNT];
    let mut i = 0;
    while i < FACE_COUNT {
        table[i] = Face::solved(Color::ALL[i]);
        i += 1;
    }
    table
};

impl Face {
    /// Face with all nine facelets set to `color`.
    #[inline]
    pub const fn solved(color: Color) -> Self {
        Self(color.value() as u32 * mask::CELL_LSB)
    }

    /// Pack nine colors, row-major.
    #[must_use]
    pub const fn from_colors(colors: [Color; FACELETS_PER_FACE]) -> Self {
        let mut word = 0u32;
        let mut i = 0;
        while i < FACELETS_PER_FACE {
            word |= (colors[i].value() as u32) << cell_shift(i);
            i += 1;
        }
        Self(word)
    }

    /// Adopt a raw word after checking every cell and the padding.
    ///
    /// # Errors
    ///
    /// Returns [`CubeError::Padding`] if any of the low five bits is set,
    /// otherwise [`CubeError::OutOfRange`] for the first cell holding 6 or 7.
    pub const fn from_bits(word: u32) -> Result<Self, CubeError> {
        let padding = word & !mask::FACE_BITS;
        if padding != 0 {
            return Err(CubeError::Padding { bits: padding });
        }
        let mut i = 0;
        while i < FACELETS_PER_FACE {
            let value = (word >> cell_shift(i)) & COLOR_MASK;
            if let Err(e) = Color::new(value as u8) {
                return Err(e);
            }
            i += 1;
        }
        Ok(Self(word))
    }

    /// Wrap a word produced by mask algebra on valid faces.
    #[inline(always)]
    pub(crate) const fn from_raw(word: u32) -> Self {
        Self(word)
    }

    /// The packed word.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Color at row-major facelet `index`, unchecked.
    ///
    /// The cell mask comes from [`mask::CELLS`], which holds [`mask::BASE`]
    /// shifted right by `index * 3` bits.
    /// `index` must be in `0..=8`; larger values trip a debug assertion and
    /// read an unrelated cell in release builds. Use [`Face::color_at`] for
    /// a checked read.
    #[inline]
    pub const fn packed_color_at(self, index: usize) -> Color {
        debug_assert!(index < FACELETS_PER_FACE, "facelet index out of bounds");
        let index = index % FACELETS_PER_FACE;
        Color::from_cell((self.0 & mask::CELLS[index]) >> cell_shift(index))
    }

    /// Color at row-major facelet `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CubeError::OutOfRange`] when `index > 8`.
    pub const fn color_at(self, index: usize) -> Result<Color, CubeError> {
        if index < FACELETS_PER_FACE {
            Ok(self.packed_color_at(index))
        } else {
            Err(CubeError::out_of_range(Bound::Facelet, index))
        }
    }

    /// Center facelet color. Never changed by any move.
    #[inline]
    pub const fn center(self) -> Color {
        self.packed_color_at(4)
    }

    /// All nine colors, row-major.
    #[must_use]
    pub const fn colors(self) -> [Color; FACELETS_PER_FACE] {
        let mut out = [Color::ALL[0]; FACELETS_PER_FACE];
        let mut i = 0;
        while i < FACELETS_PER_FACE {
            out[i] = self.packed_color_at(i);
            i += 1;
        }
        out
    }

    /// True when all nine facelets match the center.
    #[inline]
    pub const fn is_uniform(self) -> bool {
        self.0 == Self::solved(self.center()).0
    }

    /// The face turned a quarter clockwise.
    ///
    /// Cell `p` of the result is cell `[6, 3, 0, 7, 4, 1, 8, 5, 2][p]` of
    /// `self`. Each term moves the cells that share a travel distance and
    /// masks them into their destination slots, so padding stays zero.
    ///
    /// # Example
    ///
    /// ```
    /// use bitcube::{Color, Face};
    ///
    /// let c = |v| Color::new(v).unwrap();
    /// let face = Face::from_colors([c(0), c(1), c(2), c(3), c(4), c(5), c(0), c(1), c(2)]);
    /// let turned = face.rotate_clockwise();
    /// assert_eq!(turned.packed_color_at(0), c(0)); // from cell 6
    /// assert_eq!(turned.packed_color_at(1), c(3)); // from cell 3
    /// assert_eq!(turned.packed_color_at(4), c(4)); // center stays
    ///
    /// let back = turned.rotate_clockwise().rotate_clockwise().rotate_clockwise();
    /// assert_eq!(back, face);
    /// ```
    #[inline]
    #[must_use]
    pub const fn rotate_clockwise(self) -> Self {
        let w = self.0;
        Self(
            ((w << 18) & mask::ROT_L18)
                | ((w << 12) & mask::ROT_L12)
                | ((w << 6) & mask::ROT_L6)
                | (w & mask::ROT_FIXED)
                | ((w >> 6) & mask::ROT_R6)
                | ((w >> 12) & mask::ROT_R12)
                | ((w >> 18) & mask::ROT_R18),
        )
    }
}

impl TryFrom<u32> for Face {
    type Error = CubeError;

    fn try_from(word: u32) -> Result<Self, Self::Error> {
        Self::from_bits(word)
    }
}

impl From<Face> for u32 {
    fn from(face: Face) -> Self {
        face.bits()
    }
}

/// Binary word grouped by cell, padding last: `Face(000 001 ... 010 00000)`.
impl fmt::Debug for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Face(")?;
        for i in 0..FACELETS_PER_FACE {
            write!(f, "{:03b} ", (self.0 >> cell_shift(i)) & COLOR_MASK)?;
        }
        write!(f, "{:05b})", self.0 & !mask::FACE_BITS)
    }
}
