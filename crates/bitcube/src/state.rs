//! The six-word cube state.
//!
//! [`CubeState`] is a plain `Copy` value holding one packed [`Face`] per face
//! position. It has no interior mutability and never allocates; copies are
//! fully independent. Moves live in [`crate::moves`].
//!
//! # Example
//!
//! ```
//! use bitcube::{CubeState, FaceId, Move};
//!
//! let mut cube = CubeState::new();
//! assert!(cube.is_solved());
//!
//! cube.apply(Move::Up);
//! assert!(!cube.is_solved());
//! assert_eq!(cube.color_at(0, 4).unwrap().value(), 0);
//!
//! for _ in 0..3 {
//!     cube.apply(Move::Up);
//! }
//! assert!(cube.same_as(&CubeState::SOLVED));
//! ```

use crate::core::color::Color;
use crate::core::constants::{COLOR_COUNT, FACE_COUNT};
use crate::core::error::CubeError;
use crate::core::face::{Face, FaceId, SOLVED_FACES};

/// Full cube: six packed faces indexed by [`FaceId`].
///
/// Face order is `Up, Left, Front, Right, Back, Down`. Equality compares all
/// six words bit for bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubeState {
    pub(crate) faces: [Face; FACE_COUNT],
}

impl CubeState {
    /// The solved cube: face `i` is uniformly color `i`.
    pub const SOLVED: Self = Self {
        faces: [
            Face::solved(Color::ALL[0]),
            Face::solved(Color::ALL[1]),
            Face::solved(Color::ALL[2]),
            Face::solved(Color::ALL[3]),
            Face::solved(Color::ALL[4]),
            Face::solved(Color::ALL[5]),
        ],
    };

    /// A solved cube.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::SOLVED
    }

    /// Build a state from six faces in index order.
    ///
    /// The faces are taken as given: no reachability check is made.
    #[must_use]
    pub const fn from_faces(faces: [Face; FACE_COUNT]) -> Self {
        Self { faces }
    }

    /// The six faces in index order.
    #[inline]
    pub const fn faces(&self) -> [Face; FACE_COUNT] {
        self.faces
    }

    /// One face.
    #[inline]
    pub const fn face(&self, id: FaceId) -> Face {
        self.faces[id.index()]
    }

    /// Bitwise comparison of all six words.
    #[inline]
    pub const fn same_as(&self, other: &Self) -> bool {
        let mut i = 0;
        while i < FACE_COUNT {
            if self.faces[i].bits() != other.faces[i].bits() {
                return false;
            }
            i += 1;
        }
        true
    }

    /// True exactly when the state is bit-identical to [`CubeState::SOLVED`].
    #[inline]
    pub const fn is_solved(&self) -> bool {
        self.same_as(&Self::SOLVED)
    }

    /// Color of facelet `index` on face `face`.
    ///
    /// # Errors
    ///
    /// Returns [`CubeError::OutOfRange`] when `face > 5` or `index > 8`.
    ///
    /// # Example
    ///
    /// ```
    /// use bitcube::CubeState;
    ///
    /// let cube = CubeState::new();
    /// assert_eq!(cube.color_at(5, 0).unwrap().value(), 5);
    /// assert!(cube.color_at(6, 0).is_err());
    /// assert!(cube.color_at(0, 9).is_err());
    /// ```
    pub const fn color_at(&self, face: usize, index: usize) -> Result<Color, CubeError> {
        match FaceId::from_index(face) {
            Ok(id) => self.face(id).color_at(index),
            Err(e) => Err(e),
        }
    }

    /// True when every center still shows its face's solved color.
    #[inline]
    pub const fn centers_intact(&self) -> bool {
        let mut i = 0;
        while i < FACE_COUNT {
            if self.faces[i].center().value() != SOLVED_FACES[i].center().value() {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Number of facelets showing each color across all 54 positions.
    ///
    /// Every reachable state has exactly nine of each.
    #[must_use]
    pub fn color_counts(&self) -> [u8; COLOR_COUNT] {
        let mut counts = [0u8; COLOR_COUNT];
        for face in self.faces {
            for color in face.colors() {
                counts[color.index()] += 1;
            }
        }
        counts
    }
}

impl Default for CubeState {
    fn default() -> Self {
        Self::SOLVED
    }
}
