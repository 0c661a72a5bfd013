//! The six clockwise quarter turns.
//!
//! Every move has the same shape: rotate the turning face with
//! [`Face::rotate_clockwise`], then carry one edge strip around the four
//! neighbouring faces. A strip is lifted out of its source word with a mask
//! (or one of the reflows in [`crate::mask`] when it changes orientation)
//! and spliced into the next face with [`crate::mask::replace_strip`]. No
//! move loops over cells or decodes a face.
//!
//! Strip cycles, clockwise as seen facing the turned face:
//!
//! | Move | Cycle |
//! |------|-------|
//! | U | F top → L top → B top → R top → F top |
//! | D | F bottom → R bottom → B bottom → L bottom → F bottom |
//! | R | F right → U right → B left (reversed) → D right (reversed) → F right |
//! | L | U left → F left → D left → B right (reversed) → U left (reversed) |
//! | F | U bottom → R left → D top → L right → U bottom |
//! | B | U top → L left → D bottom → R right → U top |
//!
//! # Example
//!
//! ```
//! use bitcube::{CubeState, Move};
//!
//! let mut cube = CubeState::new();
//! for m in Move::ALL {
//!     for _ in 0..4 {
//!         cube.apply(m);
//!     }
//! }
//! assert!(cube.is_solved());
//! assert_eq!(Move::Front.label(), "F1");
//! ```

use crate::core::error::CubeError;
use crate::core::face::{Face, FaceId};
use crate::mask::{
    bottom_row_to_left_col, bottom_row_to_right_col, left_col_to_bottom_row,
    left_col_to_right_col, left_col_to_top_row, replace_strip, right_col_to_bottom_row,
    right_col_to_left_col, right_col_to_top_row, top_row_to_left_col, top_row_to_right_col,
    BOTTOM_ROW, LEFT_COL, RIGHT_COL, TOP_ROW,
};
use crate::state::CubeState;
use core::fmt;
use core::str::FromStr;

// ============================================================================
// Move identifiers
// ============================================================================

/// One of the six clockwise quarter turns.
///
/// Discriminants follow the label order `U1 D1 R1 L1 F1 B1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Move {
    /// Turn the top face.
    #[cfg_attr(feature = "serde", serde(rename = "U1"))]
    Up = 0,
    /// Turn the bottom face.
    #[cfg_attr(feature = "serde", serde(rename = "D1"))]
    Down = 1,
    /// Turn the right face.
    #[cfg_attr(feature = "serde", serde(rename = "R1"))]
    Right = 2,
    /// Turn the left face.
    #[cfg_attr(feature = "serde", serde(rename = "L1"))]
    Left = 3,
    /// Turn the front face.
    #[cfg_attr(feature = "serde", serde(rename = "F1"))]
    Front = 4,
    /// Turn the back face.
    #[cfg_attr(feature = "serde", serde(rename = "B1"))]
    Back = 5,
}

const LABELS: [&str; 6] = ["U1", "D1", "R1", "L1", "F1", "B1"];

impl Move {
    /// All six moves in label order.
    pub const ALL: [Self; 6] = [
        Self::Up,
        Self::Down,
        Self::Right,
        Self::Left,
        Self::Front,
        Self::Back,
    ];

    /// Stable label for logs and output: `"U1"`, `"D1"`, `"R1"`, `"L1"`,
    /// `"F1"` or `"B1"`.
    #[inline]
    pub const fn label(self) -> &'static str {
        LABELS[self as usize]
    }

    /// The face this move rotates.
    pub const fn face(self) -> FaceId {
        match self {
            Self::Up => FaceId::Up,
            Self::Down => FaceId::Down,
            Self::Right => FaceId::Right,
            Self::Left => FaceId::Left,
            Self::Front => FaceId::Front,
            Self::Back => FaceId::Back,
        }
    }

    /// Look up a move by its position in [`Move::ALL`].
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::ALL.len() {
            Some(Self::ALL[index])
        } else {
            None
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts the six labels (`"U1"`..`"B1"`) and the bare face letters
/// (`"U"`, `"D"`, `"R"`, `"L"`, `"F"`, `"B"`).
impl FromStr for Move {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let m = match s {
            "U1" | "U" => Self::Up,
            "D1" | "D" => Self::Down,
            "R1" | "R" => Self::Right,
            "L1" | "L" => Self::Left,
            "F1" | "F" => Self::Front,
            "B1" | "B" => Self::Back,
            _ => return Err(CubeError::UnknownMove),
        };
        Ok(m)
    }
}

// ============================================================================
// Move application
// ============================================================================

impl CubeState {
    /// Apply one quarter turn in place.
    #[inline]
    pub fn apply(&mut self, m: Move) {
        let [u, l, f, r, b, d] = self.faces.map(Face::bits);
        let next = match m {
            Move::Up => turn_up(u, l, f, r, b, d),
            Move::Down => turn_down(u, l, f, r, b, d),
            Move::Right => turn_right(u, l, f, r, b, d),
            Move::Left => turn_left(u, l, f, r, b, d),
            Move::Front => turn_front(u, l, f, r, b, d),
            Move::Back => turn_back(u, l, f, r, b, d),
        };
        self.faces = next.map(Face::from_raw);
    }

    /// The state after one quarter turn, leaving `self` untouched.
    #[inline]
    #[must_use]
    pub fn turned(mut self, m: Move) -> Self {
        self.apply(m);
        self
    }

    /// Apply a sequence of moves in order.
    pub fn apply_all<I>(&mut self, moves: I)
    where
        I: IntoIterator<Item = Move>,
    {
        for m in moves {
            self.apply(m);
        }
    }
}

type Words = [u32; 6];

#[inline(always)]
const fn spin(w: u32) -> u32 {
    Face::from_raw(w).rotate_clockwise().bits()
}

#[inline(always)]
const fn turn_up(u: u32, l: u32, f: u32, r: u32, b: u32, d: u32) -> Words {
    [
        spin(u),
        replace_strip(l, TOP_ROW, f & TOP_ROW),
        replace_strip(f, TOP_ROW, r & TOP_ROW),
        replace_strip(r, TOP_ROW, b & TOP_ROW),
        replace_strip(b, TOP_ROW, l & TOP_ROW),
        d,
    ]
}

#[inline(always)]
const fn turn_down(u: u32, l: u32, f: u32, r: u32, b: u32, d: u32) -> Words {
    [
        u,
        replace_strip(l, BOTTOM_ROW, b & BOTTOM_ROW),
        replace_strip(f, BOTTOM_ROW, l & BOTTOM_ROW),
        replace_strip(r, BOTTOM_ROW, f & BOTTOM_ROW),
        replace_strip(b, BOTTOM_ROW, r & BOTTOM_ROW),
        spin(d),
    ]
}

#[inline(always)]
const fn turn_right(u: u32, l: u32, f: u32, r: u32, b: u32, d: u32) -> Words {
    [
        replace_strip(u, RIGHT_COL, f & RIGHT_COL),
        l,
        replace_strip(f, RIGHT_COL, d & RIGHT_COL),
        spin(r),
        replace_strip(b, LEFT_COL, right_col_to_left_col(u)),
        replace_strip(d, RIGHT_COL, left_col_to_right_col(b)),
    ]
}

#[inline(always)]
const fn turn_left(u: u32, l: u32, f: u32, r: u32, b: u32, d: u32) -> Words {
    [
        replace_strip(u, LEFT_COL, right_col_to_left_col(b)),
        spin(l),
        replace_strip(f, LEFT_COL, u & LEFT_COL),
        r,
        replace_strip(b, RIGHT_COL, left_col_to_right_col(d)),
        replace_strip(d, LEFT_COL, f & LEFT_COL),
    ]
}

#[inline(always)]
const fn turn_front(u: u32, l: u32, f: u32, r: u32, b: u32, d: u32) -> Words {
    [
        replace_strip(u, BOTTOM_ROW, right_col_to_bottom_row(l)),
        replace_strip(l, RIGHT_COL, top_row_to_right_col(d)),
        spin(f),
        replace_strip(r, LEFT_COL, bottom_row_to_left_col(u)),
        b,
        replace_strip(d, TOP_ROW, left_col_to_top_row(r)),
    ]
}

#[inline(always)]
const fn turn_back(u: u32, l: u32, f: u32, r: u32, b: u32, d: u32) -> Words {
    [
        replace_strip(u, TOP_ROW, right_col_to_top_row(r)),
        replace_strip(l, LEFT_COL, top_row_to_left_col(u)),
        f,
        replace_strip(r, RIGHT_COL, bottom_row_to_right_col(d)),
        spin(b),
        replace_strip(d, BOTTOM_ROW, left_col_to_bottom_row(l)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::Color;
    use crate::core::face::SOLVED_FACES;

    fn colors(cube: &CubeState, id: FaceId) -> [u8; 9] {
        cube.face(id).colors().map(Color::value)
    }

    #[test]
    fn test_each_move_has_order_four() {
        for m in Move::ALL {
            let mut cube = CubeState::new();
            cube.apply(m);
            assert!(!cube.is_solved(), "{} left the cube solved", m);
            for _ in 0..3 {
                cube.apply(m);
            }
            assert!(cube.is_solved(), "{} x4 did not return to solved", m);
        }
    }

    #[test]
    fn test_up_from_solved() {
        let cube = CubeState::new().turned(Move::Up);
        assert_eq!(colors(&cube, FaceId::Front), [3, 3, 3, 2, 2, 2, 2, 2, 2]);
        assert_eq!(colors(&cube, FaceId::Left), [2, 2, 2, 1, 1, 1, 1, 1, 1]);
        assert_eq!(colors(&cube, FaceId::Back), [1, 1, 1, 4, 4, 4, 4, 4, 4]);
        assert_eq!(colors(&cube, FaceId::Right), [4, 4, 4, 3, 3, 3, 3, 3, 3]);
        assert_eq!(cube.face(FaceId::Up), SOLVED_FACES[0]);
        assert_eq!(cube.face(FaceId::Down), SOLVED_FACES[5]);
    }

    #[test]
    fn test_down_from_solved() {
        let cube = CubeState::new().turned(Move::Down);
        assert_eq!(colors(&cube, FaceId::Right), [3, 3, 3, 3, 3, 3, 2, 2, 2]);
        assert_eq!(colors(&cube, FaceId::Front), [2, 2, 2, 2, 2, 2, 1, 1, 1]);
        assert_eq!(colors(&cube, FaceId::Left), [1, 1, 1, 1, 1, 1, 4, 4, 4]);
        assert_eq!(colors(&cube, FaceId::Back), [4, 4, 4, 4, 4, 4, 3, 3, 3]);
    }

    #[test]
    fn test_right_from_solved() {
        let cube = CubeState::new().turned(Move::Right);
        assert_eq!(colors(&cube, FaceId::Up), [0, 0, 2, 0, 0, 2, 0, 0, 2]);
        assert_eq!(colors(&cube, FaceId::Back), [0, 4, 4, 0, 4, 4, 0, 4, 4]);
        assert_eq!(colors(&cube, FaceId::Down), [5, 5, 4, 5, 5, 4, 5, 5, 4]);
        assert_eq!(colors(&cube, FaceId::Front), [2, 2, 5, 2, 2, 5, 2, 2, 5]);
        assert_eq!(cube.face(FaceId::Left), SOLVED_FACES[1]);
    }

    #[test]
    fn test_left_from_solved() {
        let cube = CubeState::new().turned(Move::Left);
        assert_eq!(colors(&cube, FaceId::Front), [0, 2, 2, 0, 2, 2, 0, 2, 2]);
        assert_eq!(colors(&cube, FaceId::Down), [2, 5, 5, 2, 5, 5, 2, 5, 5]);
        assert_eq!(colors(&cube, FaceId::Back), [4, 4, 5, 4, 4, 5, 4, 4, 5]);
        assert_eq!(colors(&cube, FaceId::Up), [4, 0, 0, 4, 0, 0, 4, 0, 0]);
    }

    #[test]
    fn test_front_from_solved() {
        let cube = CubeState::new().turned(Move::Front);
        assert_eq!(cube.face(FaceId::Front), SOLVED_FACES[2].rotate_clockwise());
        assert_eq!(colors(&cube, FaceId::Up), [0, 0, 0, 0, 0, 0, 1, 1, 1]);
        assert_eq!(colors(&cube, FaceId::Right), [0, 3, 3, 0, 3, 3, 0, 3, 3]);
        assert_eq!(colors(&cube, FaceId::Down), [3, 3, 3, 5, 5, 5, 5, 5, 5]);
        assert_eq!(colors(&cube, FaceId::Left), [1, 1, 5, 1, 1, 5, 1, 1, 5]);
        assert_eq!(cube.face(FaceId::Back), SOLVED_FACES[4]);
    }

    #[test]
    fn test_back_from_solved() {
        let cube = CubeState::new().turned(Move::Back);
        assert_eq!(colors(&cube, FaceId::Up), [3, 3, 3, 0, 0, 0, 0, 0, 0]);
        assert_eq!(colors(&cube, FaceId::Left), [0, 1, 1, 0, 1, 1, 0, 1, 1]);
        assert_eq!(colors(&cube, FaceId::Down), [5, 5, 5, 5, 5, 5, 1, 1, 1]);
        assert_eq!(colors(&cube, FaceId::Right), [3, 3, 5, 3, 3, 5, 3, 3, 5]);
    }

    #[test]
    fn test_turned_leaves_receiver_untouched() {
        let cube = CubeState::new();
        let moved = cube.turned(Move::Back);
        assert!(cube.is_solved());
        assert!(!moved.is_solved());
    }

    #[test]
    fn test_labels_round_trip() {
        for m in Move::ALL {
            assert_eq!(m.label().parse::<Move>(), Ok(m));
            assert_eq!(Move::from_index(m as usize), Some(m));
        }
        assert_eq!("F".parse::<Move>(), Ok(Move::Front));
        assert_eq!("U2".parse::<Move>(), Err(CubeError::UnknownMove));
        assert_eq!("".parse::<Move>(), Err(CubeError::UnknownMove));
        assert_eq!(Move::from_index(6), None);
    }

    #[test]
    fn test_move_face_matches_rotated_face() {
        for m in Move::ALL {
            let cube = CubeState::new().turned(m);
            let id = m.face();
            assert_eq!(cube.face(id), SOLVED_FACES[id.index()].rotate_clockwise());
        }
    }
}
