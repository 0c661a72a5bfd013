//! bitcube - a 3x3x3 cube in six 32-bit words
//!
//! The cube's 54 facelets are packed three bits each into six `u32` words,
//! one per face, and the six clockwise quarter turns are pure mask-and-shift
//! transforms on those words. No move allocates, loops over cells, or
//! unpacks a face into an array.
//!
//! # Encoding
//!
//! ```text
//! bit   31..29 28..26 25..23 22..20 19..17 16..14 13..11 10..8  7..5   4..0
//! cell    0      1      2      3      4      5      6      7      8   padding
//! ```
//!
//! Faces are indexed `0 = Up, 1 = Left, 2 = Front, 3 = Right, 4 = Back,
//! 5 = Down`; face `i` shows color `i` when solved.
//!
//! # Layers
//!
//! | Layer | Module | Contents |
//! |-------|--------|----------|
//! | Encoding | [`crate::core`] | [`Color`], [`Face`], [`FaceId`], layout constants |
//! | Masks | [`mask`] | cell, row and column masks; strip reflows |
//! | State & moves | [`state`], [`moves`] | [`CubeState`], [`Move`] |
//!
//! # Example
//!
//! ```
//! use bitcube::{CubeState, Move};
//!
//! let mut cube = CubeState::new();
//! cube.apply_all([Move::Right, Move::Up]);
//! assert!(!cube.is_solved());
//! assert_eq!(cube.color_counts(), [9; 6]);
//!
//! // Centers never move.
//! for face in 0..6 {
//!     assert_eq!(cube.color_at(face, 4).unwrap().index(), face);
//! }
//! ```
//!
//! # Threading
//!
//! [`CubeState`] is a `Copy` value with no interior mutability. Callers that
//! share one instance across threads must guard it themselves; a reader
//! racing a move could otherwise observe a mix of old and new words.
//!
//! # Features
//!
//! - `std` (default): implements `std::error::Error` for [`CubeError`].
//! - `serde`: `Serialize`/`Deserialize` for the public value types.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

// Encoding primitives (color, face, constants, error)
pub mod core;

// Compile-time masks and strip reflows
pub mod mask;

// Six-word cube state
pub mod state;

// Quarter-turn transforms
pub mod moves;

// Text rendering
mod render;

pub use crate::core::color::Color;
pub use crate::core::constants::{
    BITS_PER_COLOR, CENTER, COLOR_COUNT, FACELETS_PER_FACE, FACE_COUNT,
};
pub use crate::core::error::{Bound, CubeError};
pub use crate::core::face::{Face, FaceId, SOLVED_FACES};
pub use moves::Move;
pub use state::CubeState;

/// Prelude module for convenient imports.
///
/// ```
/// use bitcube::prelude::*;
///
/// let cube = CubeState::new().turned(Move::Front);
/// assert_eq!(cube.face(FaceId::Front), Face::solved(Color::ALL[2]).rotate_clockwise());
/// ```
pub mod prelude {
    pub use crate::core::color::Color;
    pub use crate::core::error::CubeError;
    pub use crate::core::face::{Face, FaceId};
    pub use crate::moves::Move;
    pub use crate::state::CubeState;
}
