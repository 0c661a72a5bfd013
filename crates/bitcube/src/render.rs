//! Text rendering of faces and whole cubes.
//!
//! A [`Face`] prints as a 3x3 grid of color letters. A [`CubeState`] prints as
//! the unfolded net, Up above Front and Down below it:
//!
//! ```text
//!       W W W
//!       W W W
//!       W W W
//! O O O G G G R R R B B B
//! O O O G G G R R R B B B
//! O O O G G G R R R B B B
//!       Y Y Y
//!       Y Y Y
//!       Y Y Y
//! ```
//!
//! Letters come from [`crate::Color::letter`].

use crate::core::face::{Face, FaceId};
use crate::state::CubeState;
use core::fmt;

const BAND: [FaceId; 4] = [FaceId::Left, FaceId::Front, FaceId::Right, FaceId::Back];

/// Write row `row` of `face` as three space-separated letters.
fn write_row(f: &mut fmt::Formatter<'_>, face: Face, row: usize) -> fmt::Result {
    let base = row * 3;
    write!(
        f,
        "{} {} {}",
        face.packed_color_at(base),
        face.packed_color_at(base + 1),
        face.packed_color_at(base + 2)
    )
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            write_row(f, *self, row)?;
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // One face is "X X X" (5 columns) plus a separating space.
        const INDENT: &str = "      ";

        for row in 0..3 {
            f.write_str(INDENT)?;
            write_row(f, self.face(FaceId::Up), row)?;
            writeln!(f)?;
        }
        for row in 0..3 {
            for (i, id) in BAND.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write_row(f, self.face(*id), row)?;
            }
            writeln!(f)?;
        }
        for row in 0..3 {
            f.write_str(INDENT)?;
            write_row(f, self.face(FaceId::Down), row)?;
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Move;
    use alloc::string::ToString;

    #[test]
    fn test_solved_net() {
        let expected = "      W W W\n      W W W\n      W W W\n\
                        O O O G G G R R R B B B\n\
                        O O O G G G R R R B B B\n\
                        O O O G G G R R R B B B\n\
                        \x20     Y Y Y\n      Y Y Y\n      Y Y Y";
        assert_eq!(CubeState::new().to_string(), expected);
    }

    #[test]
    fn test_face_grid_after_front() {
        let cube = CubeState::new().turned(Move::Front);
        assert_eq!(cube.face(FaceId::Up).to_string(), "W W W\nW W W\nO O O");
        assert_eq!(cube.face(FaceId::Right).to_string(), "W R R\nW R R\nW R R");
    }

    #[test]
    fn test_net_line_count() {
        let text = CubeState::new().turned(Move::Right).to_string();
        assert_eq!(text.lines().count(), 9);
        assert!(text.lines().all(|l| l.len() <= 23));
    }
}
