//! Layout constants for the packed face word.
//!
//! A face is nine 3-bit cells stored most-significant-first in a `u32`:
//!
//! ```text
//! bit   31..29 28..26 25..23 22..20 19..17 16..14 13..11 10..8  7..5   4..0
//! cell    0      1      2      3      4      5      6      7      8   padding
//! ```
//!
//! Every other constant in the crate is derived from these.

/// Number of faces on the cube.
pub const FACE_COUNT: usize = 6;

/// Number of facelets on one face (3 x 3).
pub const FACELETS_PER_FACE: usize = 9;

/// Number of distinct colors. Equal to [`FACE_COUNT`]: color identity is positional.
pub const COLOR_COUNT: usize = FACE_COUNT;

/// Bits used to store one facelet color.
pub const BITS_PER_COLOR: u32 = 3;

/// Mask for a single color once shifted down to bit 0.
pub const COLOR_MASK: u32 = (1 << BITS_PER_COLOR) - 1;

/// Bits of a face word that carry colors (27).
pub const USED_BITS: u32 = FACELETS_PER_FACE as u32 * BITS_PER_COLOR;

/// Unused low bits of a face word (5). Always zero.
pub const PADDING_BITS: u32 = u32::BITS - USED_BITS;

/// Mask covering the padding bits.
pub const PADDING_MASK: u32 = (1 << PADDING_BITS) - 1;

/// Row-major index of the center facelet.
pub const CENTER: usize = 4;

/// Total facelets on the cube (54).
pub const TOTAL_FACELETS: usize = FACE_COUNT * FACELETS_PER_FACE;

/// Shift that brings facelet `index` down to bit 0.
///
/// Facelet 0 sits at the top of the word, so its shift is the largest.
/// `index` must be in `0..=8`; larger values trip a debug assertion.
#[inline]
pub const fn cell_shift(index: usize) -> u32 {
    debug_assert!(index < FACELETS_PER_FACE, "facelet index out of bounds");
    u32::BITS - BITS_PER_COLOR * (index as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fills_word() {
        assert_eq!(USED_BITS, 27);
        assert_eq!(PADDING_BITS, 5);
        assert_eq!(USED_BITS + PADDING_BITS, u32::BITS);
    }

    #[test]
    fn test_cell_shift_endpoints() {
        assert_eq!(cell_shift(0), 29);
        assert_eq!(cell_shift(CENTER), 17);
        assert_eq!(cell_shift(8), PADDING_BITS);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "facelet index out of bounds")]
    fn test_cell_shift_rejects_index_past_face() {
        let _ = cell_shift(FACELETS_PER_FACE);
    }

    #[test]
    fn test_colors_fit_in_cell() {
        assert!(COLOR_COUNT as u32 <= COLOR_MASK + 1);
        assert_eq!(TOTAL_FACELETS, 54);
    }
}
