//! Compile-time bit masks over the packed face word.
//!
//! Every mask is derived from [`BASE`], the 3-bit slot of facelet 0, by
//! shifting right in whole cells. The move transforms in [`crate::moves`] and
//! the rotation primitive on [`crate::Face`] are written entirely in terms of
//! these constants, so no move ever loops over cells or decodes a face.
//!
//! # Cell layout
//!
//! ```text
//! 0 1 2     TOP_ROW    = 0 1 2     LEFT_COL  = 0 3 6
//! 3 4 5                            RIGHT_COL = 2 5 8
//! 6 7 8     BOTTOM_ROW = 6 7 8
//! ```
//!
//! # Example
//!
//! ```
//! use bitcube::mask::{cell, BASE, LEFT_COL, TOP_ROW};
//!
//! assert_eq!(cell(0), BASE);
//! assert_eq!(cell(1), BASE >> 3);
//! assert_eq!(TOP_ROW & LEFT_COL, cell(0));
//! ```

use crate::core::constants::{
    cell_shift, BITS_PER_COLOR, COLOR_MASK, FACELETS_PER_FACE, PADDING_MASK,
};

// ============================================================================
// Single cells
// ============================================================================

/// Slot of facelet 0: the top three bits of the word.
pub const BASE: u32 = COLOR_MASK << cell_shift(0);

/// Slot of facelet `index`, i.e. [`BASE`] shifted right by `index * 3` bits.
///
/// `index` must be in `0..=8`. Larger values trip a debug assertion; in
/// release builds they yield a mask over the padding or overflow the shift.
#[inline]
pub const fn cell(index: usize) -> u32 {
    debug_assert!(index < FACELETS_PER_FACE, "facelet index out of bounds");
    BASE >> (BITS_PER_COLOR * index as u32)
}

/// Precomputed slot masks for facelets 0..=8.
pub const CELLS: [u32; FACELETS_PER_FACE] = {
    let mut table = [0u32; FACELETS_PER_FACE];
    let mut i = 0;
    while i < FACELETS_PER_FACE {
        table[i] = cell(i);
        i += 1;
    }
    table
};

/// The lowest bit of every cell. Multiplying a color by this replicates it
/// into all nine slots.
pub const CELL_LSB: u32 = {
    let mut ones = 0u32;
    let mut i = 0;
    while i < FACELETS_PER_FACE {
        ones |= 1 << cell_shift(i);
        i += 1;
    }
    ones
};

/// All 27 color bits. Its complement is the padding.
pub const FACE_BITS: u32 = !PADDING_MASK;

// ============================================================================
// Edge strips
// ============================================================================

/// Facelets 0, 1, 2.
pub const TOP_ROW: u32 = cell(0) | cell(1) | cell(2);

/// Facelets 6, 7, 8.
pub const BOTTOM_ROW: u32 = cell(6) | cell(7) | cell(8);

/// Facelets 0, 3, 6.
pub const LEFT_COL: u32 = cell(0) | cell(3) | cell(6);

/// Facelets 2, 5, 8.
pub const RIGHT_COL: u32 = cell(2) | cell(5) | cell(8);

// ============================================================================
// Clockwise rotation groups
// ============================================================================
//
// Clockwise rotation sends source cell s to destination p where
// p = [2, 5, 8, 1, 4, 7, 0, 3, 6][s]. Cells that travel the same distance
// share one shift, so each group below is a destination mask for one term.

/// Destinations reached by shifting left 18 bits (6 -> 0).
pub const ROT_L18: u32 = cell(0);

/// Destinations reached by shifting left 12 bits (7 -> 3).
pub const ROT_L12: u32 = cell(3);

/// Destinations reached by shifting left 6 bits (3 -> 1, 8 -> 6).
pub const ROT_L6: u32 = cell(1) | cell(6);

/// The center, which does not move.
pub const ROT_FIXED: u32 = cell(4);

/// Destinations reached by shifting right 6 bits (0 -> 2, 5 -> 7).
pub const ROT_R6: u32 = cell(2) | cell(7);

/// Destinations reached by shifting right 12 bits (1 -> 5).
pub const ROT_R12: u32 = cell(5);

/// Destinations reached by shifting right 18 bits (2 -> 8).
pub const ROT_R18: u32 = cell(8);

// ============================================================================
// Strip reflows
// ============================================================================
//
// A strip leaving one face rarely lands in the same slots on the next. Each
// function below lifts one strip out of `w` and drops its three cells into
// their destination slots with one shift per cell. The result holds only the
// destination strip; callers splice it in with `replace_strip`.
//
// Cell s moves to cell p by shifting left 3 * (s - p) bits when s > p and
// right 3 * (p - s) bits otherwise.

/// Right column into the left column, reversed: 2 -> 6, 5 -> 3, 8 -> 0.
#[inline(always)]
pub const fn right_col_to_left_col(w: u32) -> u32 {
    ((w & cell(2)) >> 12) | ((w & cell(5)) << 6) | ((w & cell(8)) << 24)
}

/// Left column into the right column, reversed: 0 -> 8, 3 -> 5, 6 -> 2.
#[inline(always)]
pub const fn left_col_to_right_col(w: u32) -> u32 {
    ((w & cell(0)) >> 24) | ((w & cell(3)) >> 6) | ((w & cell(6)) << 12)
}

/// Bottom row into the left column: 6 -> 0, 7 -> 3, 8 -> 6.
#[inline(always)]
pub const fn bottom_row_to_left_col(w: u32) -> u32 {
    ((w & cell(6)) << 18) | ((w & cell(7)) << 12) | ((w & cell(8)) << 6)
}

/// Left column into the top row, reversed: 0 -> 2, 3 -> 1, 6 -> 0.
#[inline(always)]
pub const fn left_col_to_top_row(w: u32) -> u32 {
    ((w & cell(0)) >> 6) | ((w & cell(3)) << 6) | ((w & cell(6)) << 18)
}

/// Top row into the right column: 0 -> 2, 1 -> 5, 2 -> 8.
#[inline(always)]
pub const fn top_row_to_right_col(w: u32) -> u32 {
    ((w & cell(0)) >> 6) | ((w & cell(1)) >> 12) | ((w & cell(2)) >> 18)
}

/// Right column into the bottom row, reversed: 2 -> 8, 5 -> 7, 8 -> 6.
#[inline(always)]
pub const fn right_col_to_bottom_row(w: u32) -> u32 {
    ((w & cell(2)) >> 18) | ((w & cell(5)) >> 6) | ((w & cell(8)) << 6)
}

/// Top row into the left column, reversed: 0 -> 6, 1 -> 3, 2 -> 0.
#[inline(always)]
pub const fn top_row_to_left_col(w: u32) -> u32 {
    ((w & cell(0)) >> 18) | ((w & cell(1)) >> 6) | ((w & cell(2)) << 6)
}

/// Left column into the bottom row: 0 -> 6, 3 -> 7, 6 -> 8.
#[inline(always)]
pub const fn left_col_to_bottom_row(w: u32) -> u32 {
    ((w & cell(0)) >> 18) | ((w & cell(3)) >> 12) | ((w & cell(6)) >> 6)
}

/// Bottom row into the right column, reversed: 6 -> 8, 7 -> 5, 8 -> 2.
#[inline(always)]
pub const fn bottom_row_to_right_col(w: u32) -> u32 {
    ((w & cell(6)) >> 6) | ((w & cell(7)) << 6) | ((w & cell(8)) << 18)
}

/// Right column into the top row: 2 -> 0, 5 -> 1, 8 -> 2.
#[inline(always)]
pub const fn right_col_to_top_row(w: u32) -> u32 {
    ((w & cell(2)) << 6) | ((w & cell(5)) << 12) | ((w & cell(8)) << 18)
}

/// Clear the `strip` slots of `word` and OR in `bits`.
///
/// `bits` must lie inside `strip`.
#[inline(always)]
pub const fn replace_strip(word: u32, strip: u32, bits: u32) -> u32 {
    (word & !strip) | bits
}
