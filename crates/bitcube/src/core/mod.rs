//! Core data types and constants.
//!
//! - [`constants`]: word layout, `BITS_PER_COLOR`, `CENTER` and friends
//! - [`color::Color`]: a facelet color, `0..=5`
//! - [`face::Face`], [`face::FaceId`]: a packed face word and its position
//! - [`error::CubeError`]: the only error type in the crate

pub mod color;
pub mod constants;
pub mod error;
pub mod face;
