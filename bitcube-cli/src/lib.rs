//! Command-line tooling for the `bitcube` crate.
//!
//! The binary `bitcube` is a thin clap front end over these modules:
//!
//! - [`scramble`]: seeded random move sequences
//! - [`bench`]: wall-clock quarter-turn throughput
//! - [`check`]: self-check of the move algebra
//! - [`output`]: text and JSON rendering

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod bench;
pub mod check;
pub mod output;
pub mod scramble;
