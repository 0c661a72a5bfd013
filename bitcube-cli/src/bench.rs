//! Wall-clock throughput harness.
//!
//! Applies the six moves in a fixed order for a number of rounds and
//! reports the elapsed time. This is the quick sanity number; the criterion
//! benches in the core crate are the careful measurement.

use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use anyhow::{ensure, Result};
use bitcube::{CubeState, Move};
use serde::Serialize;
use tracing::{info, warn};

/// Below this many rounds the timer resolution dominates the figure.
const NOISY_ROUNDS: u64 = 1_000;

/// Rounds used when the caller does not pick a count.
pub const DEFAULT_ROUNDS: u64 = 10_000_000;

/// Timing of one harness run.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BenchReport {
    /// Rounds of six moves executed.
    pub rounds: u64,
    /// Total quarter turns applied.
    pub moves: u64,
    /// Wall-clock time for all rounds.
    #[serde(rename = "elapsed_secs", serialize_with = "as_secs")]
    pub elapsed: Duration,
    /// The final state is solved. Holds whenever `rounds` is a multiple of
    /// the order of the six-move round.
    pub ended_solved: bool,
}

fn as_secs<S: serde::Serializer>(d: &Duration, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}

impl BenchReport {
    /// Mean nanoseconds per quarter turn.
    pub fn ns_per_move(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1e9 / self.moves as f64
    }

    /// Quarter turns per second.
    pub fn moves_per_sec(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            f64::INFINITY
        } else {
            self.moves as f64 / secs
        }
    }
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "rounds:        {}", self.rounds)?;
        writeln!(f, "moves:         {}", self.moves)?;
        writeln!(f, "elapsed:       {:.6} s", self.elapsed.as_secs_f64())?;
        writeln!(f, "per move:      {:.3} ns", self.ns_per_move())?;
        write!(f, "moves per sec: {:.0}", self.moves_per_sec())
    }
}

/// Time `rounds` rounds of U D R L F B from the solved cube.
///
/// # Errors
///
/// Returns an error if `rounds` is zero or the total move count overflows
/// `u64`.
pub fn run(rounds: u64) -> Result<BenchReport> {
    ensure!(rounds > 0, "bench needs at least one round");
    let moves = rounds
        .checked_mul(Move::ALL.len() as u64)
        .ok_or_else(|| anyhow::anyhow!("{rounds} rounds overflows the move counter"))?;

    if rounds < NOISY_ROUNDS {
        warn!(rounds, "few rounds, per-move figure will be noisy");
    }
    info!(rounds, moves, "starting bench");
    let mut cube = CubeState::new();
    let start = Instant::now();
    for _ in 0..rounds {
        for m in Move::ALL {
            cube.apply(black_box(m));
        }
    }
    let elapsed = start.elapsed();
    let cube = black_box(cube);

    let report = BenchReport {
        rounds,
        moves,
        elapsed,
        ended_solved: cube.is_solved(),
    };
    info!(
        elapsed_secs = elapsed.as_secs_f64(),
        ns_per_move = report.ns_per_move(),
        "bench finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_rounds_rejected() {
        assert!(run(0).is_err());
    }

    #[test]
    fn test_counts_moves() -> Result<()> {
        let report = run(1_000)?;
        assert_eq!(report.rounds, 1_000);
        assert_eq!(report.moves, 6_000);
        assert!(report.ns_per_move() >= 0.0);
        Ok(())
    }

    #[test]
    fn test_ns_per_move_arithmetic() {
        let report = BenchReport {
            rounds: 10,
            moves: 60,
            elapsed: Duration::from_micros(6),
            ended_solved: false,
        };
        assert!((report.ns_per_move() - 100.0).abs() < 1e-9);
        assert!((report.moves_per_sec() - 1e7).abs() < 1.0);
    }

    #[test]
    fn test_display_lists_fields() {
        let report = BenchReport {
            rounds: 1,
            moves: 6,
            elapsed: Duration::from_nanos(600),
            ended_solved: false,
        };
        let text = report.to_string();
        assert!(text.contains("moves:         6"));
        assert!(text.contains("per move:      100.000 ns"));
    }

    #[test]
    fn test_overflow_rejected() {
        assert!(run(u64::MAX).is_err());
    }
}
