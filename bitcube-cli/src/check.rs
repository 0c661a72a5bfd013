//! Self-check: replays the cube's algebraic facts on the live build.
//!
//! Each check produces a [`CheckResult`]; the report fails if any of them
//! fails. The `check` subcommand exits non-zero in that case.

use bitcube::{CubeState, Move};
use serde::Serialize;
use tracing::{debug, warn};

use crate::scramble::{Scrambler, DEFAULT_SCRAMBLE_LEN};

/// Outcome of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The check passed.
    Pass,
    /// The check failed.
    Failure,
}

/// A single check result.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    /// Short identifier of the check.
    pub check: String,
    /// Human-readable outcome.
    pub message: String,
    /// Pass or fail.
    pub severity: Severity,
}

impl CheckResult {
    /// Creates a passing result.
    pub fn pass(check: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            check: check.into(),
            message: message.into(),
            severity: Severity::Pass,
        }
    }

    /// Creates a failing result.
    pub fn fail(check: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            check: check.into(),
            message: message.into(),
            severity: Severity::Failure,
        }
    }

    fn from_outcome(check: &str, ok: bool, pass_msg: String, fail_msg: String) -> Self {
        if ok {
            Self::pass(check, pass_msg)
        } else {
            Self::fail(check, fail_msg)
        }
    }

    /// Returns true if this result represents a failure.
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }
}

/// All check results from one run.
#[derive(Debug, Default, Serialize)]
pub struct CheckReport {
    /// Individual results, in execution order.
    pub results: Vec<CheckResult>,
}

impl CheckReport {
    /// Appends a result, logging failures as they happen.
    pub fn push(&mut self, result: CheckResult) {
        if result.is_failure() {
            warn!(check = %result.check, "{}", result.message);
        } else {
            debug!(check = %result.check, "{}", result.message);
        }
        self.results.push(result);
    }

    /// Number of failed checks.
    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_failure()).count()
    }

    /// True if no check failed.
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }
}

/// Runs every check. `seeds` scrambles are used for the scramble checks.
pub fn run(seeds: u64) -> CheckReport {
    let mut report = CheckReport::default();

    for m in Move::ALL {
        report.push(order_four(m));
    }
    report.push(single_turn_unsolves());
    report.push(commutator_order_six());
    for seed in 0..seeds {
        report.push(scramble_invariants(seed));
    }

    report
}

fn order_four(m: Move) -> CheckResult {
    let mut cube = CubeState::new();
    for _ in 0..4 {
        cube.apply(m);
    }
    CheckResult::from_outcome(
        "order_four",
        cube.is_solved(),
        format!("{m} applied four times restores the solved cube"),
        format!("{m} applied four times leaves the cube unsolved"),
    )
}

fn single_turn_unsolves() -> CheckResult {
    let unsolved = Move::ALL
        .iter()
        .all(|&m| !CubeState::new().turned(m).is_solved());
    CheckResult::from_outcome(
        "single_turn",
        unsolved,
        "every single quarter turn leaves the cube unsolved".to_owned(),
        "a single quarter turn reported the cube as solved".to_owned(),
    )
}

fn commutator_order_six() -> CheckResult {
    // R U R' U', with primes as three quarter turns.
    let commutator = [
        Move::Right,
        Move::Up,
        Move::Right,
        Move::Right,
        Move::Right,
        Move::Up,
        Move::Up,
        Move::Up,
    ];
    let mut cube = CubeState::new();
    let mut restored_at = None;
    for round in 1..=6 {
        cube.apply_all(commutator);
        if cube.is_solved() {
            restored_at = Some(round);
            break;
        }
    }
    CheckResult::from_outcome(
        "commutator",
        restored_at == Some(6),
        "R U R' U' has order six".to_owned(),
        format!("R U R' U' returned to solved after {restored_at:?} rounds, expected 6"),
    )
}

fn scramble_invariants(seed: u64) -> CheckResult {
    let mut cube = CubeState::new();
    let moves = Scrambler::new(seed).scramble(&mut cube, DEFAULT_SCRAMBLE_LEN);
    let centers = cube.centers_intact();
    let counts = cube.color_counts() == [9; 6];

    let mut replay = CubeState::new();
    replay.apply_all(moves.iter().copied());
    let deterministic = replay.same_as(&cube);

    CheckResult::from_outcome(
        "scramble",
        centers && counts && deterministic,
        format!("seed {seed}: centers, color counts and replay hold"),
        format!(
            "seed {seed}: centers intact {centers}, color counts {counts}, replay matches {deterministic}"
        ),
    )
}
