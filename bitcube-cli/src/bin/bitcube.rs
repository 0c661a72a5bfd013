//! `bitcube`: show, scramble, benchmark and self-check the bit-packed cube.
//!
//! **Usage:**
//! ```text
//! bitcube show R1 U1 F
//! bitcube scramble [--count <n>] [--seed <u64>]
//! bitcube bench [--rounds <n>]
//! bitcube check [--seeds <n>]
//! ```
//!
//! Logging goes to stderr; repeat `-v` for more detail. `check` exits
//! non-zero if any check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::process::ExitCode;

use anyhow::{Context, Result};
use bitcube::{CubeState, Move};
use bitcube_cli::output::{join_moves, Format, StateView};
use bitcube_cli::scramble::{Scrambler, DEFAULT_SCRAMBLE_LEN};
use bitcube_cli::{bench, check};
use clap::{Parser, Subcommand};
use tracing::{info, warn, Level};

#[derive(Parser)]
#[command(name = "bitcube", version, about = "Bit-packed Rubik's cube tooling")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply moves to the solved cube and print the result.
    Show {
        /// Moves such as U1 R1 F1, or the single letters U D R L F B.
        moves: Vec<Move>,
    },
    /// Apply a random scramble to the solved cube.
    Scramble {
        /// Number of quarter turns.
        #[arg(long, default_value_t = DEFAULT_SCRAMBLE_LEN)]
        count: usize,
        /// Seed for a reproducible scramble. Random when omitted.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Time rounds of the six quarter turns.
    Bench {
        /// Rounds of six moves.
        #[arg(long, default_value_t = bench::DEFAULT_ROUNDS)]
        rounds: u64,
    },
    /// Verify move orders and scramble invariants.
    Check {
        /// Number of seeded scrambles to verify.
        #[arg(long, default_value_t = 32)]
        seeds: u64,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn show(moves: &[Move], format: Format) -> Result<()> {
    let mut cube = CubeState::new();
    cube.apply_all(moves.iter().copied());
    info!(moves = %join_moves(moves), solved = cube.is_solved(), "applied moves");
    let text = StateView::new(&cube, moves, None)
        .render(format)
        .context("rendering cube")?;
    println!("{text}");
    Ok(())
}

fn scramble(count: usize, seed: Option<u64>, format: Format) -> Result<()> {
    let mut scrambler = seed.map_or_else(Scrambler::from_entropy, Scrambler::new);
    if count == 0 {
        warn!("scramble count is zero, printing the solved cube");
    }
    info!(seed = scrambler.seed(), count, "scrambling");
    let mut cube = CubeState::new();
    let moves = scrambler.scramble(&mut cube, count);
    let text = StateView::new(&cube, &moves, Some(scrambler.seed()))
        .render(format)
        .context("rendering scramble")?;
    println!("{text}");
    Ok(())
}

fn run_bench(rounds: u64, format: Format) -> Result<()> {
    let report = bench::run(rounds)?;
    match format {
        Format::Text => println!("{report}"),
        Format::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serializing bench report")?
        ),
    }
    Ok(())
}

fn run_check(seeds: u64, format: Format) -> Result<bool> {
    let report = check::run(seeds);
    match format {
        Format::Text => {
            for r in &report.results {
                let tag = if r.is_failure() { "FAIL" } else { "ok  " };
                println!("{tag} {:<12} {}", r.check, r.message);
            }
            println!(
                "\n{} checks, {} failed",
                report.results.len(),
                report.failure_count()
            );
        }
        Format::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serializing check report")?
        ),
    }
    Ok(report.all_passed())
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Show { moves } => show(&moves, cli.format)?,
        Commands::Scramble { count, seed } => scramble(count, seed, cli.format)?,
        Commands::Bench { rounds } => run_bench(rounds, cli.format)?,
        Commands::Check { seeds } => {
            if !run_check(seeds, cli.format)? {
                return Ok(ExitCode::FAILURE);
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_move_labels() -> Result<()> {
        let cli = Cli::try_parse_from(["bitcube", "show", "R1", "U", "f1"]);
        // Labels are case-sensitive.
        assert!(cli.is_err());

        let cli = Cli::try_parse_from(["bitcube", "--format", "json", "show", "R1", "U"])?;
        assert_eq!(cli.format, Format::Json);
        match cli.command {
            Commands::Show { moves } => assert_eq!(moves, vec![Move::Right, Move::Up]),
            _ => anyhow::bail!("expected show"),
        }
        Ok(())
    }

    #[test]
    fn test_scramble_defaults() -> Result<()> {
        let cli = Cli::try_parse_from(["bitcube", "-vv", "scramble"])?;
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Scramble { count, seed } => {
                assert_eq!(count, DEFAULT_SCRAMBLE_LEN);
                assert_eq!(seed, None);
            }
            _ => anyhow::bail!("expected scramble"),
        }
        Ok(())
    }
}
