//! Reads a tour request from stdin and prints the tour.
//!
//! ```text
//! $ printf '8 8 0\n0 0\n' | knights_tour
//! SUCCESS
//! 0 0
//! 1 2
//! ...
//! ```
//!
//! Exit code 1 on malformed or out-of-range input or an unknown flag, 0 otherwise (including
//! `IMPOSSIBLE` and `--help`).

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use knights_tour::input::parse_request;
use knights_tour::scenario::{InputLimits, TourError};
use knights_tour::scenarios::{self, BuiltInScenario};
use knights_tour::search::tour::search_tour;
use knights_tour::solution::{status_of, write_grid, write_listing, TourReport};

const ALL_DEMOS: &str = "all";

const INPUT_HELP: &str = "\
Input (stdin):
  m n k    board rows, board columns, backtrack limit
  r c      0-based start square

Example:
  8 8 0
  0 0

Constraints: 5 <= m, n <= 500; 0 <= k <= m*n; 0 <= r < m; 0 <= c < n.
Set RUST_LOG=knights_tour=debug to trace the search on stderr.";

#[derive(Debug, Parser)]
#[command(
    name = "knights_tour",
    about = "Knight's tour by Warnsdorff's rule with a bounded backtracking budget",
    after_help = INPUT_HELP
)]
struct Cli {
    /// Run the canned test cases (or just the one named) and print results and runtimes.
    #[arg(
        long,
        value_name = "NAME",
        num_args = 0..=1,
        default_missing_value = ALL_DEMOS
    )]
    demo: Option<String>,

    /// After a successful tour, also print the board as a grid of visit orders.
    #[arg(long)]
    board: bool,

    /// Print a JSON report instead of the move listing.
    #[arg(long, conflicts_with = "board")]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(usage_exit_code(&e));
        }
    };

    let result = match &cli.demo {
        Some(name) => demo_selection(name).and_then(|set| run_demo(&set)),
        None => run(&cli),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {e}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<(), TourError> {
    let req = parse_request(io::stdin().lock())?;
    InputLimits::default().check(&req)?;

    let outcome = search_tour(&req)?;

    let mut out = BufWriter::new(io::stdout().lock());
    if cli.json {
        serde_json::to_writer_pretty(&mut out, &TourReport::from_outcome(&outcome))?;
        writeln!(out)?;
    } else {
        write_listing(&mut out, &outcome)?;
        if let (true, Some(tour)) = (cli.board, &outcome.tour) {
            writeln!(out)?;
            write_grid(&mut out, tour)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Help and version output are not failures; every other parse error is bad input.
fn usage_exit_code(e: &clap::Error) -> u8 {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

fn demo_selection(name: &str) -> Result<Vec<BuiltInScenario>, TourError> {
    if name == ALL_DEMOS {
        return Ok(scenarios::all());
    }
    scenarios::by_name(name)
        .map(|scn| vec![scn])
        .ok_or_else(|| TourError::InvalidRequest {
            reason: format!(
                "unknown demo '{name}' (available: {}, {ALL_DEMOS})",
                scenarios::available_names().join(", ")
            ),
        })
}

fn run_demo(set: &[BuiltInScenario]) -> Result<(), TourError> {
    println!("Running demo tests...\n");

    for scn in set {
        let r = scn.request;
        println!(
            "Running test: {} ({}x{}, k={}, start=({},{}))",
            scn.title, r.rows, r.cols, r.backtrack_limit, r.start_row, r.start_col
        );

        let started = Instant::now();
        let outcome = search_tour(&r)?;
        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

        println!("Result: {}", status_of(&outcome).label());
        println!("Runtime: {elapsed_ms:.2} ms\n");
    }
    Ok(())
}
