//! Evaluate one request from a JSON file and print a JSON report.
//!
//! ```json
//! { "request": { "rows": 6, "cols": 5, "backtrack_limit": 50, "start_row": 2, "start_col": 2 },
//!   "exhaustive": true }
//! ```
//!
//! With `"exhaustive": true` the request is also settled by the exhaustive solver, which tells a
//! budget failure apart from a board with no tour. Only practical for small boards.
//!
//! Requests go through the same [`InputLimits`] as the stdin tool; an out-of-range request exits 1.

use std::path::PathBuf;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use knights_tour::scenario::{InputLimits, TourError, TourRequest};
use knights_tour::search::exhaustive::exhaustive_tour_for;
use knights_tour::search::resources::ResourceLimits;
use knights_tour::search::tour::search_tour;
use knights_tour::solution::TourReport;

#[derive(Debug, Clone, Deserialize, Serialize)]
struct InputFile {
    request: TourRequest,
    #[serde(default)]
    exhaustive: bool,
    /// Node budget for the exhaustive solver.
    #[serde(default)]
    max_nodes: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
struct ExhaustiveSummary {
    tour_exists: bool,
    elapsed_ms: f64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: tour_eval <request.json>");
        std::process::exit(2);
    }

    let path = PathBuf::from(&args[1]);
    let bytes = match std::fs::read(&path) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Failed to read {}: {e}", path.display());
            std::process::exit(1);
        }
    };

    let input: InputFile = match serde_json::from_slice(&bytes) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Invalid JSON in {}: {e}", path.display());
            std::process::exit(2);
        }
    };

    let out = match evaluate(&input) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Evaluation failed: {e}");
            std::process::exit(1);
        }
    };
    match serde_json::to_string_pretty(&out) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("Failed to encode report: {e}");
            std::process::exit(1);
        }
    }
}

fn evaluate(input: &InputFile) -> Result<serde_json::Value, TourError> {
    InputLimits::default().check(&input.request)?;

    let started = Instant::now();
    let outcome = search_tour(&input.request)?;
    let heuristic_ms = started.elapsed().as_secs_f64() * 1000.0;

    let exhaustive = if input.exhaustive {
        let mut limits = ResourceLimits::default();
        if let Some(n) = input.max_nodes {
            limits = limits.with_nodes(n);
        }
        let started = Instant::now();
        let found = exhaustive_tour_for(&input.request, limits)?;
        Some(ExhaustiveSummary {
            tour_exists: found.is_some(),
            elapsed_ms: started.elapsed().as_secs_f64() * 1000.0,
        })
    } else {
        None
    };

    Ok(serde_json::json!({
        "request": input.request,
        "report": TourReport::from_outcome(&outcome),
        "elapsed_ms": heuristic_ms,
        "exhaustive": exhaustive,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(text: &str) -> InputFile {
        serde_json::from_str(text).unwrap()
    }

    #[test]
    fn oversized_board_is_rejected_before_searching() {
        let req = input(
            r#"{ "request": { "rows": 32768, "cols": 32768, "backtrack_limit": 0,
                 "start_row": 0, "start_col": 0 } }"#,
        );
        assert!(matches!(
            evaluate(&req),
            Err(TourError::OutOfRange { field: "rows", value: 32768, .. })
        ));
    }

    #[test]
    fn budget_above_cell_count_is_rejected() {
        let req = input(
            r#"{ "request": { "rows": 6, "cols": 5, "backtrack_limit": 50,
                 "start_row": 2, "start_col": 2 } }"#,
        );
        assert!(matches!(
            evaluate(&req),
            Err(TourError::OutOfRange { field: "backtrack_limit", .. })
        ));
    }

    #[test]
    fn exhaustive_cross_check_is_reported() {
        let req = input(
            r#"{ "request": { "rows": 6, "cols": 5, "backtrack_limit": 30,
                 "start_row": 2, "start_col": 2 }, "exhaustive": true }"#,
        );
        let out = evaluate(&req).unwrap();
        assert_eq!(out["report"]["status"], "IMPOSSIBLE");
        assert_eq!(out["exhaustive"]["tour_exists"], true);
    }
}
