//! Finished tours and the ways they are reported.
//!
//! - [`Tour`]: a path known to cover the board, one knight move at a time.
//! - [`TourReport`]: a serializable summary of a search (used by `tour_eval` and `--json`).
//! - [`write_listing`] / [`write_grid`]: the plain-text formats of the `knights_tour` tool.

use std::io::{self, Write};

use rustc_hash::FxHashSet;
use serde::Serialize;
use thiserror::Error;

use crate::board::{Board, Dims};
use crate::core::coord::Coord;
use crate::search::tour::{FailureReason, SearchState, SearchStats, TourOutcome};

/// Ways a move sequence can fail to be an open knight's tour.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourViolation {
    #[error("expected {expected} moves, got {got}")]
    WrongLength { expected: usize, got: usize },
    #[error("move {index} at {at:?} is off the board")]
    OffBoard { index: usize, at: Coord },
    #[error("move {index} revisits {at:?}")]
    Repeated { index: usize, at: Coord },
    #[error("move {index} from {from:?} to {to:?} is not a knight move")]
    NotKnightStep { index: usize, from: Coord, to: Coord },
}

/// An open knight's tour: every cell of `dims` exactly once, consecutive cells a knight move
/// apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    dims: Dims,
    path: Vec<Coord>,
}

impl Tour {
    /// Checks `path` and wraps it.
    pub fn new(dims: Dims, path: Vec<Coord>) -> Result<Self, TourViolation> {
        let tour = Self { dims, path };
        tour.verify()?;
        Ok(tour)
    }

    /// Wraps a path produced by a search; checked in debug builds only.
    pub(crate) fn from_search(dims: Dims, path: Vec<Coord>) -> Self {
        let tour = Self { dims, path };
        debug_assert_eq!(tour.verify(), Ok(()));
        tour
    }

    pub fn verify(&self) -> Result<(), TourViolation> {
        let expected = self.dims.cell_count();
        if self.path.len() != expected {
            return Err(TourViolation::WrongLength {
                expected,
                got: self.path.len(),
            });
        }

        let mut seen: FxHashSet<Coord> = FxHashSet::default();
        seen.reserve(expected);
        for (index, &at) in self.path.iter().enumerate() {
            if !self.dims.contains(at) {
                return Err(TourViolation::OffBoard { index, at });
            }
            if !seen.insert(at) {
                return Err(TourViolation::Repeated { index, at });
            }
            if index > 0 {
                let from = self.path[index - 1];
                if !from.is_knight_step_to(at) {
                    return Err(TourViolation::NotKnightStep { index, from, to: at });
                }
            }
        }
        Ok(())
    }

    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    #[inline]
    pub fn path(&self) -> &[Coord] {
        &self.path
    }

    #[inline]
    pub fn start(&self) -> Coord {
        self.path[0]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.path.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// The tour laid out as visit orders.
    pub fn board(&self) -> Board {
        let mut board = Board::new(self.dims);
        for (i, &c) in self.path.iter().enumerate() {
            board.mark_visited(c, i as u32 + 1);
        }
        board
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Success,
    Impossible,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Success => "SUCCESS",
            Status::Impossible => "IMPOSSIBLE",
        }
    }
}

/// Serializable summary of one search.
#[derive(Debug, Clone, Serialize)]
pub struct TourReport {
    pub status: Status,
    pub rows: usize,
    pub cols: usize,
    pub backtrack_limit: u64,
    pub start: [usize; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<FailureReason>,
    pub stats: SearchStats,
    pub moves: Vec<[i32; 2]>,
}

impl TourReport {
    pub fn from_outcome(outcome: &TourOutcome) -> Self {
        let req = &outcome.request;
        let failure = match outcome.state {
            SearchState::Failed(reason) => Some(reason),
            _ => None,
        };
        let moves = outcome
            .tour
            .as_ref()
            .map(|t| t.path().iter().map(|c| [c.row, c.col]).collect())
            .unwrap_or_default();

        Self {
            status: status_of(outcome),
            rows: req.rows,
            cols: req.cols,
            backtrack_limit: req.backtrack_limit,
            start: [req.start_row, req.start_col],
            failure,
            stats: outcome.stats,
            moves,
        }
    }
}

pub fn status_of(outcome: &TourOutcome) -> Status {
    if outcome.tour.is_some() {
        Status::Success
    } else {
        Status::Impossible
    }
}

/// `SUCCESS` followed by one `r c` line per move, or a lone `IMPOSSIBLE`.
pub fn write_listing<W: Write>(out: &mut W, outcome: &TourOutcome) -> io::Result<()> {
    writeln!(out, "{}", status_of(outcome).label())?;
    if let Some(tour) = &outcome.tour {
        for c in tour.path() {
            writeln!(out, "{c}")?;
        }
    }
    Ok(())
}

/// Visit orders as a right-aligned grid, one board row per line.
pub fn write_grid<W: Write>(out: &mut W, tour: &Tour) -> io::Result<()> {
    let width = tour.len().to_string().len();
    for row in tour.board().rows() {
        let line = row
            .iter()
            .map(|n| format!("{n:>width$}"))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "{line}")?;
    }
    Ok(())
}
