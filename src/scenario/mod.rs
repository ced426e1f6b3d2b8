//! Scenario layer: what a caller asks the search for, and what can go wrong asking.
//!
//! A [`TourRequest`] bundles the five search inputs. The core accepts any request whose board is
//! non-empty and whose start lies on it; the tighter ranges used by the command-line tools live in
//! [`InputLimits`] and are checked by the glue before a search is started.
//!
//! Not finding a tour is not an error (see [`crate::search::tour::SearchState`]). [`TourError`]
//! covers bad requests, bad input text and exceeded budgets of auxiliary solvers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::Dims;
use crate::core::coord::Coord;

/// The inputs of one tour search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourRequest {
    pub rows: usize,
    pub cols: usize,
    /// Total number of undos the search may perform.
    pub backtrack_limit: u64,
    pub start_row: usize,
    pub start_col: usize,
}

impl TourRequest {
    pub fn new(
        rows: usize,
        cols: usize,
        backtrack_limit: u64,
        start_row: usize,
        start_col: usize,
    ) -> Self {
        Self {
            rows,
            cols,
            backtrack_limit,
            start_row,
            start_col,
        }
    }

    #[inline]
    pub fn start(&self) -> Coord {
        Coord::new(self.start_row as i32, self.start_col as i32)
    }

    /// Structural checks the core relies on: a non-empty board with the start on it.
    pub fn dims(&self) -> Result<Dims, TourError> {
        let dims = Dims::new(self.rows, self.cols)?;
        if self.start_row >= self.rows || self.start_col >= self.cols {
            return Err(TourError::InvalidRequest {
                reason: format!(
                    "start ({},{}) is off a {}x{} board",
                    self.start_row, self.start_col, self.rows, self.cols
                ),
            });
        }
        Ok(dims)
    }
}

/// Value ranges enforced on user-supplied requests.
#[derive(Debug, Clone, Copy)]
pub struct InputLimits {
    pub min_side: usize,
    pub max_side: usize,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            min_side: 5,
            max_side: 500,
        }
    }
}

impl InputLimits {
    /// Checks sides, budget (`0..=rows*cols`) and start square, in that order.
    pub fn check(&self, req: &TourRequest) -> Result<(), TourError> {
        let side = |field: &'static str, value: usize| {
            if value < self.min_side || value > self.max_side {
                Err(TourError::OutOfRange {
                    field,
                    value: value as i64,
                    min: self.min_side as i64,
                    max: self.max_side as i64,
                })
            } else {
                Ok(())
            }
        };
        side("rows", req.rows)?;
        side("cols", req.cols)?;

        let cells = (req.rows * req.cols) as u64;
        if req.backtrack_limit > cells {
            return Err(TourError::OutOfRange {
                field: "backtrack_limit",
                value: i64::try_from(req.backtrack_limit).unwrap_or(i64::MAX),
                min: 0,
                max: cells as i64,
            });
        }
        if req.start_row >= req.rows {
            return Err(TourError::OutOfRange {
                field: "start_row",
                value: req.start_row as i64,
                min: 0,
                max: req.rows as i64 - 1,
            });
        }
        if req.start_col >= req.cols {
            return Err(TourError::OutOfRange {
                field: "start_col",
                value: req.start_col as i64,
                min: 0,
                max: req.cols as i64 - 1,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
/// Structured errors returned by the library and the command-line glue.
pub enum TourError {
    /// The request cannot describe a search (empty board, start off the board).
    #[error("invalid request: {reason}")]
    InvalidRequest { reason: String },

    /// A user-supplied value is outside the accepted range.
    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Input text did not have the expected shape.
    #[error("malformed input on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// A configured budget of an auxiliary solver was exceeded.
    #[error("limit exceeded at {stage}: {metric} (limit={limit}, observed={observed})")]
    LimitExceeded {
        stage: &'static str,
        metric: &'static str,
        limit: u64,
        observed: u64,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
