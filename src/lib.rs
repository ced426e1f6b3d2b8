//! Open knight's tours on rectangular boards, found with Warnsdorff's rule and a bounded
//! backtracking budget.
//!
//! The search keeps three pieces of state for one board:
//!
//! - a [`board::Board`] of visit orders,
//! - a [`board::degree::DegreeGrid`] holding, per square, the number of unvisited squares one
//!   knight move away (adjusted on every visit and undo, never recomputed), and
//! - the tour path itself.
//!
//! [`search::select::select_next`] picks the next square (fewest onward moves, then the smallest
//! onward degree of the candidate's own successors, then `(row, col)`), and
//! [`search::tour::TourSearch`] advances or undoes until the board is full or the undo budget is
//! spent. A failed search means "not found within this budget", not "no tour exists";
//! [`search::exhaustive`] settles the latter for small boards.

pub mod board;
pub mod core;
pub mod input;
pub mod scenario;
pub mod scenarios;
pub mod search;
pub mod solution;

pub use crate::core::coord::{Coord, KNIGHT_STEPS};
pub use crate::scenario::{InputLimits, TourError, TourRequest};
pub use crate::search::tour::{find_tour, search_tour, SearchState, TourOutcome, TourSearch};
pub use crate::solution::{Tour, TourReport};
