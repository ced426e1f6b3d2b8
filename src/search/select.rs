//! Warnsdorff move selection.
//!
//! From the current square the selector picks, among unvisited knight targets:
//!
//! 1. the target with the fewest unvisited onward moves (its current degree);
//! 2. on a tie, the target whose *own* least-constrained successor has the smallest degree,
//!    evaluated against the board as it stands now;
//! 3. on a further tie, the smallest `(row, col)`.
//!
//! Each stage only looks at the survivors of the previous one.

use crate::board::degree::DegreeGrid;
use crate::board::Board;
use crate::core::coord::Coord;

/// A legal, unvisited knight target together with its current degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub at: Coord,
    pub degree: u8,
}

/// Secondary key: the smallest degree among a candidate's unvisited successors.
///
/// `Stranded` (no unvisited successor at all) orders after every real degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Onward {
    Degree(u8),
    Stranded,
}

/// Unvisited knight targets of `current`, in knight-step order.
pub fn candidates(current: Coord, board: &Board, degrees: &DegreeGrid) -> Vec<Candidate> {
    board
        .dims()
        .knight_neighbours(current)
        .filter(|&n| !board.is_visited(n))
        .map(|at| Candidate {
            at,
            degree: degrees.degree(at),
        })
        .collect()
}

/// The secondary key of `at` against the current board.
pub fn onward_key(at: Coord, board: &Board, degrees: &DegreeGrid) -> Onward {
    board
        .dims()
        .knight_neighbours(at)
        .filter(|&n| !board.is_visited(n))
        .map(|n| degrees.degree(n))
        .min()
        .map_or(Onward::Stranded, Onward::Degree)
}

/// Picks the next square, or `None` if every knight target is visited or off the board.
pub fn select_next(current: Coord, board: &Board, degrees: &DegreeGrid) -> Option<Coord> {
    let cands = candidates(current, board, degrees);
    let min_degree = cands.iter().map(|c| c.degree).min()?;

    let mut tied: Vec<Coord> = cands
        .iter()
        .filter(|c| c.degree == min_degree)
        .map(|c| c.at)
        .collect();
    if tied.len() == 1 {
        return tied.pop();
    }

    tied.into_iter()
        .map(|at| (onward_key(at, board, degrees), at))
        .min()
        .map(|(_, at)| at)
}
