//! Exhaustive depth-first tour search, used as ground truth for small boards.
//!
//! No heuristic: from each square the knight steps are tried in [`KNIGHT_STEPS`] order and every
//! dead end is undone. Complete, but exponential, so every placed square is charged against
//! `ResourceLimits::max_nodes`.

use tracing::debug;

use crate::board::{Board, Dims};
use crate::core::coord::{Coord, KNIGHT_STEPS};
use crate::scenario::{TourError, TourRequest};
use crate::search::resources::{ResourceLimits, ResourceTracker};
use crate::solution::Tour;

const STAGE: &str = "exhaustive_dfs";

/// Searches every open tour from `start` until one is found.
///
/// `Ok(None)` is a proof that no open tour from `start` exists.
pub fn exhaustive_tour(
    dims: Dims,
    start: Coord,
    limits: ResourceLimits,
) -> Result<Option<Tour>, TourError> {
    if !dims.contains(start) {
        return Err(TourError::InvalidRequest {
            reason: format!("start {start:?} is off the board"),
        });
    }

    let cells = dims.cell_count();
    let mut tracker = ResourceTracker::new(limits);
    let mut board = Board::new(dims);
    let mut path: Vec<Coord> = Vec::with_capacity(cells);
    // next_step[i]: index of the next knight step to try from path[i].
    let mut next_step: Vec<usize> = Vec::with_capacity(cells);

    tracker.bump_nodes(STAGE, 1)?;
    board.mark_visited(start, 1);
    path.push(start);
    next_step.push(0);

    while path.len() < cells {
        let depth = path.len() - 1;
        let from = path[depth];

        let mut advanced = false;
        while next_step[depth] < KNIGHT_STEPS.len() {
            let to = from + KNIGHT_STEPS[next_step[depth]];
            next_step[depth] += 1;
            if board.is_open(to) {
                tracker.bump_nodes(STAGE, 1)?;
                board.mark_visited(to, path.len() as u32 + 1);
                path.push(to);
                next_step.push(0);
                advanced = true;
                break;
            }
        }

        if !advanced {
            if path.len() == 1 {
                debug!(nodes = tracker.counts().nodes, "exhaustive search found no tour");
                return Ok(None);
            }
            if let Some(undone) = path.pop() {
                board.mark_unvisited(undone);
            }
            next_step.pop();
        }
    }

    debug!(nodes = tracker.counts().nodes, "exhaustive search found a tour");
    Ok(Some(Tour::from_search(dims, path)))
}

/// [`exhaustive_tour`] for a request; the request's backtrack limit is ignored.
pub fn exhaustive_tour_for(
    request: &TourRequest,
    limits: ResourceLimits,
) -> Result<Option<Tour>, TourError> {
    exhaustive_tour(request.dims()?, request.start(), limits)
}
