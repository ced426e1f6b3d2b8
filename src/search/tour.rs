//! The tour driver: advance greedily, undo within a fixed budget, stop when the board is full or
//! the search is declared hopeless.
//!
//! [`TourSearch`] is an explicit state machine. [`TourSearch::step`] performs exactly one
//! transition (one advance or one undo), so a harness can inspect the board and degree grid
//! between transitions; [`TourSearch::run`] steps to a terminal state.

use serde::Serialize;
use tracing::{debug, info, trace};

use crate::board::degree::{DegreeGrid, VisitChange};
use crate::board::{Board, Dims};
use crate::core::coord::Coord;
use crate::scenario::{TourError, TourRequest};
use crate::search::resources::{ResourceLimits, ResourceTracker};
use crate::search::select::select_next;
use crate::solution::Tour;

/// Why a search gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    /// Stuck with every allowed undo already spent.
    BudgetExhausted,
    /// Stuck on the start square itself; there is nothing left to undo.
    RetreatedToStart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Searching,
    Succeeded,
    /// No tour found under this budget. Not a proof that none exists.
    Failed(FailureReason),
}

impl SearchState {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != SearchState::Searching
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    pub advances: u64,
    pub backtracks: u64,
    /// Longest path reached at any point.
    pub peak_depth: usize,
}

/// Result of a finished search. `tour` is `Some` exactly when `state` is `Succeeded`.
#[derive(Debug, Clone)]
pub struct TourOutcome {
    pub request: TourRequest,
    pub state: SearchState,
    pub tour: Option<Tour>,
    pub stats: SearchStats,
}

#[derive(Debug, Clone)]
pub struct TourSearch {
    request: TourRequest,
    dims: Dims,
    board: Board,
    degrees: DegreeGrid,
    path: Vec<Coord>,
    tracker: ResourceTracker,
    state: SearchState,
    peak_depth: usize,
}

impl TourSearch {
    /// Places the start square and prepares the search.
    pub fn new(request: &TourRequest) -> Result<Self, TourError> {
        let dims = request.dims()?;
        let limits = ResourceLimits::default().with_backtracks(request.backtrack_limit);

        let mut search = Self {
            request: *request,
            dims,
            board: Board::new(dims),
            degrees: DegreeGrid::initialize(dims),
            path: Vec::with_capacity(dims.cell_count()),
            tracker: ResourceTracker::new(limits),
            state: SearchState::Searching,
            peak_depth: 0,
        };
        search.visit(request.start());
        if search.is_full() {
            search.state = SearchState::Succeeded;
        }
        Ok(search)
    }

    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn degrees(&self) -> &DegreeGrid {
        &self.degrees
    }

    #[inline]
    pub fn path(&self) -> &[Coord] {
        &self.path
    }

    /// The path tail. The start square is never undone, so the path is never empty.
    #[inline]
    pub fn current(&self) -> Coord {
        self.path[self.path.len() - 1]
    }

    pub fn stats(&self) -> SearchStats {
        let counts = self.tracker.counts();
        SearchStats {
            advances: counts.advances,
            backtracks: counts.backtracks,
            peak_depth: self.peak_depth,
        }
    }

    /// One transition. Terminal states are sticky.
    pub fn step(&mut self) -> SearchState {
        if self.state.is_terminal() {
            return self.state;
        }

        match select_next(self.current(), &self.board, &self.degrees) {
            Some(next) => {
                self.visit(next);
                self.tracker.record_advance();
                trace!(row = next.row, col = next.col, depth = self.path.len(), "advance");
                if self.is_full() {
                    self.state = SearchState::Succeeded;
                }
            }
            None => self.backtrack(),
        }
        self.state
    }

    pub fn run(mut self) -> TourOutcome {
        while !self.state.is_terminal() {
            self.step();
        }

        let stats = self.stats();
        info!(
            rows = self.dims.rows(),
            cols = self.dims.cols(),
            state = ?self.state,
            advances = stats.advances,
            backtracks = stats.backtracks,
            peak_depth = stats.peak_depth,
            "tour search finished"
        );

        let tour = match self.state {
            SearchState::Succeeded => Some(Tour::from_search(self.dims, self.path)),
            _ => None,
        };
        TourOutcome {
            request: self.request,
            state: self.state,
            tour,
            stats,
        }
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.path.len() == self.dims.cell_count()
    }

    fn visit(&mut self, c: Coord) {
        let order = self.path.len() as u32 + 1;
        self.board.mark_visited(c, order);
        self.degrees
            .adjust_on_visitation_change(c, VisitChange::Visited);
        self.path.push(c);
        self.peak_depth = self.peak_depth.max(self.path.len());
    }

    fn backtrack(&mut self) {
        if self.path.len() <= 1 {
            debug!("stuck on the start square");
            self.state = SearchState::Failed(FailureReason::RetreatedToStart);
            return;
        }
        if let Err(err) = self.tracker.bump_backtracks("tour_backtrack") {
            debug!(depth = self.path.len(), %err, "stuck with no undo left");
            self.state = SearchState::Failed(FailureReason::BudgetExhausted);
            return;
        }

        let Some(undone) = self.path.pop() else {
            return;
        };
        self.board.mark_unvisited(undone);
        self.degrees
            .adjust_on_visitation_change(undone, VisitChange::Unvisited);
        debug!(
            row = undone.row,
            col = undone.col,
            depth = self.path.len(),
            backtracks = self.tracker.counts().backtracks,
            "backtrack"
        );
    }
}

/// Runs a search to completion.
pub fn search_tour(request: &TourRequest) -> Result<TourOutcome, TourError> {
    Ok(TourSearch::new(request)?.run())
}

/// Finds a tour of a `rows × cols` board from `(start_row, start_col)` with at most
/// `backtrack_limit` undos.
///
/// `Ok(None)` means no tour was found under this budget; `Err` only reports a request the search
/// cannot run on (empty board, start off the board).
pub fn find_tour(
    rows: usize,
    cols: usize,
    backtrack_limit: u64,
    start_row: usize,
    start_col: usize,
) -> Result<Option<Tour>, TourError> {
    let req = TourRequest::new(rows, cols, backtrack_limit, start_row, start_col);
    Ok(search_tour(&req)?.tour)
}
