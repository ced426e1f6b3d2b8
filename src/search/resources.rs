//! Budget tracking for search routines.
//!
//! The tour driver spends a fixed number of undos; the exhaustive solver spends a fixed number of
//! node expansions. Both go through [`ResourceTracker`], which refuses a bump that would cross a
//! limit and reports the refusal as [`TourError::LimitExceeded`].

use serde::Serialize;

use crate::scenario::TourError;

#[derive(Debug, Clone, Copy)]
/// Search budgets.
///
/// - `max_backtracks`: total undos allowed to the tour driver
/// - `max_nodes`: squares the exhaustive solver may place before giving up
pub struct ResourceLimits {
    pub max_backtracks: u64,
    pub max_nodes: u64,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_backtracks: 0,
            max_nodes: 50_000_000,
        }
    }
}

impl ResourceLimits {
    pub fn with_backtracks(mut self, n: u64) -> Self {
        self.max_backtracks = n;
        self
    }

    pub fn with_nodes(mut self, n: u64) -> Self {
        self.max_nodes = n;
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
/// Running counters tracked during a search.
pub struct ResourceCounts {
    pub advances: u64,
    pub backtracks: u64,
    pub nodes: u64,
}

#[derive(Debug, Clone)]
/// Tracks budgets/counters during a search.
pub struct ResourceTracker {
    limits: ResourceLimits,
    counts: ResourceCounts,
}

impl ResourceTracker {
    #[inline]
    pub fn new(limits: ResourceLimits) -> Self {
        Self {
            limits,
            counts: ResourceCounts::default(),
        }
    }

    #[inline]
    pub fn counts(&self) -> ResourceCounts {
        self.counts
    }

    /// Advances are unbounded; they are only counted.
    #[inline]
    pub fn record_advance(&mut self) {
        self.counts.advances += 1;
    }

    /// Claims one undo. Refused, leaving the counter unchanged, once the limit has been spent.
    #[inline]
    pub fn bump_backtracks(&mut self, stage: &'static str) -> Result<(), TourError> {
        Self::bump(
            stage,
            "backtracks",
            1,
            self.limits.max_backtracks,
            &mut self.counts.backtracks,
        )
    }

    #[inline]
    pub fn bump_nodes(&mut self, stage: &'static str, delta: u64) -> Result<(), TourError> {
        Self::bump(
            stage,
            "nodes",
            delta,
            self.limits.max_nodes,
            &mut self.counts.nodes,
        )
    }

    fn bump(
        stage: &'static str,
        metric: &'static str,
        delta: u64,
        limit: u64,
        counter: &mut u64,
    ) -> Result<(), TourError> {
        let observed = counter.saturating_add(delta);
        if observed > limit {
            return Err(TourError::LimitExceeded {
                stage,
                metric,
                limit,
                observed,
            });
        }
        *counter = observed;
        Ok(())
    }
}
