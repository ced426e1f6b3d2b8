use crate::board::Dims;
use crate::core::coord::Coord;

/// Which way a square's visited status just flipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitChange {
    /// Unvisited -> visited: one fewer open target for each neighbour.
    Visited,
    /// Visited -> unvisited: one more open target for each neighbour.
    Unvisited,
}

/// Per-cell count of unvisited knight neighbours.
///
/// Built once from the board shape, then only adjusted: every visit and every undo must be
/// reported exactly once through [`DegreeGrid::adjust_on_visitation_change`]. A missed or doubled
/// call leaves the grid wrong for the rest of the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegreeGrid {
    dims: Dims,
    degrees: Vec<u8>,
}

impl DegreeGrid {
    /// Degrees of an empty board: on-board knight neighbours per cell.
    pub fn initialize(dims: Dims) -> Self {
        let degrees = dims
            .coords()
            .map(|c| dims.knight_neighbours(c).count() as u8)
            .collect();
        Self { dims, degrees }
    }

    #[inline]
    pub fn degree(&self, c: Coord) -> u8 {
        self.degrees[self.dims.index(c)]
    }

    pub fn adjust_on_visitation_change(&mut self, at: Coord, change: VisitChange) {
        let dims = self.dims;
        for n in dims.knight_neighbours(at) {
            let d = &mut self.degrees[dims.index(n)];
            match change {
                VisitChange::Visited => {
                    debug_assert!(*d > 0, "degree underflow at {n:?}");
                    *d -= 1;
                }
                VisitChange::Unvisited => {
                    debug_assert!(*d < 8, "degree overflow at {n:?}");
                    *d += 1;
                }
            }
        }
    }
}
