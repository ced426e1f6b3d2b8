//! Rectangular boards: dimensions, visit orders and knight adjacency.
//!
//! - [`Dims`]: the `rows × cols` rectangle with dense row-major indexing.
//! - [`Board`]: per-cell visit order (`0` = unvisited, otherwise 1-based).
//! - [`degree`]: the incrementally maintained count of unvisited knight neighbours.

pub mod degree;

use crate::core::coord::{Coord, KNIGHT_STEPS};
use crate::scenario::TourError;

/// Largest side accepted by the core. Keeps every coordinate inside `i32` and every visit
/// order inside `u32`.
pub const MAX_SIDE: usize = 1 << 15;

/// A rectangular board's shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dims {
    rows: usize,
    cols: usize,
}

impl Dims {
    pub fn new(rows: usize, cols: usize) -> Result<Self, TourError> {
        if rows == 0 || cols == 0 {
            return Err(TourError::InvalidRequest {
                reason: format!("board must have at least one cell (got {rows}x{cols})"),
            });
        }
        if rows > MAX_SIDE || cols > MAX_SIDE {
            return Err(TourError::InvalidRequest {
                reason: format!("board side exceeds {MAX_SIDE} (got {rows}x{cols})"),
            });
        }
        Ok(Self { rows, cols })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.row >= 0 && c.col >= 0 && (c.row as usize) < self.rows && (c.col as usize) < self.cols
    }

    /// Row-major index of an on-board coordinate.
    #[inline]
    pub fn index(&self, c: Coord) -> usize {
        debug_assert!(self.contains(c), "{c:?} is off a {}x{} board", self.rows, self.cols);
        (c.row as usize) * self.cols + (c.col as usize)
    }

    #[inline]
    pub fn coord_of(&self, idx: usize) -> Coord {
        Coord::new((idx / self.cols) as i32, (idx % self.cols) as i32)
    }

    /// All cells in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.cell_count()).map(move |i| self.coord_of(i))
    }

    /// On-board knight neighbours of `c`, in [`KNIGHT_STEPS`] order.
    #[inline]
    pub fn knight_neighbours(&self, c: Coord) -> impl Iterator<Item = Coord> + '_ {
        KNIGHT_STEPS
            .iter()
            .map(move |&step| c + step)
            .filter(move |&n| self.contains(n))
    }
}

/// Visit orders for every cell of a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    dims: Dims,
    order: Vec<u32>,
}

impl Board {
    pub fn new(dims: Dims) -> Self {
        Self {
            dims,
            order: vec![0; dims.cell_count()],
        }
    }

    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    #[inline]
    pub fn is_visited(&self, c: Coord) -> bool {
        self.order[self.dims.index(c)] != 0
    }

    /// On-board and not yet visited.
    #[inline]
    pub fn is_open(&self, c: Coord) -> bool {
        self.dims.contains(c) && !self.is_visited(c)
    }

    /// The 1-based visit order of `c`, if visited.
    #[inline]
    pub fn order_at(&self, c: Coord) -> Option<u32> {
        match self.order[self.dims.index(c)] {
            0 => None,
            n => Some(n),
        }
    }

    #[inline]
    pub fn mark_visited(&mut self, c: Coord, order: u32) {
        debug_assert!(order > 0);
        let idx = self.dims.index(c);
        debug_assert_eq!(self.order[idx], 0, "{c:?} visited twice");
        self.order[idx] = order;
    }

    #[inline]
    pub fn mark_unvisited(&mut self, c: Coord) {
        let idx = self.dims.index(c);
        debug_assert_ne!(self.order[idx], 0, "{c:?} was not visited");
        self.order[idx] = 0;
    }

    /// Visit orders row by row.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.order.chunks(self.dims.cols)
    }
}

/// Brute-force count of `c`'s unvisited knight neighbours.
///
/// The degree grid keeps this number incrementally; this is the reference it must agree with.
pub fn unvisited_neighbour_count(board: &Board, c: Coord) -> u8 {
    board
        .dims()
        .knight_neighbours(c)
        .filter(|&n| !board.is_visited(n))
        .count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_and_centre_neighbour_counts() {
        let dims = Dims::new(8, 8).unwrap();
        assert_eq!(dims.knight_neighbours(Coord::new(0, 0)).count(), 2);
        assert_eq!(dims.knight_neighbours(Coord::new(0, 1)).count(), 3);
        assert_eq!(dims.knight_neighbours(Coord::new(3, 4)).count(), 8);
    }

    #[test]
    fn index_roundtrips_row_major() {
        let dims = Dims::new(5, 7).unwrap();
        for (i, c) in dims.coords().enumerate() {
            assert_eq!(dims.index(c), i);
        }
        assert_eq!(dims.coord_of(8), Coord::new(1, 1));
    }

    #[test]
    fn empty_board_is_rejected() {
        assert!(Dims::new(0, 5).is_err());
        assert!(Dims::new(5, 0).is_err());
    }

    #[test]
    fn visit_orders_are_recorded_and_cleared() {
        let mut board = Board::new(Dims::new(5, 5).unwrap());
        let c = Coord::new(2, 3);
        assert!(board.is_open(c));
        board.mark_visited(c, 4);
        assert_eq!(board.order_at(c), Some(4));
        assert!(!board.is_open(c));
        board.mark_unvisited(c);
        assert_eq!(board.order_at(c), None);
        assert!(!board.is_open(Coord::new(-1, 0)));
    }
}
