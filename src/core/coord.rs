use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A board square as `(row, col)`.
///
/// Signed so that adding a knight step to an edge square yields an off-board
/// coordinate instead of wrapping; [`crate::board::Dims::contains`] decides membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { row: 0, col: 0 };

    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// True if `other` is exactly one knight move away.
    #[inline]
    pub fn is_knight_step_to(self, other: Coord) -> bool {
        let d = other - self;
        let (dr, dc) = (d.row.abs(), d.col.abs());
        (dr == 1 && dc == 2) || (dr == 2 && dc == 1)
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Self::Output {
        Coord::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Coord;

    #[inline]
    fn sub(self, rhs: Coord) -> Self::Output {
        Coord::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row, self.col)
    }
}

/// The 8 knight steps, in the fixed order every search enumerates them.
pub const KNIGHT_STEPS: [Coord; 8] = [
    Coord { row: -2, col: -1 },
    Coord { row: -2, col: 1 },
    Coord { row: -1, col: -2 },
    Coord { row: -1, col: 2 },
    Coord { row: 1, col: -2 },
    Coord { row: 1, col: 2 },
    Coord { row: 2, col: -1 },
    Coord { row: 2, col: 1 },
];
