//! Low-level, allocation-free primitives.
//!
//! - [`coord`]: `(row, col)` coordinates and the fixed knight step table.

pub mod coord;
