//! Tour search: Warnsdorff selection, the bounded-backtracking driver, and an exhaustive
//! reference solver.

pub mod exhaustive;
pub mod resources;
pub mod select;
pub mod tour;
