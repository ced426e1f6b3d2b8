//! Built-in tour requests (the `--demo` set).

use crate::scenario::TourRequest;

/// A named, titled request.
#[derive(Debug, Clone, Copy)]
pub struct BuiltInScenario {
    pub name: &'static str,
    pub title: &'static str,
    pub request: TourRequest,
}

/// 8x8 from the corner with no undos: the classic pure-greedy tour.
pub fn classic_greedy() -> BuiltInScenario {
    BuiltInScenario {
        name: "classic_greedy",
        title: "Classic greedy, no backtracking",
        request: TourRequest::new(8, 8, 0, 0, 0),
    }
}

/// 8x8 from an inner square with a small undo budget.
pub fn small_backtracking() -> BuiltInScenario {
    BuiltInScenario {
        name: "small_backtracking",
        title: "Small backtracking",
        request: TourRequest::new(8, 8, 10, 3, 4),
    }
}

/// 6x5 from the centre with a larger budget.
///
/// A tour from (2,2) exists, but the greedy order does not reach one within 50 undos.
/// The budget is above the 30 cells of the board, so this request does not pass
/// [`InputLimits::check`](crate::scenario::InputLimits::check); the demo runs it unchecked.
pub fn larger_budget() -> BuiltInScenario {
    BuiltInScenario {
        name: "larger_budget",
        title: "Larger k",
        request: TourRequest::new(6, 5, 50, 2, 2),
    }
}

/// The demo set, in run order.
pub fn all() -> Vec<BuiltInScenario> {
    vec![classic_greedy(), small_backtracking(), larger_budget()]
}

pub fn available_names() -> Vec<&'static str> {
    all().into_iter().map(|s| s.name).collect()
}

pub fn by_name(name: &str) -> Option<BuiltInScenario> {
    all().into_iter().find(|s| s.name == name)
}
