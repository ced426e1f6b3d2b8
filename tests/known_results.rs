use knights_tour::board::Dims;
use knights_tour::core::coord::Coord;
use knights_tour::scenario::TourRequest;
use knights_tour::scenarios;
use knights_tour::search::exhaustive::exhaustive_tour;
use knights_tour::search::resources::ResourceLimits;
use knights_tour::search::tour::{find_tour, search_tour, FailureReason, SearchState};

#[test]
fn greedy_finds_a_full_8x8_tour_from_the_corner_without_backtracking() {
    let out = search_tour(&TourRequest::new(8, 8, 0, 0, 0)).unwrap();
    assert_eq!(out.state, SearchState::Succeeded);
    assert_eq!(out.stats.backtracks, 0);
    assert_eq!(out.stats.advances, 63);

    let tour = out.tour.unwrap();
    assert_eq!(tour.len(), 64);
    assert_eq!(tour.start(), Coord::ORIGIN);
    assert!(tour.verify().is_ok());
    assert_eq!(
        &tour.path()[..6],
        &[
            Coord::new(0, 0),
            Coord::new(1, 2),
            Coord::new(2, 0),
            Coord::new(0, 1),
            Coord::new(1, 3),
            Coord::new(0, 5),
        ]
    );
}

#[test]
fn inner_start_on_8x8_succeeds() {
    let tour = find_tour(8, 8, 10, 3, 4).unwrap().unwrap();
    assert_eq!(tour.start(), Coord::new(3, 4));
    assert!(tour.verify().is_ok());
}

#[test]
fn six_by_five_from_centre_runs_out_of_budget_although_a_tour_exists() {
    let req = TourRequest::new(6, 5, 50, 2, 2);
    let out = search_tour(&req).unwrap();
    assert_eq!(out.state, SearchState::Failed(FailureReason::BudgetExhausted));
    assert!(out.tour.is_none());
    // Each undo lands back on a square whose only choice is the same dead end.
    assert_eq!(out.stats.backtracks, 50);

    let dims = Dims::new(6, 5).unwrap();
    let witness = exhaustive_tour(dims, req.start(), ResourceLimits::default())
        .unwrap()
        .expect("6x5 has an open tour from (2,2)");
    assert_eq!(witness.start(), Coord::new(2, 2));
    assert!(witness.verify().is_ok());
}

#[test]
fn five_by_five_corner_tour_is_found_greedily() {
    let tour = find_tour(5, 5, 0, 0, 0).unwrap().unwrap();
    assert_eq!(tour.len(), 25);
    assert_eq!(
        &tour.path()[..3],
        &[Coord::new(0, 0), Coord::new(1, 2), Coord::new(0, 4)]
    );
}

#[test]
fn five_by_five_from_a_minority_colour_square_is_never_found() {
    // 13 squares share the corner's colour and 12 do not; a tour has to start on the larger set.
    for k in 0..=25 {
        assert!(find_tour(5, 5, k, 0, 1).unwrap().is_none(), "k={k}");
    }

    let dims = Dims::new(5, 5).unwrap();
    let exact = exhaustive_tour(dims, Coord::new(0, 1), ResourceLimits::default()).unwrap();
    assert!(exact.is_none());
}

#[test]
fn one_by_one_board_is_trivially_toured() {
    let tour = find_tour(1, 1, 0, 0, 0).unwrap().unwrap();
    assert_eq!(tour.path(), &[Coord::ORIGIN]);
}

#[test]
fn demo_scenarios_have_the_documented_results() {
    let results: Vec<bool> = scenarios::all()
        .iter()
        .map(|s| search_tour(&s.request).unwrap().tour.is_some())
        .collect();
    assert_eq!(results, vec![true, true, false]);
}
