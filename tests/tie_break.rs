use knights_tour::board::degree::{DegreeGrid, VisitChange};
use knights_tour::board::{Board, Dims};
use knights_tour::core::coord::Coord;
use knights_tour::search::select::{candidates, onward_key, select_next, Onward};

fn after_first_square(rows: usize, cols: usize, start: Coord) -> (Board, DegreeGrid) {
    let dims = Dims::new(rows, cols).unwrap();
    let mut board = Board::new(dims);
    let mut degrees = DegreeGrid::initialize(dims);
    board.mark_visited(start, 1);
    degrees.adjust_on_visitation_change(start, VisitChange::Visited);
    (board, degrees)
}

#[test]
fn secondary_key_beats_lexicographic_order() {
    // 5 rows x 6 cols, knight on (0,0): both targets have 5 onward moves.
    let (board, degrees) = after_first_square(5, 6, Coord::ORIGIN);

    let cands = candidates(Coord::ORIGIN, &board, &degrees);
    assert_eq!(cands.len(), 2);
    assert!(cands.iter().all(|c| c.degree == 5));

    // (2,1) can reach (4,0), which has only 2 exits; (1,2)'s tightest successor has 3.
    assert_eq!(onward_key(Coord::new(1, 2), &board, &degrees), Onward::Degree(3));
    assert_eq!(onward_key(Coord::new(2, 1), &board, &degrees), Onward::Degree(2));

    assert_eq!(
        select_next(Coord::ORIGIN, &board, &degrees),
        Some(Coord::new(2, 1))
    );
}

#[test]
fn full_tie_falls_back_to_row_then_column() {
    // On 8x8 the two corner exits are mirror images: equal on both keys.
    let (board, degrees) = after_first_square(8, 8, Coord::ORIGIN);

    assert_eq!(onward_key(Coord::new(1, 2), &board, &degrees), Onward::Degree(4));
    assert_eq!(onward_key(Coord::new(2, 1), &board, &degrees), Onward::Degree(4));
    assert_eq!(
        select_next(Coord::ORIGIN, &board, &degrees),
        Some(Coord::new(1, 2))
    );
}

#[test]
fn stranded_candidates_tie_on_both_keys() {
    // A candidate without open successors has degree 0, so `Stranded` only ever meets other
    // stranded candidates. Fill a 4x4 board except the two exits of (0,0).
    let dims = Dims::new(4, 4).unwrap();
    let mut board = Board::new(dims);
    let mut degrees = DegreeGrid::initialize(dims);
    let exits = [Coord::new(1, 2), Coord::new(2, 1)];

    let mut order = 0;
    for c in dims.coords().filter(|c| !exits.contains(c)) {
        order += 1;
        board.mark_visited(c, order);
        degrees.adjust_on_visitation_change(c, VisitChange::Visited);
    }

    for &e in &exits {
        assert_eq!(degrees.degree(e), 0);
        assert_eq!(onward_key(e, &board, &degrees), Onward::Stranded);
    }
    assert_eq!(
        select_next(Coord::ORIGIN, &board, &degrees),
        Some(Coord::new(1, 2))
    );
}
