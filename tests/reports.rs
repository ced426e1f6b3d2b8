use knights_tour::input::parse_request;
use knights_tour::scenario::{InputLimits, TourError, TourRequest};
use knights_tour::search::tour::search_tour;
use knights_tour::solution::{write_listing, TourReport};

fn listing(req: TourRequest) -> String {
    let out = search_tour(&req).unwrap();
    let mut buf = Vec::new();
    write_listing(&mut buf, &out).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn success_listing_has_one_line_per_square() {
    let text = listing(TourRequest::new(8, 8, 0, 0, 0));
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 65);
    assert_eq!(lines[0], "SUCCESS");
    assert_eq!(lines[1], "0 0");
    assert_eq!(lines[2], "1 2");
}

#[test]
fn failure_listing_is_a_single_line() {
    assert_eq!(listing(TourRequest::new(6, 5, 50, 2, 2)), "IMPOSSIBLE\n");
}

#[test]
fn json_report_for_success() {
    let out = search_tour(&TourRequest::new(5, 5, 3, 0, 0)).unwrap();
    let v = serde_json::to_value(TourReport::from_outcome(&out)).unwrap();

    assert_eq!(v["status"], "SUCCESS");
    assert_eq!(v["start"], serde_json::json!([0, 0]));
    assert_eq!(v["moves"].as_array().unwrap().len(), 25);
    assert_eq!(v["stats"]["backtracks"], 0);
    assert!(v.get("failure").is_none());
}

#[test]
fn json_report_for_failure_names_the_reason() {
    let out = search_tour(&TourRequest::new(6, 5, 50, 2, 2)).unwrap();
    let v = serde_json::to_value(TourReport::from_outcome(&out)).unwrap();

    assert_eq!(v["status"], "IMPOSSIBLE");
    assert_eq!(v["failure"], "budget_exhausted");
    assert_eq!(v["stats"]["backtracks"], 50);
    assert!(v["moves"].as_array().unwrap().is_empty());
}

#[test]
fn parsed_input_flows_through_limits_and_search() {
    let req = parse_request("8 8 10\n3 4\n".as_bytes()).unwrap();
    InputLimits::default().check(&req).unwrap();
    assert!(search_tour(&req).unwrap().tour.is_some());
}

#[test]
fn out_of_range_input_is_reported_before_searching() {
    let req = parse_request("4 8 0\n0 0\n".as_bytes()).unwrap();
    let err = InputLimits::default().check(&req).unwrap_err();
    assert!(matches!(err, TourError::OutOfRange { field: "rows", .. }));
    assert_eq!(err.to_string(), "rows must be between 5 and 500 (got 4)");
}
