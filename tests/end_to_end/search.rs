//! Search semantics over a week of close approaches.
//!
//! Scan order for the full week (date, then load order):
//! alpha beta | gamma | alpha | delta | epsilon | beta | zeta gamma

use crate::common::*;
use neodb::{Command, Error, Executor, Output, QueryParams};

fn week() -> Executor {
    executor_from(&week_rows())
}

fn search(executor: &Executor, query: QueryParams) -> Output {
    executor.execute(Command::Search { query }).unwrap()
}

fn full_week() -> QueryParams {
    QueryParams::between("2021-03-01", "2021-03-07")
}

#[test]
fn full_week_dedups_in_scan_order() {
    let output = search(&week(), full_week());
    assert_eq!(
        neo_names(&output),
        vec!["alpha", "beta", "gamma", "delta", "epsilon", "zeta"]
    );
}

#[test]
fn number_truncates_after_dedup() {
    let output = search(&week(), full_week().with_number("2"));
    assert_eq!(neo_names(&output), vec!["alpha", "beta"]);
}

#[test]
fn hazard_filter() {
    let output = search(&week(), full_week().with_filter("is_hazardous:=:True"));
    assert_eq!(neo_names(&output), vec!["beta", "delta", "zeta"]);

    let output = search(&week(), full_week().with_filter("is_hazardous:=:False"));
    assert_eq!(neo_names(&output), vec!["alpha", "gamma", "epsilon"]);
}

#[test]
fn diameter_filters() {
    let output = search(&week(), full_week().with_filter("diameter:>:1"));
    assert_eq!(neo_names(&output), vec!["beta", "delta"]);

    let output = search(&week(), full_week().with_filter("diameter:=:0.3"));
    assert_eq!(neo_names(&output), vec!["gamma"]);

    let output = search(&week(), full_week().with_filter("diameter:<=:0.05"));
    assert_eq!(neo_names(&output), vec!["alpha", "zeta"]);
}

#[test]
fn distance_filter_returns_owners() {
    let output = search(&week(), full_week().with_filter("distance:<:1000000"));
    assert_eq!(neo_names(&output), vec!["beta", "gamma", "zeta"]);

    let output = search(&week(), full_week().with_filter("distance:>=:45000000"));
    assert_eq!(neo_names(&output), vec!["delta"]);
}

#[test]
fn distance_filter_returns_matching_paths() {
    let output = search(
        &week(),
        full_week()
            .returning("Path")
            .with_filter("distance:<:1000000"),
    );
    assert_eq!(
        path_keys(&output),
        vec![
            ("beta".to_string(), "2021-03-01".to_string()),
            ("gamma".to_string(), "2021-03-07".to_string()),
            ("zeta".to_string(), "2021-03-07".to_string()),
        ]
    );
}

#[test]
fn distance_filters_are_conjunctive() {
    let output = search(
        &week(),
        full_week()
            .returning("Path")
            .with_filter("distance:>:1000000")
            .with_filter("distance:<:5000000"),
    );
    assert_eq!(
        path_keys(&output),
        vec![
            ("alpha".to_string(), "2021-03-03".to_string()),
            ("epsilon".to_string(), "2021-03-05".to_string()),
        ]
    );
}

#[test]
fn neo_and_distance_filters_combine() {
    let output = search(
        &week(),
        full_week()
            .with_filter("distance:<:1000000")
            .with_filter("is_hazardous:=:True"),
    );
    assert_eq!(neo_names(&output), vec!["beta", "zeta"]);
}

#[test]
fn paths_include_every_orbit_of_matched_neos() {
    // gamma matches on 03-07, so its 03-02 approach is a candidate too
    let output = search(&week(), QueryParams::on("2021-03-07").returning("Path"));
    assert_eq!(
        path_keys(&output),
        vec![
            ("zeta".to_string(), "2021-03-07".to_string()),
            ("gamma".to_string(), "2021-03-02".to_string()),
            ("gamma".to_string(), "2021-03-07".to_string()),
        ]
    );
}

#[test]
fn empty_results() {
    let executor = week();
    assert!(search(&executor, QueryParams::on("2021-04-01")).is_empty());
    assert!(search(&executor, QueryParams::between("2021-03-07", "2021-03-01")).is_empty());
    assert!(search(&executor, full_week().with_filter("diameter:>:100")).is_empty());
    assert!(search(&executor, full_week().with_number("0")).is_empty());
}

#[test]
fn invalid_queries_fail() {
    let executor = week();
    let run = |query: QueryParams| executor.execute(Command::Search { query }).unwrap_err();

    assert!(matches!(
        run(QueryParams::default()),
        Error::Configuration { .. }
    ));
    assert!(run(full_week().returning("Comet")).is_unsupported());
    assert!(run(full_week().with_filter("velocity:>:1")).is_unsupported());
    assert!(matches!(
        run(full_week().with_filter("distance:~:1")),
        Error::InvalidInput { .. }
    ));
    assert!(matches!(
        run(full_week().with_number("many")),
        Error::InvalidInput { .. }
    ));
}
