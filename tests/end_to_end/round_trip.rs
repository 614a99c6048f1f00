//! The three-row load and query round trip.

use crate::common::*;
use neodb::{Command, Output, QueryParams};

#[test]
fn between_all_three_dates_returns_two_distinct_neos() {
    let ws = Workspace::with_data(&three_rows());
    let executor = ws.open();

    let output = executor
        .execute(Command::Search {
            query: QueryParams::between("2020-01-01", "2020-01-03").with_number("10"),
        })
        .unwrap();
    assert_eq!(neo_names(&output), vec!["433 Eros", "(2010 PK9)"]);
}

#[test]
fn equals_third_date_returns_one_neo() {
    let ws = Workspace::with_data(&three_rows());
    let executor = ws.open();

    let output = executor
        .execute(Command::Search {
            query: QueryParams::on("2020-01-03"),
        })
        .unwrap();
    assert_eq!(neo_names(&output), vec!["(2010 PK9)"]);
}

#[test]
fn shared_name_links_both_orbits() {
    let executor = ws_executor();
    match executor
        .execute(Command::Lookup {
            name: "433 Eros".to_string(),
        })
        .unwrap()
    {
        Output::MaybeNeo(Some(eros)) => {
            assert_eq!(eros.id, "2000433");
            assert_eq!(eros.orbit_dates(), vec!["2020-01-01", "2020-01-02"]);
            assert!(!eros.is_potentially_hazardous_asteroid);
            assert!((eros.diameter_min_km - 10.1).abs() < f64::EPSILON);
        }
        other => panic!("Expected Eros, got {:?}", other),
    }
}

#[test]
fn info_counts() {
    match ws_executor().execute(Command::Info).unwrap() {
        Output::StoreInfo(info) => {
            assert_eq!(info.neo_count, 2);
            assert_eq!(info.orbit_count, 3);
            assert_eq!(info.date_count, 3);
            assert_eq!(info.first_date.as_deref(), Some("2020-01-01"));
            assert_eq!(info.last_date.as_deref(), Some("2020-01-03"));
        }
        other => panic!("Expected StoreInfo, got {:?}", other),
    }
}

fn ws_executor() -> neodb::Executor {
    executor_from(&three_rows())
}
