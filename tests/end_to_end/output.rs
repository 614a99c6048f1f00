//! Writing results.

use crate::common::*;
use neodb::{Command, Output, QueryParams};

#[test]
fn csv_file_writes_one_row_per_neo() {
    let ws = Workspace::with_data(&week_rows());
    let executor = ws.open();
    let output = executor
        .execute(Command::Search {
            query: QueryParams::between("2021-03-01", "2021-03-07")
                .with_filter("is_hazardous:=:True"),
        })
        .unwrap();

    assert!(executor.write("csv_file", &output));

    let written = std::fs::read_to_string(ws.output_path()).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(
        lines,
        vec![
            "id,name,diameter_min_km,orbits,orbit_dates",
            "2,beta,1.2,\"[beta, beta]\",\"[2021-03-01, 2021-03-06]\"",
            "4,delta,2.5,[delta],[2021-03-04]",
            "6,zeta,0.01,[zeta],[2021-03-07]",
        ]
    );
}

#[test]
fn csv_file_of_paths_writes_owner_rows() {
    let ws = Workspace::with_data(&three_rows());
    let executor = ws.open();
    let output = executor
        .execute(Command::Search {
            query: QueryParams::on("2020-01-03").returning("Path"),
        })
        .unwrap();
    assert!(matches!(output, Output::Paths(_)));

    assert!(executor.write("csv_file", &output));
    let written = std::fs::read_to_string(ws.output_path()).unwrap();
    assert!(written.lines().nth(1).unwrap().starts_with("3542519,(2010 PK9),0.12,"));
}

#[test]
fn csv_file_of_paths_writes_each_owner_once() {
    let ws = Workspace::with_data(&three_rows());
    let executor = ws.open();
    let output = executor
        .execute(Command::Search {
            query: QueryParams::between("2020-01-01", "2020-01-03").returning("Path"),
        })
        .unwrap();
    assert!(output.len() >= 3);
    assert_eq!(executor.csv_row_count(&output), 2);

    assert!(executor.write("csv_file", &output));
    let written = std::fs::read_to_string(ws.output_path()).unwrap();
    let rows: Vec<&str> = written.lines().skip(1).collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].starts_with("2000433,433 Eros,"));
    assert!(rows[1].starts_with("3542519,(2010 PK9),"));
}

#[test]
fn csv_file_overwrites_previous_results() {
    let ws = Workspace::with_data(&three_rows());
    let executor = ws.open();
    let all = executor
        .execute(Command::Search {
            query: QueryParams::between("2020-01-01", "2020-01-03"),
        })
        .unwrap();
    let none = executor
        .execute(Command::Search {
            query: QueryParams::on("1999-01-01"),
        })
        .unwrap();

    assert!(executor.write("csv_file", &all));
    assert!(executor.write("csv_file", &none));
    let written = std::fs::read_to_string(ws.output_path()).unwrap();
    assert_eq!(written.lines().count(), 1);
}

#[test]
fn unknown_format_is_reported_not_raised() {
    let ws = Workspace::with_data(&three_rows());
    let executor = ws.open();
    assert!(!executor.write("parquet", &Output::Neos(vec![])));
    assert!(!ws.output_path().exists());
}

#[test]
fn outputs_serialize_to_json() {
    let executor = executor_from(&three_rows());
    let output = executor
        .execute(Command::Search {
            query: QueryParams::on("2020-01-03").returning("Path"),
        })
        .unwrap();
    let json = serde_json::to_value(&output).unwrap();
    assert_eq!(json["Paths"][0]["neo_name"], "(2010 PK9)");
    assert_eq!(json["Paths"][0]["close_approach_date"], "2020-01-03");
}
