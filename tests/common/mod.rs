//! Shared test utilities for all integration test suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from a suite's
//! main.rs.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use neodb::{Executor, NeoConfig, Output, RecordStore};
use tempfile::TempDir;

/// CSV header in the column order of the NASA close approach export.
pub const HEADER: &str = "id,neo_reference_id,name,estimated_diameter_min_kilometers,estimated_diameter_max_kilometers,is_potentially_hazardous_asteroid,close_approach_date,miss_distance_kilometers,orbiting_body";

/// Three close approaches of two NEOs.
///
/// - 2000433 / 433 Eros: 2020-01-01 and 2020-01-02, not hazardous
/// - 3542519 / (2010 PK9): 2020-01-03, hazardous
pub fn three_rows() -> String {
    [
        HEADER,
        "2000433,2000433,433 Eros,10.1,22.6,False,2020-01-01,26730000.5,Earth",
        "2000433,2000433,433 Eros,10.1,22.6,False,2020-01-02,31000000.0,Earth",
        "3542519,3542519,(2010 PK9),0.12,0.27,True,2020-01-03,4500000.25,Earth",
    ]
    .join("\n")
}

/// A week of approaches for six NEOs, some seen on several dates.
pub fn week_rows() -> String {
    let rows = [
        "1,1,alpha,0.05,0.1,False,2021-03-01,7000000,Earth",
        "2,2,beta,1.2,2.6,True,2021-03-01,900000,Earth",
        "3,3,gamma,0.3,0.7,False,2021-03-02,15000000,Earth",
        "1,1,alpha,0.05,0.1,False,2021-03-03,4000000,Earth",
        "4,4,delta,2.5,5.5,True,2021-03-04,45000000,Earth",
        "5,5,epsilon,0.8,1.7,False,2021-03-05,2500000,Earth",
        "2,2,beta,1.2,2.6,True,2021-03-06,12000000,Earth",
        "6,6,zeta,0.01,0.03,True,2021-03-07,350000,Earth",
        "3,3,gamma,0.3,0.7,False,2021-03-07,800000,Earth",
    ];
    std::iter::once(HEADER)
        .chain(rows)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Load a store from CSV text.
pub fn store_from(csv: &str) -> RecordStore {
    neodb_storage::load_from_reader(csv.as_bytes(), "fixture").unwrap()
}

/// Executor over CSV text with default configuration.
pub fn executor_from(csv: &str) -> Executor {
    Executor::new(Arc::new(store_from(csv)), NeoConfig::default())
}

/// A temp directory holding a data file, plus config pointing at it.
pub struct Workspace {
    pub dir: TempDir,
    pub config: NeoConfig,
}

impl Workspace {
    /// Write `csv` to `<tmp>/neos.csv`; csv output goes to `<tmp>/out/results.csv`.
    pub fn with_data(csv: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let data = dir.path().join("neos.csv");
        std::fs::write(&data, csv).unwrap();
        let config = NeoConfig::default()
            .with_data_file(data)
            .with_output_file(dir.path().join("out").join("results.csv"));
        Workspace { dir, config }
    }

    pub fn output_path(&self) -> PathBuf {
        self.config.output_file.clone()
    }

    pub fn open(&self) -> Executor {
        Executor::open(self.config.clone()).unwrap()
    }
}

/// Names of NEO results, in order.
pub fn neo_names(output: &Output) -> Vec<String> {
    match output {
        Output::Neos(neos) => neos.iter().map(|n| n.name.clone()).collect(),
        other => panic!("Expected Output::Neos, got {:?}", other),
    }
}

/// (name, date) of path results, in order.
pub fn path_keys(output: &Output) -> Vec<(String, String)> {
    match output {
        Output::Paths(paths) => paths
            .iter()
            .map(|p| (p.neo_name.clone(), p.close_approach_date.clone()))
            .collect(),
        other => panic!("Expected Output::Paths, got {:?}", other),
    }
}
