//! End-to-end tests through the public `neodb` API
//!
//! - Loading a CSV file into an executor
//! - Date-bounded searches with NEO and distance filters
//! - Result writing (`display`, `csv_file`)
//! - Configuration from `neodb.toml`

#[path = "../common/mod.rs"]
mod common;

mod config;
mod output;
mod round_trip;
mod search;
