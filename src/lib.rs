//! NeoDB - in-memory search over Near Earth Object close approaches
//!
//! NeoDB loads a CSV of close approaches into an immutable record store with
//! a name index and a date index, then answers date-bounded, filtered
//! searches returning either NEOs or their orbit paths.
//!
//! # Quick Start
//!
//! ```ignore
//! use neodb::{Command, Executor, NeoConfig, QueryParams};
//!
//! let executor = Executor::open(NeoConfig::default().with_data_file("data/neos_v2.csv"))?;
//!
//! let output = executor.execute(Command::Search {
//!     query: QueryParams::between("2020-01-01", "2020-01-31")
//!         .with_filter("is_hazardous:=:True")
//!         .with_filter("distance:<:5000000"),
//! })?;
//!
//! executor.write("csv_file", &output);
//! ```
//!
//! # Architecture
//!
//! All operations go through the [`Executor`], which owns the loaded store.
//! Storage, indexing and query internals live in the inner crates; only
//! the executor API is re-exported here.

// Re-export the public API from neodb-executor
pub use neodb_executor::*;
