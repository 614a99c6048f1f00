//! # NeoDB Executor
//!
//! The public API for NeoDB - an in-memory index of Near Earth Objects and
//! their close approaches to Earth.
//!
//! This is the only crate users need to import. It provides:
//! - [`Executor`] - loads the record store and runs commands against it
//! - [`Command`]/[`Output`] - the serializable command interface
//! - [`NeoConfig`] - `neodb.toml` configuration
//! - [`NeoWriter`] - result rendering (`display` or `csv_file`)
//!
//! ## Quick Start
//!
//! ```text
//! use neodb_executor::{Command, Executor, NeoConfig, QueryParams};
//!
//! let executor = Executor::open(NeoConfig::default())?;
//! let output = executor.execute(Command::Search {
//!     query: QueryParams::on("2020-01-01").with_filter("is_hazardous:=:True"),
//! })?;
//! executor.write("display", &output);
//! ```

#![warn(missing_docs)]

mod command;
mod config;
mod executor;
mod output;
mod types;
mod writer;

// Handler modules
mod handlers;

// Test modules
#[cfg(test)]
mod tests;

// =============================================================================
// Public API - Everything users need is re-exported here
// =============================================================================

pub use command::Command;
pub use config::{NeoConfig, CONFIG_FILE_NAME};
pub use executor::Executor;
pub use output::Output;
pub use types::StoreInfo;
pub use writer::{NeoWriter, OutputFormat};

// Re-export the domain and query types so users don't need the inner crates
pub use neodb_core::{EntityKind, Error, Field, NearEarthObject, Operator, OrbitPath, Result};
pub use neodb_search::{DateSearch, QueryDescriptor, QueryParams};
pub use neodb_storage::RecordStore;
