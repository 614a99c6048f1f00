//! Search infrastructure for NeoDB
//!
//! This crate provides:
//! - QueryParams / QueryDescriptor: raw request → validated query
//! - Filter: one typed `field <op> value` predicate
//! - NeoSearcher: date scan, filtering, NEO ↔ orbit path resolution,
//!   dedup and truncation
//!
//! # Usage
//!
//! ```
//! use neodb_search::{search, QueryParams};
//! use neodb_storage::load_from_reader;
//!
//! let csv = "name,close_approach_date,miss_distance_kilometers\n\
//!            eros,2020-01-01,100\n";
//! let store = load_from_reader(csv.as_bytes(), "inline").unwrap();
//! let results = search(&store, &QueryParams::on("2020-01-01")).unwrap();
//! assert_eq!(results.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod filter;
pub mod query;
pub mod searcher;

use neodb_core::Result;
use neodb_storage::RecordStore;

pub use filter::Filter;
pub use query::{DateSearch, QueryDescriptor, QueryParams, DEFAULT_RESULT_LIMIT};
pub use searcher::{dedup_by_identity, NeoSearcher, SearchResponse, SearchResults, SearchStats};

/// Build a query from raw parameters and run it
///
/// # Errors
///
/// Fails only when the parameters do not build (see
/// [`QueryDescriptor::build`]); an empty match is `Ok`.
pub fn search<'a>(store: &'a RecordStore, params: &QueryParams) -> Result<SearchResults<'a>> {
    let query = QueryDescriptor::build(params)?;
    Ok(NeoSearcher::new(store).get_objects(&query))
}
