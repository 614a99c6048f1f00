//! Search command handler.
//!
//! Builds the query descriptor, runs it on the shared record store and
//! copies the borrowed results into an owned [`Output`].

use neodb_search::{NeoSearcher, QueryDescriptor, QueryParams, SearchResults};
use neodb_storage::RecordStore;
use tracing::debug;

use crate::config::NeoConfig;
use crate::{Output, Result};

/// Handle Search command: date scan, filters, dedup, truncate
pub fn search(store: &RecordStore, config: &NeoConfig, mut query: QueryParams) -> Result<Output> {
    if query.number.is_none() {
        query.number = Some(config.default_number.to_string());
    }
    let descriptor = QueryDescriptor::build(&query)?;

    let response = NeoSearcher::new(store).search(&descriptor);
    debug!(
        target: "neodb::executor",
        returned = response.results.len(),
        scanned = response.stats.scanned,
        elapsed_micros = response.stats.elapsed_micros,
        "Search complete"
    );

    Ok(match response.results {
        SearchResults::Neos(neos) => Output::Neos(neos.into_iter().cloned().collect()),
        SearchResults::Paths(paths) => Output::Paths(paths.into_iter().cloned().collect()),
    })
}
