//! Record store command handlers.

use neodb_storage::RecordStore;

use crate::types::StoreInfo;
use crate::{Output, Result};

/// Handle Lookup command: identity index lookup
pub fn lookup(store: &RecordStore, name: &str) -> Result<Output> {
    Ok(Output::MaybeNeo(store.neo_by_name(name).cloned()))
}

/// Handle Info command: store statistics
pub fn info(store: &RecordStore) -> Result<Output> {
    let stats = store.stats();
    let dates = store.dates();
    Ok(Output::StoreInfo(StoreInfo {
        neo_count: stats.neo_count,
        orbit_count: stats.orbit_count,
        date_count: stats.date_count,
        first_date: dates.dates().next().map(str::to_string),
        last_date: dates.dates().last().map(str::to_string),
    }))
}
