//! The record store
//!
//! `RecordStore` owns every `NearEarthObject` in an arena and keeps the two
//! indices pointing into it. Each ingested row produces one `OrbitPath`,
//! attached to the single NEO registered under the row's name.
//!
//! # Invariants
//!
//! - One NEO per unique name: re-ingesting a name appends to the existing NEO
//! - Every NeoId in the date index is registered in the name index
//! - No mutation after construction

use neodb_core::{NearEarthObject, OrbitPath, RawRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::index::{DateIndex, NameIndex, NeoId};

/// Sizes of a built store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoreStats {
    /// Unique NEOs
    pub neo_count: usize,
    /// Close approaches across all NEOs
    pub orbit_count: usize,
    /// Distinct close approach dates
    pub date_count: usize,
}

/// In-memory snapshot of NEOs and their close approaches
#[derive(Debug, Default)]
pub struct RecordStore {
    neos: Vec<NearEarthObject>,
    by_name: NameIndex,
    by_date: DateIndex,
    orbit_count: usize,
}

impl RecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from raw rows
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = RawRecord>,
    {
        let mut store = RecordStore::new();
        for record in records {
            store.ingest(&record);
        }
        debug!(
            target: "neodb::store",
            neos = store.neos.len(),
            orbits = store.orbit_count,
            dates = store.by_date.len(),
            "Record store built"
        );
        store
    }

    fn ingest(&mut self, record: &RawRecord) {
        let orbit = OrbitPath::from_record(record);
        let date = orbit.close_approach_date.clone();

        let id = match self.by_name.get(&orbit.neo_name) {
            Some(id) => id,
            None => {
                let neo = NearEarthObject::from_record(record);
                let id = NeoId(self.neos.len());
                self.by_name.insert(&orbit.neo_name, id);
                self.neos.push(neo);
                id
            }
        };

        self.neos[id.as_usize()].update_orbits(orbit);
        self.orbit_count += 1;
        self.by_date.push(&date, id);
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Resolve a handle issued by this store
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a different store.
    pub fn neo(&self, id: NeoId) -> &NearEarthObject {
        &self.neos[id.as_usize()]
    }

    /// Handle for a name
    pub fn neo_id(&self, name: &str) -> Option<NeoId> {
        self.by_name.get(name)
    }

    /// NEO registered under a name
    pub fn neo_by_name(&self, name: &str) -> Option<&NearEarthObject> {
        self.neo_id(name).map(|id| self.neo(id))
    }

    /// Owner of an orbit path, resolved through the name index
    pub fn owner_of(&self, orbit: &OrbitPath) -> Option<&NearEarthObject> {
        self.neo_by_name(&orbit.neo_name)
    }

    /// All NEOs, in first-ingested order
    pub fn neos(&self) -> impl Iterator<Item = &NearEarthObject> {
        self.neos.iter()
    }

    /// The date index
    pub fn dates(&self) -> &DateIndex {
        &self.by_date
    }

    /// NEOs with a close approach on exactly `date`
    ///
    /// A NEO appears once per close approach on that date.
    pub fn neos_on<'a>(&'a self, date: &str) -> impl Iterator<Item = &'a NearEarthObject> + 'a {
        self.by_date.on(date).iter().map(move |id| self.neo(*id))
    }

    /// NEOs with a close approach on a date in `[start, end]`, in date order
    pub fn neos_between<'a>(
        &'a self,
        start: &str,
        end: &str,
    ) -> impl Iterator<Item = &'a NearEarthObject> + 'a {
        self.by_date.between(start, end).map(move |id| self.neo(id))
    }

    // ========================================================================
    // Stats
    // ========================================================================

    /// Number of unique NEOs
    pub fn neo_count(&self) -> usize {
        self.neos.len()
    }

    /// Number of close approaches
    pub fn orbit_count(&self) -> usize {
        self.orbit_count
    }

    /// Number of distinct dates
    pub fn date_count(&self) -> usize {
        self.by_date.len()
    }

    /// All sizes at once
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            neo_count: self.neo_count(),
            orbit_count: self.orbit_count(),
            date_count: self.date_count(),
        }
    }

    /// Check if the store holds no NEOs
    pub fn is_empty(&self) -> bool {
        self.neos.is_empty()
    }
}
