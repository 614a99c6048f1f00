//! Query execution
//!
//! [`NeoSearcher`] runs a [`QueryDescriptor`] against a [`RecordStore`] in
//! one synchronous pass:
//!
//! ```text
//! date index ──scan──▶ NEOs ──NEO filters──▶ NEOs ──expand──▶ orbit paths
//!                                                                 │
//!                                                 distance filters (all, AND)
//!                                                                 │
//!                              owners via name index ◀────────────┤
//!                                        │                        │
//!                                      dedup                    dedup
//!                                        └──── truncate by return kind
//! ```
//!
//! A date with no approaches, or filters that reject everything, produce an
//! empty result. Nothing in here fails.

use neodb_core::{EntityKind, NearEarthObject, OrbitPath};
use neodb_storage::RecordStore;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

use crate::query::{DateSearch, QueryDescriptor};

// ============================================================================
// Results
// ============================================================================

/// Search results, borrowed from the store
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResults<'a> {
    /// NEOs, when the query returns `"NEO"`
    Neos(Vec<&'a NearEarthObject>),
    /// Orbit paths, when the query returns `"Path"`
    Paths(Vec<&'a OrbitPath>),
}

impl<'a> SearchResults<'a> {
    /// Number of results
    pub fn len(&self) -> usize {
        match self {
            SearchResults::Neos(neos) => neos.len(),
            SearchResults::Paths(paths) => paths.len(),
        }
    }

    /// Check if there are no results
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Kind of entity held
    pub fn kind(&self) -> EntityKind {
        match self {
            SearchResults::Neos(_) => EntityKind::Neo,
            SearchResults::Paths(_) => EntityKind::OrbitPath,
        }
    }

    /// The NEOs, or `None` for path results
    pub fn neos(&self) -> Option<&[&'a NearEarthObject]> {
        match self {
            SearchResults::Neos(neos) => Some(neos),
            SearchResults::Paths(_) => None,
        }
    }

    /// The orbit paths, or `None` for NEO results
    pub fn paths(&self) -> Option<&[&'a OrbitPath]> {
        match self {
            SearchResults::Paths(paths) => Some(paths),
            SearchResults::Neos(_) => None,
        }
    }
}

/// Execution statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// NEO entries collected by the date scan (duplicates included)
    pub scanned: usize,
    /// Distinct NEO candidates after all filters
    pub neo_candidates: usize,
    /// Distinct orbit path candidates after all filters
    pub path_candidates: usize,
    /// Wall time in microseconds
    pub elapsed_micros: u64,
}

/// Results plus execution statistics
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResponse<'a> {
    /// Truncated results of the requested kind
    pub results: SearchResults<'a>,
    /// How the search went
    pub stats: SearchStats,
}

// ============================================================================
// NeoSearcher
// ============================================================================

/// Runs queries against one record store
///
/// Stateless: holds only a shared reference to the store, so any number of
/// searchers may run over the same store.
#[derive(Debug, Clone, Copy)]
pub struct NeoSearcher<'a> {
    store: &'a RecordStore,
}

impl<'a> NeoSearcher<'a> {
    /// Create a searcher over a store
    pub fn new(store: &'a RecordStore) -> Self {
        NeoSearcher { store }
    }

    /// Run a query, returning only the results
    pub fn get_objects(&self, query: &QueryDescriptor) -> SearchResults<'a> {
        self.search(query).results
    }

    /// Run a query
    ///
    /// # Flow
    ///
    /// 1. Date scan (duplicates kept)
    /// 2. NEO filters, in order
    /// 3. Expand surviving NEOs into their orbit paths
    /// 4. Distance filters; if any ran, NEOs become the owners of the
    ///    surviving paths
    /// 5. Dedup both candidate sets, first occurrence wins
    /// 6. Truncate the requested kind to `number`
    pub fn search(&self, query: &QueryDescriptor) -> SearchResponse<'a> {
        let start = Instant::now();

        // 1. Date scan
        let mut neos = self.scan_dates(query.date_search());
        let scanned = neos.len();

        // 2. NEO filters
        let (distance_filters, neo_filters): (Vec<_>, Vec<_>) =
            query.filters().iter().partition(|f| f.is_distance());
        for filter in &neo_filters {
            neos = filter.apply(neos);
        }

        // 3. Expansion
        let mut paths: Vec<&'a OrbitPath> = neos
            .iter()
            .copied()
            .flat_map(|neo| neo.orbits.iter())
            .collect();

        // 4. Distance filters
        if !distance_filters.is_empty() {
            for filter in &distance_filters {
                paths = filter.apply(paths);
            }
            neos = paths
                .iter()
                .filter_map(|path| self.store.owner_of(path))
                .collect();
        }

        // 5. Dedup
        let neos = dedup_by_identity(neos);
        let paths = dedup_by_identity(paths);

        debug!(
            target: "neodb::search",
            scanned,
            neo_filters = neo_filters.len(),
            distance_filters = distance_filters.len(),
            neos = neos.len(),
            paths = paths.len(),
            "Search candidates resolved"
        );

        let stats = SearchStats {
            scanned,
            neo_candidates: neos.len(),
            path_candidates: paths.len(),
            elapsed_micros: start.elapsed().as_micros() as u64,
        };

        // 6. Truncate
        let number = query.number();
        let results = match query.return_kind() {
            EntityKind::Neo => SearchResults::Neos(neos.into_iter().take(number).collect()),
            EntityKind::OrbitPath => {
                SearchResults::Paths(paths.into_iter().take(number).collect())
            }
        };

        SearchResponse { results, stats }
    }

    fn scan_dates(&self, date_search: &DateSearch) -> Vec<&'a NearEarthObject> {
        match date_search {
            DateSearch::Equals(date) => self.store.neos_on(date).collect(),
            DateSearch::Between { start, end } => self.store.neos_between(start, end).collect(),
        }
    }
}

/// Drop repeated references to the same entity, keeping first occurrences
///
/// Identity is the address, so equal but distinct entities are both kept.
pub fn dedup_by_identity<T>(items: Vec<&T>) -> Vec<&T> {
    let mut seen = FxHashSet::default();
    items
        .into_iter()
        .filter(|item| seen.insert(*item as *const T))
        .collect()
}
