//! Identity and date indices
//!
//! Both indices hold `NeoId` handles into the record store's NEO arena, so
//! they are two views over the same ingested set:
//! - NameIndex: name → NeoId, one entry per unique name
//! - DateIndex: date → [NeoId], one entry per close approach on that date

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Bound;

/// Handle to a NEO inside one record store
///
/// Only meaningful for the store that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NeoId(pub(crate) usize);

impl NeoId {
    /// Position in the store's NEO arena
    pub fn as_usize(&self) -> usize {
        self.0
    }
}

/// Identity index: name → NeoId
#[derive(Debug, Default)]
pub struct NameIndex {
    index: FxHashMap<String, NeoId>,
}

impl NameIndex {
    /// Create a new empty NameIndex
    pub fn new() -> Self {
        Self {
            index: FxHashMap::default(),
        }
    }

    /// Register a name
    ///
    /// Returns the id already registered under `name`, if any, leaving it
    /// unchanged.
    pub fn insert(&mut self, name: &str, id: NeoId) -> Option<NeoId> {
        if let Some(existing) = self.index.get(name) {
            return Some(*existing);
        }
        self.index.insert(name.to_string(), id);
        None
    }

    /// Look up a name
    pub fn get(&self, name: &str) -> Option<NeoId> {
        self.index.get(name).copied()
    }

    /// Check if the index is empty
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of unique names
    pub fn len(&self) -> usize {
        self.index.len()
    }
}

/// Date index: close approach date → NeoIds
///
/// A NEO is appended once per close approach, so it can appear several
/// times under one date and under many dates. Dates are kept sorted so
/// range scans follow the date token's natural (lexicographic) order.
#[derive(Debug, Default)]
pub struct DateIndex {
    index: BTreeMap<String, Vec<NeoId>>,
}

impl DateIndex {
    /// Create a new empty DateIndex
    pub fn new() -> Self {
        Self {
            index: BTreeMap::new(),
        }
    }

    /// Append a NEO under a date, creating the date's entry if absent
    pub fn push(&mut self, date: &str, id: NeoId) {
        match self.index.get_mut(date) {
            Some(ids) => ids.push(id),
            None => {
                self.index.insert(date.to_string(), vec![id]);
            }
        }
    }

    /// NEOs recorded on exactly `date`
    pub fn on(&self, date: &str) -> &[NeoId] {
        self.index.get(date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// NEOs recorded on any date in `[start, end]`, in date order
    ///
    /// An inverted range yields nothing.
    pub fn between<'a>(&'a self, start: &str, end: &str) -> impl Iterator<Item = NeoId> + 'a {
        // BTreeMap::range panics on start > end
        let range = (start <= end).then(|| {
            self.index
                .range::<str, _>((Bound::Included(start), Bound::Included(end)))
        });
        range
            .into_iter()
            .flatten()
            .flat_map(|(_, ids)| ids.iter().copied())
    }

    /// All dates, ascending
    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    /// Check if the index is empty
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of distinct dates
    pub fn len(&self) -> usize {
        self.index.len()
    }
}
