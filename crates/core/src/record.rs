//! Raw input rows
//!
//! A `RawRecord` is one row of the input data set before any typing: a
//! mapping of column name to the string found in that column. Entity
//! constructors read the columns they care about and ignore the rest.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Column names read from input rows
pub mod columns {
    /// Object identifier
    pub const ID: &str = "id";
    /// Unique object name (identity key)
    pub const NAME: &str = "name";
    /// Minimum diameter estimate in kilometers
    pub const DIAMETER_MIN_KM: &str = "estimated_diameter_min_kilometers";
    /// Hazard flag
    pub const IS_HAZARDOUS: &str = "is_potentially_hazardous_asteroid";
    /// Close approach date (ISO `YYYY-MM-DD`)
    pub const CLOSE_APPROACH_DATE: &str = "close_approach_date";
    /// Miss distance in kilometers
    pub const MISS_DISTANCE_KM: &str = "miss_distance_kilometers";
}

/// One untyped input row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(HashMap<String, String>);

impl RawRecord {
    /// Create an empty record
    pub fn new() -> Self {
        RawRecord(HashMap::new())
    }

    /// Builder: set a column value
    pub fn with(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(column.into(), value.into());
        self
    }

    /// Get a column value, if present
    pub fn get(&self, column: &str) -> Option<&str> {
        self.0.get(column).map(String::as_str)
    }

    /// Get a column as a float, `None` if missing or unparsable
    pub fn get_f64(&self, column: &str) -> Option<f64> {
        self.get(column).and_then(|s| s.trim().parse().ok())
    }

    /// Get a column as a boolean, `None` if missing or unparsable
    pub fn get_bool(&self, column: &str) -> Option<bool> {
        self.get(column).and_then(parse_bool)
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the record has no columns
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        RawRecord(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Parse a boolean the way the source data writes it (`True`/`False`),
/// accepting any ASCII case.
pub fn parse_bool(raw: &str) -> Option<bool> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
