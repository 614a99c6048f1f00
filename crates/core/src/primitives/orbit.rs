//! Close-approach events

use serde::{Deserialize, Serialize};
use std::fmt;

use super::neo::UNKNOWN_NAME;
use crate::field::{EntityKind, Field, FieldValue, Filterable};
use crate::record::{columns, RawRecord};

/// A single recorded close approach of a NEO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitPath {
    /// Name of the owning NEO (lookup key into the identity index)
    pub neo_name: String,
    /// Miss distance in kilometers
    pub miss_distance_kilometers: f64,
    /// Close approach date, ordered lexicographically
    pub close_approach_date: String,
}

impl OrbitPath {
    /// Create an orbit path
    pub fn new(
        neo_name: impl Into<String>,
        miss_distance_kilometers: f64,
        close_approach_date: impl Into<String>,
    ) -> Self {
        OrbitPath {
            neo_name: neo_name.into(),
            miss_distance_kilometers,
            close_approach_date: close_approach_date.into(),
        }
    }

    /// Build from the event columns of a raw row.
    ///
    /// Missing or unparsable distances coerce to 0.0. A missing name falls
    /// back to the same placeholder the owning NEO gets.
    pub fn from_record(record: &RawRecord) -> Self {
        OrbitPath {
            neo_name: record.get(columns::NAME).unwrap_or(UNKNOWN_NAME).to_string(),
            miss_distance_kilometers: record.get_f64(columns::MISS_DISTANCE_KM).unwrap_or(0.0),
            close_approach_date: record
                .get(columns::CLOSE_APPROACH_DATE)
                .unwrap_or_default()
                .to_string(),
        }
    }
}

impl Filterable for OrbitPath {
    const KIND: EntityKind = EntityKind::OrbitPath;

    fn field_value(&self, field: Field) -> Option<FieldValue> {
        match field {
            Field::Distance => Some(FieldValue::Number(self.miss_distance_kilometers)),
            Field::Diameter | Field::IsHazardous => None,
        }
    }
}

impl fmt::Display for OrbitPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Object {} missed earth on {} by {} kms",
            self.neo_name, self.close_approach_date, self.miss_distance_kilometers
        )
    }
}
