//! Near Earth Objects

use serde::{Deserialize, Serialize};
use std::fmt;

use super::orbit::OrbitPath;
use crate::field::{EntityKind, Field, FieldValue, Filterable};
use crate::record::{columns, RawRecord};

/// Name given to rows without a `name` column
pub const UNKNOWN_NAME: &str = "Name not Found";

/// A tracked Near Earth Object and the close approaches recorded for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearEarthObject {
    /// Source identifier
    pub id: String,
    /// Unique name (identity key)
    pub name: String,
    /// Minimum estimated diameter in kilometers
    pub diameter_min_km: f64,
    /// Potentially hazardous flag
    pub is_potentially_hazardous_asteroid: bool,
    /// Close approaches, in ingestion order
    pub orbits: Vec<OrbitPath>,
}

impl NearEarthObject {
    /// Create a NEO with no orbits
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        diameter_min_km: f64,
        is_potentially_hazardous_asteroid: bool,
    ) -> Self {
        NearEarthObject {
            id: id.into(),
            name: name.into(),
            diameter_min_km,
            is_potentially_hazardous_asteroid,
            orbits: Vec::new(),
        }
    }

    /// Build from the object columns of a raw row.
    ///
    /// Unparsable diameters coerce to 0.0 and unparsable flags to `false`.
    pub fn from_record(record: &RawRecord) -> Self {
        NearEarthObject::new(
            record.get(columns::ID).unwrap_or_default(),
            record.get(columns::NAME).unwrap_or(UNKNOWN_NAME),
            record.get_f64(columns::DIAMETER_MIN_KM).unwrap_or(0.0),
            record.get_bool(columns::IS_HAZARDOUS).unwrap_or(false),
        )
    }

    /// Attach a close approach
    pub fn update_orbits(&mut self, orbit: OrbitPath) {
        self.orbits.push(orbit);
    }

    /// Close approach dates, in ingestion order
    pub fn orbit_dates(&self) -> Vec<&str> {
        self.orbits
            .iter()
            .map(|o| o.close_approach_date.as_str())
            .collect()
    }
}

impl Filterable for NearEarthObject {
    const KIND: EntityKind = EntityKind::Neo;

    fn field_value(&self, field: Field) -> Option<FieldValue> {
        match field {
            Field::Diameter => Some(FieldValue::Number(self.diameter_min_km)),
            Field::IsHazardous => Some(FieldValue::Bool(self.is_potentially_hazardous_asteroid)),
            Field::Distance => None,
        }
    }
}

impl fmt::Display for NearEarthObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.orbits.iter().map(|o| o.neo_name.as_str()).collect();
        write!(
            f,
            "Object id {} with name {} orbits: {:?} with orbit_dates: {:?}",
            self.id,
            self.name,
            names,
            self.orbit_dates()
        )
    }
}
