//! Entity types for NeoDB
//!
//! - [`NearEarthObject`]: one per unique name, owns its orbit paths
//! - [`OrbitPath`]: a close-approach event, refers back to its owner by name
//!
//! An `OrbitPath` never holds a pointer to its owner. The owner is found by
//! looking `neo_name` up in the record store's identity index.

pub mod neo;
pub mod orbit;

pub use neo::NearEarthObject;
pub use orbit::OrbitPath;
