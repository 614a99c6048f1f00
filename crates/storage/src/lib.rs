//! Storage layer for NeoDB
//!
//! This crate implements the in-memory record store:
//! - RecordStore: owns every NearEarthObject (and through them every OrbitPath)
//! - NameIndex: name → NEO, one entry per unique name
//! - DateIndex: close approach date → NEOs with an approach that day (multimap)
//! - load / load_from_reader: all-or-nothing CSV ingestion
//!
//! The store is built once and never mutated afterwards. Share it behind an
//! `Arc` for concurrent read-only queries.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod index;
pub mod loader;
pub mod store;

pub use index::{DateIndex, NameIndex, NeoId};
pub use loader::{load, load_from_reader};
pub use store::{RecordStore, StoreStats};
