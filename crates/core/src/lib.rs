//! Core types for NeoDB
//!
//! This crate defines the foundational types used throughout the system:
//! - NearEarthObject: a tracked body, owner of its close approaches
//! - OrbitPath: a single close-approach event
//! - RawRecord: one untyped input row (column name -> string)
//! - Field / EntityKind / Operator / FieldValue: the typed filter vocabulary
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod field;
pub mod primitives;
pub mod record;

pub use error::{Error, Result};
pub use field::{EntityKind, Field, FieldValue, Filterable, Operator, ValueType};
pub use primitives::{NearEarthObject, OrbitPath};
pub use record::RawRecord;
