//! Output enum for command execution results.
//!
//! Every command produces exactly one output type. The variant depends only
//! on the command (and, for searches, the requested return object); the
//! contents depend on the loaded data.

use neodb_core::{EntityKind, NearEarthObject, OrbitPath};
use serde::{Deserialize, Serialize};

use crate::types::StoreInfo;

/// Successful command execution results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Output {
    /// NEO search results
    Neos(Vec<NearEarthObject>),

    /// Orbit path search results
    Paths(Vec<OrbitPath>),

    /// Lookup result (None if no NEO has that name)
    MaybeNeo(Option<NearEarthObject>),

    /// Store statistics
    StoreInfo(StoreInfo),
}

impl Output {
    /// Number of entities carried
    pub fn len(&self) -> usize {
        match self {
            Output::Neos(neos) => neos.len(),
            Output::Paths(paths) => paths.len(),
            Output::MaybeNeo(neo) => usize::from(neo.is_some()),
            Output::StoreInfo(_) => 0,
        }
    }

    /// Check if no entities are carried
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entity kind carried, if any
    pub fn kind(&self) -> Option<EntityKind> {
        match self {
            Output::Neos(_) | Output::MaybeNeo(_) => Some(EntityKind::Neo),
            Output::Paths(_) => Some(EntityKind::OrbitPath),
            Output::StoreInfo(_) => None,
        }
    }
}
