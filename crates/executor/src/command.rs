//! Command enum defining all NeoDB operations.
//!
//! Commands are:
//! - **Self-contained**: All parameters needed for execution are in the variant
//! - **Serializable**: Can be converted to/from JSON
//! - **Pure data**: No closures or executable code

use neodb_search::QueryParams;
use serde::{Deserialize, Serialize};

/// A command is a self-contained, serializable operation.
///
/// | Command | Output |
/// |---------|--------|
/// | `Search` | `Neos` or `Paths`, per the query's return object |
/// | `Lookup` | `MaybeNeo` |
/// | `Info` | `StoreInfo` |
///
/// # Example
///
/// ```ignore
/// use neodb_executor::{Command, QueryParams};
///
/// let cmd = Command::Search {
///     query: QueryParams::between("2020-01-01", "2020-01-31").with_number("5"),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Date-bounded, filtered search
    Search {
        /// Raw query parameters
        query: QueryParams,
    },

    /// Look a NEO up by its unique name
    Lookup {
        /// NEO name
        name: String,
    },

    /// Record store statistics
    Info,
}

impl Command {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::Search { .. } => "search",
            Command::Lookup { .. } => "lookup",
            Command::Info => "info",
        }
    }
}
