//! Error types for NeoDB
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Only configuration mistakes, unsupported names and load failures are
//! errors. A query that matches nothing is an empty result, never an error.

use std::io;
use thiserror::Error;

/// Result type alias for NeoDB operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for NeoDB
#[derive(Debug, Error)]
pub enum Error {
    /// Missing input location, or a query whose parameters do not form a
    /// valid shape (e.g. both an exact date and a date range)
    #[error("configuration error: {reason}")]
    Configuration {
        /// What is wrong with the configuration
        reason: String,
    },

    /// A name that does not map to any supported return object, filter
    /// field or output format
    #[error("unsupported feature: {feature}")]
    UnsupportedFeature {
        /// The unrecognized name
        feature: String,
    },

    /// Malformed user input (filter expression, operator, result count)
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Why the input was rejected
        reason: String,
    },

    /// Input data source could not be read or parsed
    #[error("failed to load '{path}': {reason}")]
    Load {
        /// Source location
        path: String,
        /// Underlying failure
        reason: String,
    },

    /// I/O error (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Create a configuration error
    pub fn configuration(reason: impl Into<String>) -> Self {
        Error::Configuration {
            reason: reason.into(),
        }
    }

    /// Create an unsupported feature error
    pub fn unsupported(feature: impl Into<String>) -> Self {
        Error::UnsupportedFeature {
            feature: feature.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Error::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Create a load error for the given source
    pub fn load(path: impl Into<String>, reason: impl ToString) -> Self {
        Error::Load {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// True for errors caused by an unrecognized name
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Error::UnsupportedFeature { .. })
    }
}
