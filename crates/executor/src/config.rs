//! Configuration via `neodb.toml`
//!
//! Every setting has a default, so an empty file (or no file at all) is a
//! valid configuration. Command-line flags override file values.

use neodb_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use neodb_search::DEFAULT_RESULT_LIMIT;

/// Config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "neodb.toml";

/// NeoDB configuration loaded from `neodb.toml`.
///
/// # Example
///
/// ```toml
/// data_file = "data/neos_v2.csv"
/// output_file = "data/results.csv"
/// default_number = 10
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeoConfig {
    /// CSV file holding NEO close approaches.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    /// Destination of `csv_file` output.
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,
    /// Result count used when a search does not give one.
    #[serde(default = "default_number")]
    pub default_number: usize,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("data/neos_v2.csv")
}

fn default_output_file() -> PathBuf {
    PathBuf::from("data/results.csv")
}

fn default_number() -> usize {
    DEFAULT_RESULT_LIMIT
}

impl Default for NeoConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            output_file: default_output_file(),
            default_number: default_number(),
        }
    }
}

impl NeoConfig {
    /// Builder: set the data file
    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = path.into();
        self
    }

    /// Builder: set the csv output file
    pub fn with_output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_file = path.into();
        self
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# NeoDB configuration

# CSV file with one row per close approach.
data_file = "data/neos_v2.csv"

# Where `--output csv_file` writes results.
output_file = "data/results.csv"

# Number of results returned when a search does not pass --number.
default_number = 10
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        toml::from_str(&content).map_err(|e| {
            Error::configuration(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Read config from `path` if it exists, defaults otherwise.
    pub fn from_file_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(true)` if the file was created.
    pub fn write_default_if_missing(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        std::fs::write(path, Self::default_toml()).map_err(|e| {
            Error::configuration(format!(
                "Failed to write default config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(true)
    }
}
