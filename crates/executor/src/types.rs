//! Supporting types for outputs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Record store statistics
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoreInfo {
    /// Unique NEOs
    pub neo_count: usize,
    /// Close approaches
    pub orbit_count: usize,
    /// Distinct close approach dates
    pub date_count: usize,
    /// Earliest close approach date
    pub first_date: Option<String>,
    /// Latest close approach date
    pub last_date: Option<String>,
}

impl fmt::Display for StoreInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} NEOs, {} close approaches over {} dates",
            self.neo_count, self.orbit_count, self.date_count
        )?;
        if let (Some(first), Some(last)) = (&self.first_date, &self.last_date) {
            write!(f, " ({} to {})", first, last)?;
        }
        Ok(())
    }
}
