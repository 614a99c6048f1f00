//! Query building
//!
//! [`QueryParams`] carries a search request as the user typed it: strings
//! for dates, the return object name, the result count and every filter
//! expression. [`QueryDescriptor::build`] validates it once and produces the
//! immutable, typed descriptor the searcher runs.
//!
//! # Date shape
//!
//! Exactly one of these must be supplied:
//! - `date` alone → `DateSearch::Equals`
//! - `start_date` and `end_date` together → `DateSearch::Between`
//!
//! Anything else is a configuration error.

use neodb_core::{EntityKind, Error, Result};
use serde::{Deserialize, Serialize};

use crate::filter::Filter;

/// Result count used when a request does not give one
pub const DEFAULT_RESULT_LIMIT: usize = 10;

/// Return object used when a request does not name one
pub const DEFAULT_RETURN_OBJECT: &str = "NEO";

// ============================================================================
// QueryParams
// ============================================================================

/// Raw search parameters
///
/// # Examples
///
/// ```
/// use neodb_search::{QueryDescriptor, QueryParams};
///
/// let params = QueryParams::between("2020-01-01", "2020-01-31")
///     .with_number("5")
///     .with_filter("is_hazardous:=:True");
/// let query = QueryDescriptor::build(&params).unwrap();
/// assert_eq!(query.number(), 5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams {
    /// Return object name (`"NEO"` or `"Path"`); `None` means NEO
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_object: Option<String>,
    /// Exact close approach date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Inclusive range start
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Inclusive range end
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Maximum results, as text; `None` means [`DEFAULT_RESULT_LIMIT`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// `"field:operator:value"` expressions
    #[serde(default)]
    pub filters: Vec<String>,
}

impl QueryParams {
    /// Parameters for a single-date search
    pub fn on(date: impl Into<String>) -> Self {
        QueryParams {
            date: Some(date.into()),
            ..Default::default()
        }
    }

    /// Parameters for an inclusive date-range search
    pub fn between(start: impl Into<String>, end: impl Into<String>) -> Self {
        QueryParams {
            start_date: Some(start.into()),
            end_date: Some(end.into()),
            ..Default::default()
        }
    }

    /// Builder: set the return object name
    pub fn returning(mut self, name: impl Into<String>) -> Self {
        self.return_object = Some(name.into());
        self
    }

    /// Builder: set the result count
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    /// Builder: add a filter expression
    pub fn with_filter(mut self, expr: impl Into<String>) -> Self {
        self.filters.push(expr.into());
        self
    }
}

// ============================================================================
// DateSearch
// ============================================================================

/// Date selection of a query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateSearch {
    /// Close approaches on exactly this date
    Equals(String),
    /// Close approaches on a date in `[start, end]`
    Between {
        /// Inclusive start
        start: String,
        /// Inclusive end
        end: String,
    },
}

impl DateSearch {
    /// Check whether a date token is selected
    pub fn contains(&self, date: &str) -> bool {
        match self {
            DateSearch::Equals(target) => date == target,
            DateSearch::Between { start, end } => start.as_str() <= date && date <= end.as_str(),
        }
    }

    fn from_params(params: &QueryParams) -> Result<Self> {
        match (&params.date, &params.start_date, &params.end_date) {
            (Some(date), None, None) => Ok(DateSearch::Equals(date.clone())),
            (None, Some(start), Some(end)) => Ok(DateSearch::Between {
                start: start.clone(),
                end: end.clone(),
            }),
            (Some(_), _, _) => Err(Error::configuration(
                "give either an exact date or a start/end range, not both",
            )),
            (None, None, None) => Err(Error::configuration(
                "a date or a start/end date range is required",
            )),
            (None, _, _) => Err(Error::configuration(
                "a date range needs both a start date and an end date",
            )),
        }
    }
}

// ============================================================================
// QueryDescriptor
// ============================================================================

/// Validated, immutable search query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryDescriptor {
    date_search: DateSearch,
    return_kind: EntityKind,
    number: usize,
    filters: Vec<Filter>,
}

impl QueryDescriptor {
    /// Build a descriptor from raw parameters
    ///
    /// Filters are grouped by the entity kind they apply to, NEO filters
    /// first, keeping input order within each group.
    ///
    /// # Errors
    ///
    /// - `Configuration` for an invalid date shape
    /// - `UnsupportedFeature` for an unknown return object or filter field
    /// - `InvalidInput` for a non-integer count or malformed filter
    pub fn build(params: &QueryParams) -> Result<Self> {
        let date_search = DateSearch::from_params(params)?;

        let return_name = params
            .return_object
            .as_deref()
            .unwrap_or(DEFAULT_RETURN_OBJECT);
        let return_kind = EntityKind::from_name(return_name)
            .ok_or_else(|| Error::unsupported(format!("return object '{}'", return_name)))?;

        let number = match params.number.as_deref() {
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
                Error::invalid_input(format!("number '{}' is not a non-negative integer", raw))
            })?,
            None => DEFAULT_RESULT_LIMIT,
        };

        let parsed = params
            .filters
            .iter()
            .map(|expr| Filter::parse(expr))
            .collect::<Result<Vec<_>>>()?;
        let filters = EntityKind::ALL
            .iter()
            .flat_map(|kind| parsed.iter().filter(move |f| f.kind() == *kind))
            .cloned()
            .collect();

        Ok(QueryDescriptor {
            date_search,
            return_kind,
            number,
            filters,
        })
    }

    /// Date selection
    pub fn date_search(&self) -> &DateSearch {
        &self.date_search
    }

    /// Kind of entity returned
    pub fn return_kind(&self) -> EntityKind {
        self.return_kind
    }

    /// Maximum number of results
    pub fn number(&self) -> usize {
        self.number
    }

    /// All filters, NEO filters first
    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }
}
