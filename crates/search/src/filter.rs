//! Field filters
//!
//! A [`Filter`] is one `field <op> value` predicate. Filters are parsed from
//! `"field:operator:value"` expressions, e.g. `distance:<:5000000` or
//! `is_hazardous:=:True`. The field decides which entity kind the filter
//! applies to and how the literal is typed; both are fixed at parse time.

use neodb_core::{EntityKind, Error, Field, FieldValue, Filterable, Operator, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between the parts of a filter expression
pub const FILTER_SEPARATOR: char = ':';

/// A single field predicate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    field: Field,
    operator: Operator,
    value: FieldValue,
}

impl Filter {
    /// Create a filter with an already-typed comparison value
    pub fn new(field: Field, operator: Operator, value: FieldValue) -> Self {
        Filter {
            field,
            operator,
            value,
        }
    }

    /// Parse a `"field:operator:value"` expression
    ///
    /// The value is everything after the second separator, so it may itself
    /// contain `:`.
    ///
    /// # Errors
    ///
    /// - `UnsupportedFeature` for a field outside the field table
    /// - `InvalidInput` for a malformed expression or unknown operator
    pub fn parse(expr: &str) -> Result<Self> {
        let mut parts = expr.splitn(3, FILTER_SEPARATOR);
        let (Some(name), Some(symbol), Some(literal)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(Error::invalid_input(format!(
                "filter '{}' must have the form field:operator:value",
                expr
            )));
        };

        let field = Field::from_name(name)
            .ok_or_else(|| Error::unsupported(format!("filter field '{}'", name)))?;
        let operator = Operator::from_symbol(symbol).ok_or_else(|| {
            Error::invalid_input(format!("unknown operator '{}' in filter '{}'", symbol, expr))
        })?;

        Ok(Filter::new(
            field,
            operator,
            FieldValue::coerce(literal, field.value_type()),
        ))
    }

    /// Field this filter reads
    pub fn field(&self) -> Field {
        self.field
    }

    /// Entity kind this filter applies to
    pub fn kind(&self) -> EntityKind {
        self.field.kind()
    }

    /// Comparison operator
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Comparison value
    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    /// True if this filter targets orbit paths (miss distance)
    pub fn is_distance(&self) -> bool {
        self.field == Field::Distance
    }

    /// Check one item
    ///
    /// Items of a kind that does not own the field never match.
    pub fn matches<T: Filterable>(&self, item: &T) -> bool {
        item.field_value(self.field)
            .is_some_and(|stored| stored.compare(self.operator, &self.value))
    }

    /// Keep the items that match, preserving their order
    pub fn apply<'a, T: Filterable>(&self, items: Vec<&'a T>) -> Vec<&'a T> {
        items.into_iter().filter(|item| self.matches(*item)).collect()
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}",
            self.field,
            self.operator,
            self.value,
            sep = FILTER_SEPARATOR
        )
    }
}
