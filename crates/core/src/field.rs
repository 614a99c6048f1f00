//! Typed filter vocabulary
//!
//! Filters address entity attributes through a closed field table rather
//! than by attribute name at runtime:
//!
//! | Filter name    | Field         | Entity kind | Value type |
//! |----------------|---------------|-------------|------------|
//! | `diameter`     | `Diameter`    | NEO         | number     |
//! | `distance`     | `Distance`    | Path        | number     |
//! | `is_hazardous` | `IsHazardous` | NEO         | boolean    |
//!
//! The comparison literal of a filter is coerced once, when the filter is
//! built, into a [`FieldValue`] of the field's type. A literal that does not
//! coerce is kept as text and compared lexically against the stored value's
//! text rendering.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::record::parse_bool;

// ============================================================================
// EntityKind
// ============================================================================

/// The two kinds of entity held by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// A Near Earth Object (`"NEO"`)
    Neo,
    /// A close-approach orbit path (`"Path"`)
    OrbitPath,
}

impl EntityKind {
    /// All entity kinds
    pub const ALL: [EntityKind; 2] = [EntityKind::Neo, EntityKind::OrbitPath];

    /// Resolve a return-object name (`"NEO"` or `"Path"`)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "NEO" => Some(EntityKind::Neo),
            "Path" => Some(EntityKind::OrbitPath),
            _ => None,
        }
    }

    /// Public name of this kind
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Neo => "NEO",
            EntityKind::OrbitPath => "Path",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Field
// ============================================================================

/// Type of the values stored in a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    /// Floating point
    Number,
    /// Boolean
    Bool,
}

/// A filterable attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    /// Minimum diameter estimate (km) of a NEO
    Diameter,
    /// Miss distance (km) of an orbit path
    Distance,
    /// Potentially-hazardous flag of a NEO
    IsHazardous,
}

impl Field {
    /// All fields
    pub const ALL: [Field; 3] = [Field::Diameter, Field::Distance, Field::IsHazardous];

    /// Resolve a filter field name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "diameter" => Some(Field::Diameter),
            "distance" => Some(Field::Distance),
            "is_hazardous" => Some(Field::IsHazardous),
            _ => None,
        }
    }

    /// Public filter name
    pub fn name(&self) -> &'static str {
        match self {
            Field::Diameter => "diameter",
            Field::Distance => "distance",
            Field::IsHazardous => "is_hazardous",
        }
    }

    /// Entity kind that owns this field
    pub fn kind(&self) -> EntityKind {
        match self {
            Field::Diameter | Field::IsHazardous => EntityKind::Neo,
            Field::Distance => EntityKind::OrbitPath,
        }
    }

    /// Type of the stored values
    pub fn value_type(&self) -> ValueType {
        match self {
            Field::Diameter | Field::Distance => ValueType::Number,
            Field::IsHazardous => ValueType::Bool,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Operator
// ============================================================================

/// Comparison operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// `=`
    Eq,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `<`
    Lt,
    /// `<=`
    Le,
}

impl Operator {
    /// Resolve an operator symbol
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "=" => Some(Operator::Eq),
            ">" => Some(Operator::Gt),
            ">=" => Some(Operator::Ge),
            "<" => Some(Operator::Lt),
            "<=" => Some(Operator::Le),
            _ => None,
        }
    }

    /// Operator symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
            Operator::Lt => "<",
            Operator::Le => "<=",
        }
    }

    /// Evaluate `lhs <op> rhs` given their ordering.
    ///
    /// `None` (incomparable, e.g. NaN) never satisfies any operator.
    pub fn holds(&self, ordering: Option<Ordering>) -> bool {
        let Some(ord) = ordering else {
            return false;
        };
        match self {
            Operator::Eq => ord == Ordering::Equal,
            Operator::Gt => ord == Ordering::Greater,
            Operator::Ge => ord != Ordering::Less,
            Operator::Lt => ord == Ordering::Less,
            Operator::Le => ord != Ordering::Greater,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ============================================================================
// FieldValue
// ============================================================================

/// A typed field value, stored or literal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Numeric value
    Number(f64),
    /// Boolean value
    Bool(bool),
    /// Literal that did not coerce to the field's type
    Text(String),
}

impl FieldValue {
    /// Coerce a raw literal to the given value type.
    ///
    /// Falls back to `Text` when the literal does not parse.
    pub fn coerce(raw: &str, value_type: ValueType) -> Self {
        let parsed = match value_type {
            ValueType::Number => raw.trim().parse::<f64>().ok().map(FieldValue::Number),
            ValueType::Bool => parse_bool(raw).map(FieldValue::Bool),
        };
        parsed.unwrap_or_else(|| FieldValue::Text(raw.to_string()))
    }

    /// Text rendering used for lexical comparison
    pub fn render(&self) -> String {
        match self {
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Bool(true) => "True".to_string(),
            FieldValue::Bool(false) => "False".to_string(),
            FieldValue::Text(s) => s.clone(),
        }
    }

    /// Evaluate `self <op> literal`.
    ///
    /// Same-typed values compare natively (`false < true` for booleans).
    /// Any other pairing compares the two text renderings lexically.
    pub fn compare(&self, op: Operator, literal: &FieldValue) -> bool {
        let ordering = match (self, literal) {
            (FieldValue::Number(a), FieldValue::Number(b)) => a.partial_cmp(b),
            (FieldValue::Bool(a), FieldValue::Bool(b)) => Some(a.cmp(b)),
            _ => Some(self.render().cmp(&literal.render())),
        };
        op.holds(ordering)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

// ============================================================================
// Filterable
// ============================================================================

/// Typed attribute access for one entity kind
pub trait Filterable {
    /// Kind of this entity
    const KIND: EntityKind;

    /// Value of `field`, or `None` if this kind does not own the field
    fn field_value(&self, field: Field) -> Option<FieldValue>;
}
