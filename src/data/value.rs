//! Dynamically typed scalar values carried by option records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A scalar field value.
///
/// Equality never coerces between kinds: `Str("1")`, `Bool(true)` and `Null`
/// are distinct from every number. Numbers compare by value regardless of
/// representation, so `Int(1) == Float(1.0)`. `NaN` equals nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl FieldValue {
    /// Parse a command-line token.
    ///
    /// Tokens that are valid JSON scalars (`1`, `2.5`, `true`, `null`,
    /// `"quoted"`) keep their type; anything else becomes a string.
    pub fn parse_loose(text: &str) -> Self {
        serde_json::from_str::<FieldValue>(text.trim())
            .unwrap_or_else(|_| FieldValue::Str(text.to_string()))
    }
}

impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FieldValue::Null, FieldValue::Null) => true,
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a == b,
            (FieldValue::Int(a), FieldValue::Int(b)) => a == b,
            (FieldValue::Float(a), FieldValue::Float(b)) => a == b,
            (FieldValue::Int(i), FieldValue::Float(x))
            | (FieldValue::Float(x), FieldValue::Int(i)) => int_equals_float(*i, *x),
            (FieldValue::Str(a), FieldValue::Str(b)) => a == b,
            _ => false,
        }
    }
}

/// Exact comparison: `x` must be integral and inside the `i64` range, so large
/// integers are not matched through a rounded float.
fn int_equals_float(i: i64, x: f64) -> bool {
    // 2^63; i64::MAX itself is not representable as f64
    const BOUND: f64 = 9_223_372_036_854_775_808.0;
    x.fract() == 0.0 && (-BOUND..BOUND).contains(&x) && x as i64 == i
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => Ok(()),
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::Int(i) => write!(f, "{i}"),
            FieldValue::Float(x) => write!(f, "{x}"),
            FieldValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Str(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Str(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Int(i64::from(value))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}
