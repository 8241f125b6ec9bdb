//! Attribute bags attached to nodes and edges.

use std::collections::HashMap;

use serde::Serialize;

/// An attribute map: attribute name -> value.
pub type Attrs = HashMap<String, AttrValue>;

/// A single attribute value.
///
/// Attributes form an open set, so the value side is a tagged union of the
/// scalar types callers actually attach: numbers, strings, booleans.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Integer value (e.g. an edge weight).
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// String value (e.g. a color or label).
    Str(String),
    /// Boolean flag.
    Bool(bool),
}

impl AttrValue {
    /// Numeric view of this value, if it has one.
    ///
    /// Used by the shortest-path algorithm to read edge weights; `Str` and
    /// `Bool` values have no numeric interpretation and return `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            Self::Str(_) | Self::Bool(_) => None,
        }
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl std::fmt::Display for AttrValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(v) => write!(f, "{}", v),
            Self::Str(s) => write!(f, "{}", s),
            Self::Bool(b) => write!(f, "{}", b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_f64_numeric_variants() {
        assert_eq!(AttrValue::Int(3).as_f64(), Some(3.0));
        assert_eq!(AttrValue::Float(1.5).as_f64(), Some(1.5));
    }

    #[test]
    fn test_as_f64_non_numeric_variants() {
        assert_eq!(AttrValue::from("red").as_f64(), None);
        assert_eq!(AttrValue::Bool(true).as_f64(), None);
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(AttrValue::from(42i64), AttrValue::Int(42));
        assert_eq!(AttrValue::from(0.5f64), AttrValue::Float(0.5));
        assert_eq!(AttrValue::from("A-B"), AttrValue::Str("A-B".to_string()));
        assert_eq!(AttrValue::from(false), AttrValue::Bool(false));
    }

    #[test]
    fn test_serialize_as_bare_scalars() {
        assert_eq!(serde_json::to_string(&AttrValue::Int(3)).unwrap(), "3");
        assert_eq!(
            serde_json::to_string(&AttrValue::from("red")).unwrap(),
            "\"red\""
        );
        assert_eq!(serde_json::to_string(&AttrValue::Bool(true)).unwrap(), "true");
    }

    #[test]
    fn test_display() {
        assert_eq!(AttrValue::Int(3).to_string(), "3");
        assert_eq!(AttrValue::from("red").to_string(), "red");
        assert_eq!(AttrValue::Bool(true).to_string(), "true");
    }
}
