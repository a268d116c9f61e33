//! Cell values shared by fragments and composed tables

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single scalar value: a number or a piece of text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    /// Numeric sum of two scalars, `None` if either side is text
    ///
    /// Integer + integer stays integral; any float operand widens the result.
    pub fn checked_add(&self, other: &Scalar) -> Option<Scalar> {
        match (self, other) {
            (Scalar::Integer(a), Scalar::Integer(b)) => a.checked_add(*b).map(Scalar::Integer),
            (Scalar::Integer(a), Scalar::Float(b)) => Some(Scalar::Float(*a as f64 + b)),
            (Scalar::Float(a), Scalar::Integer(b)) => Some(Scalar::Float(a + *b as f64)),
            (Scalar::Float(a), Scalar::Float(b)) => Some(Scalar::Float(a + b)),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Integer(i) => write!(f, "{}", i),
            Scalar::Float(x) => write!(f, "{}", x),
            Scalar::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

impl From<i64> for Scalar {
    fn from(i: i64) -> Self {
        Scalar::Integer(i)
    }
}

/// Sub-columns of a grouped column, e.g. spell slots keyed by slot level
pub type Group = BTreeMap<String, Option<Scalar>>;

/// Value of one named cell
///
/// The variant decides how the composer treats the column:
///
/// - `Scalar`: carry-forward column
/// - `List`: accumulating column (appended at exactly one level)
/// - `Group`: carry-forward applied per sub-key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Scalar(Scalar),
    List(Vec<String>),
    Group(Group),
}

impl Cell {
    pub fn text(s: impl Into<String>) -> Self {
        Cell::Scalar(Scalar::Text(s.into()))
    }

    pub fn integer(i: i64) -> Self {
        Cell::Scalar(Scalar::Integer(i))
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Cell::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Cell::Group(g) => Some(g),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Scalar(s) => write!(f, "{}", s),
            Cell::List(items) => write!(f, "[{}]", items.join(", ")),
            Cell::Group(group) => {
                let parts: Vec<String> = group
                    .iter()
                    .map(|(key, value)| match value {
                        Some(v) => format!("{}: {}", key, v),
                        None => format!("{}: null", key),
                    })
                    .collect();
                write!(f, "{{{}}}", parts.join(", "))
            }
        }
    }
}
