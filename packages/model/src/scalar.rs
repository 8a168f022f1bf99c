use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A primitive value that can be emitted directly as a TypeScript literal
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    String(String),
    Int(i64),
    Float(OrderedFloat<f64>),
}

impl Scalar {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Scalar::String(_))
    }
}

impl fmt::Display for Scalar {
    /// Canonical text: strings verbatim, numbers in decimal
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::String(s) => f.write_str(s),
            Scalar::Int(n) => write!(f, "{}", n),
            Scalar::Float(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::String(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::String(s)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Int(n)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Scalar::Int(n.into())
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar::Float(OrderedFloat(n))
    }
}

/// The raw value of a model attribute, before classification
///
/// Mirrors what a backend model class can hold at class level: scalars,
/// ordered sequences (tuples and lists are distinct shapes but are treated
/// alike by the extractor), mappings, and nested classes such as a metadata
/// container.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    None,
    Tuple(Vec<AttrValue>),
    List(Vec<AttrValue>),
    Map(Vec<(AttrValue, AttrValue)>),
    /// Nested class or metadata container, identified by its name
    Class(String),
    /// Value with no scalar representation (e.g. an integer beyond `i64`),
    /// kept as its source text
    Opaque(String),
}

impl AttrValue {
    /// Build a tuple of `(value, label)` pairs, the usual shape of a choices attribute
    pub fn choices<V, I>(pairs: I) -> Self
    where
        V: Into<AttrValue>,
        I: IntoIterator<Item = (V, &'static str)>,
    {
        AttrValue::Tuple(
            pairs
                .into_iter()
                .map(|(value, label)| AttrValue::Tuple(vec![value.into(), AttrValue::from(label)]))
                .collect(),
        )
    }

    /// The scalar this value holds, if it is a string, integer or float
    pub fn as_scalar(&self) -> Option<Scalar> {
        match self {
            AttrValue::Str(s) => Some(Scalar::String(s.clone())),
            AttrValue::Int(n) => Some(Scalar::Int(*n)),
            AttrValue::Float(n) => Some(Scalar::Float(OrderedFloat(*n))),
            _ => None,
        }
    }

    /// Elements of an ordered sequence (tuple or list)
    pub fn as_sequence(&self) -> Option<&[AttrValue]> {
        match self {
            AttrValue::Tuple(items) | AttrValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_class(&self) -> bool {
        matches!(self, AttrValue::Class(_))
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Str(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Str(s)
    }
}

impl From<i64> for AttrValue {
    fn from(n: i64) -> Self {
        AttrValue::Int(n)
    }
}

impl From<i32> for AttrValue {
    fn from(n: i32) -> Self {
        AttrValue::Int(n.into())
    }
}

impl From<f64> for AttrValue {
    fn from(n: f64) -> Self {
        AttrValue::Float(n)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Bool(b)
    }
}

impl From<serde_json::Value> for AttrValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => AttrValue::None,
            Value::Bool(b) => AttrValue::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    AttrValue::Int(i)
                } else if n.is_f64() {
                    AttrValue::Float(n.as_f64().unwrap_or(f64::NAN))
                } else {
                    AttrValue::Opaque(n.to_string())
                }
            }
            Value::String(s) => AttrValue::Str(s),
            Value::Array(items) => AttrValue::List(items.into_iter().map(AttrValue::from).collect()),
            Value::Object(map) => AttrValue::Map(
                map.into_iter()
                    .map(|(k, v)| (AttrValue::Str(k), AttrValue::from(v)))
                    .collect(),
            ),
        }
    }
}
