use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// An integer when the source reads as one, the text as received otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MaybeInt {
    Int(i64),
    Text(String),
}

impl MaybeInt {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            MaybeInt::Int(i) => Some(*i),
            MaybeInt::Text(_) => None,
        }
    }
}

impl fmt::Display for MaybeInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaybeInt::Int(i) => write!(f, "{}", i),
            MaybeInt::Text(t) => f.write_str(t),
        }
    }
}

impl From<i64> for MaybeInt {
    fn from(v: i64) -> Self {
        MaybeInt::Int(v)
    }
}

impl From<i32> for MaybeInt {
    fn from(v: i32) -> Self {
        MaybeInt::Int(v as i64)
    }
}

impl From<&str> for MaybeInt {
    fn from(v: &str) -> Self {
        MaybeInt::Text(v.to_owned())
    }
}

impl From<String> for MaybeInt {
    fn from(v: String) -> Self {
        MaybeInt::Text(v)
    }
}

/// Integer coercion of a json scalar: integral numbers, booleans, and strings holding a
/// (whitespace padded) integer literal. Floats are not truncated.
pub fn as_int(v: &Value) -> Option<i64> {
    match v {
        Value::Bool(b) => Some(*b as i64),
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Never fails; anything that does not coerce keeps its textual form.
pub fn maybe_int(v: &Value) -> MaybeInt {
    if let Some(i) = as_int(v) {
        return MaybeInt::Int(i);
    }

    match v {
        Value::String(s) => MaybeInt::Text(s.clone()),
        other => MaybeInt::Text(other.to_string()),
    }
}

pub fn truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
