//! The finished value produced by closing a frame.

use std::ops::Index;

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::coerce::{Direction, Quality};

/// Field under which text records and list wrappers keep their payload.
pub const DATA_FIELD: &str = "data";

/// A materialized value: a scalar, an ordered sequence or an ordered record.
///
/// Record field names are exactly the source attribute and tag names.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Text
    Str(String),
    /// Integer value
    Int(i64),
    /// Boolean value
    Bool(bool),
    /// Exact decimal value
    Decimal(Decimal),
    /// Relationship direction
    Direction(Direction),
    /// Release data quality
    Quality(Quality),
    /// Structured timestamp
    DateTime(NaiveDateTime),
    /// Ordered sequence of values
    List(Vec<Value>),
    /// Record with fields in insertion order
    Struct(IndexMap<String, Value>),
}

impl Value {
    /// Try to get value as string reference
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get value as i64
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get value as boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get value as decimal
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Value::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    /// Try to get value as date-time
    pub fn as_date_time(&self) -> Option<NaiveDateTime> {
        match self {
            Value::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Try to get value as list reference
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Try to get value as record reference
    pub fn as_struct(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Struct(fields) => Some(fields),
            _ => None,
        }
    }

    /// Look up a record field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.as_struct().and_then(|fields| fields.get(field))
    }

    /// Text of a string scalar or of a text record's `data` field.
    ///
    /// # Examples
    /// ```
    /// use mbxml::Value;
    ///
    /// assert_eq!(Value::Str("Foo".into()).text(), Some("Foo"));
    /// ```
    pub fn text(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            Value::Struct(_) => self.get(DATA_FIELD).and_then(Value::as_str),
            _ => None,
        }
    }

    /// Elements of a list wrapper (its `data` field).
    pub fn elements(&self) -> Option<&[Value]> {
        self.get(DATA_FIELD).and_then(Value::as_list)
    }
}

#[allow(clippy::panic)] // Indexing panics on a missing key, like `HashMap`
impl Index<&str> for Value {
    type Output = Value;

    /// Panics if the value is not a record or has no such field.
    fn index(&self, field: &str) -> &Value {
        match self.get(field) {
            Some(value) => value,
            None => panic!("no field '{field}' in value"),
        }
    }
}

#[allow(clippy::panic)] // Indexing panics out of range, like slices
impl Index<usize> for Value {
    type Output = Value;

    /// Panics if the value is not a list or the index is out of range.
    fn index(&self, index: usize) -> &Value {
        match self.as_list().and_then(|items| items.get(index)) {
            Some(value) => value,
            None => panic!("no element {index} in value"),
        }
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        self.as_int() == Some(*other)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Str(s) => serializer.serialize_str(s),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Bool(b) => serializer.serialize_bool(*b),
            // Exactness is kept by emitting decimals as strings.
            Value::Decimal(d) => serializer.collect_str(d),
            Value::Direction(d) => serializer.serialize_str(d.as_str()),
            Value::Quality(q) => serializer.serialize_str(q.as_str()),
            Value::DateTime(dt) => dt.serialize(serializer),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Struct(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (key, value) in fields {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}
