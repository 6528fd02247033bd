//! Scalar coercers turning leaf text into typed values.
//!
//! These are pure functions with no state; the parser picks one per leaf tag
//! from the enclosing kind's shape.

use std::fmt;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::error::{MbxmlError, Result};
use crate::value::Value;

/// Timestamp layout used by the web service for `created` fields.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Relationship direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Both,
    Forward,
    Backward,
}

impl Direction {
    /// Get the wire name of this direction.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Both => "both",
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Release data quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quality {
    Low,
    Normal,
    High,
}

impl Quality {
    /// Get the wire name of this quality.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Leaf-level coercer expected under a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercer {
    /// Text kept verbatim.
    Str,
    /// Signed integer.
    Int,
    /// `true` / `false`.
    Bool,
    /// [`Direction`] enumeration.
    Direction,
    /// [`Quality`] enumeration.
    Quality,
}

impl Coercer {
    /// Coerce accumulated leaf text into a value.
    ///
    /// # Errors
    /// Returns `InvalidScalar` or `InvalidEnumerationValue` when the text does
    /// not fit the coercer.
    pub fn apply(self, text: &str) -> Result<Value> {
        match self {
            Self::Str => Ok(Value::Str(text.to_string())),
            Self::Int => parse_int(text).map(Value::Int),
            Self::Bool => parse_bool(text).map(Value::Bool),
            Self::Direction => parse_direction(text).map(Value::Direction),
            Self::Quality => parse_quality(text).map(Value::Quality),
        }
    }
}

/// Parse an integer, tolerating surrounding whitespace.
///
/// # Examples
/// ```
/// use mbxml::coerce::parse_int;
///
/// assert_eq!(parse_int("259600").unwrap(), 259600);
/// assert!(parse_int("abc").is_err());
/// ```
pub fn parse_int(text: &str) -> Result<i64> {
    text.trim().parse().map_err(|_| MbxmlError::InvalidScalar {
        expected: "integer",
        value: text.to_string(),
    })
}

/// Parse a boolean. An empty element counts as `false`.
pub fn parse_bool(text: &str) -> Result<bool> {
    match text.trim() {
        "true" => Ok(true),
        "false" | "" => Ok(false),
        _ => Err(MbxmlError::InvalidScalar {
            expected: "boolean",
            value: text.to_string(),
        }),
    }
}

/// Parse a relationship direction.
pub fn parse_direction(text: &str) -> Result<Direction> {
    match text.trim() {
        "both" => Ok(Direction::Both),
        "forward" => Ok(Direction::Forward),
        "backward" => Ok(Direction::Backward),
        _ => Err(MbxmlError::InvalidEnumerationValue {
            enumeration: "direction",
            value: text.to_string(),
        }),
    }
}

/// Parse a release data quality.
pub fn parse_quality(text: &str) -> Result<Quality> {
    match text.trim() {
        "low" => Ok(Quality::Low),
        "normal" => Ok(Quality::Normal),
        "high" => Ok(Quality::High),
        _ => Err(MbxmlError::InvalidEnumerationValue {
            enumeration: "quality",
            value: text.to_string(),
        }),
    }
}

/// Parse an exact decimal number.
///
/// # Examples
/// ```
/// use mbxml::coerce::parse_decimal;
///
/// assert_eq!(parse_decimal("4.35").unwrap().to_string(), "4.35");
/// ```
pub fn parse_decimal(text: &str) -> Result<Decimal> {
    text.trim().parse().map_err(|_| MbxmlError::InvalidScalar {
        expected: "decimal",
        value: text.to_string(),
    })
}

/// Parse a timestamp such as `2020-05-11T09:32:52` or
/// `2020-05-11T09:32:52.190Z`.
pub fn parse_date_time(text: &str) -> Result<NaiveDateTime> {
    let trimmed = text.trim();
    let trimmed = trimmed.strip_suffix('Z').unwrap_or(trimmed);
    NaiveDateTime::parse_from_str(trimmed, DATE_TIME_FORMAT)
        .map_err(|_| MbxmlError::InvalidDate(text.to_string()))
}

/// Coerce a date-valued field.
///
/// Text is parsed; an already structured date-time passes through unchanged,
/// so applying this twice is the same as applying it once.
pub fn coerce_date(value: Value) -> Result<Value> {
    match value {
        Value::Str(text) => parse_date_time(&text).map(Value::DateTime),
        other => Ok(other),
    }
}
