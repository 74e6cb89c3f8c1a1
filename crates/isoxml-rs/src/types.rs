// crates/isoxml-rs/src/types.rs

//! Public value types: external identifiers and typed attribute values.

use crate::error::IsoxmlError;
use crate::model::{EnumDescriptor, NumberFormat, ScalarType};
use core::fmt;
use std::collections::BTreeMap;

// --- External Identifiers ---

/// A textual cross-reference key such as `DVC12`: three uppercase letters
/// naming the entity tag, followed by a decimal suffix.
///
/// The suffix may carry a leading `-`; task controllers use negative
/// suffixes for entities they create themselves.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct XmlId {
    raw: String,
    suffix: i64,
}

impl XmlId {
    /// Parses and validates an identifier.
    pub fn parse(raw: &str) -> Result<XmlId, IsoxmlError> {
        let malformed = || IsoxmlError::MalformedIdentifier { id: raw.to_string() };

        let bytes = raw.as_bytes();
        if bytes.len() < 4 || !bytes[..3].iter().all(u8::is_ascii_uppercase) {
            return Err(malformed());
        }
        let digits = raw[3..].strip_prefix('-').unwrap_or(&raw[3..]);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let suffix = raw[3..].parse::<i64>().map_err(|_| malformed())?;

        Ok(XmlId {
            raw: raw.to_string(),
            suffix,
        })
    }

    /// Builds an identifier from a tag prefix and a suffix.
    pub(crate) fn from_parts(tag: &str, suffix: i64) -> XmlId {
        XmlId {
            raw: format!("{}{}", tag, suffix),
            suffix,
        }
    }

    /// The three-letter tag prefix.
    pub fn tag(&self) -> &str {
        &self.raw[..3]
    }

    /// The numeric suffix.
    pub fn suffix(&self) -> i64 {
        self.suffix
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for XmlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

// --- Attribute Values ---

/// A typed attribute value, matching one of the descriptor scalar types.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Decimal(f64),
    /// An identifier of another entity in the same document.
    Reference(XmlId),
    /// A known enumeration entry.
    Enum(&'static EnumDescriptor),
    /// An enumeration code absent from the descriptor table. Kept verbatim so
    /// that values from newer schema versions survive a round trip.
    UnknownEnum(String),
}

impl Value {
    /// Whether this value may be stored under an attribute of type `scalar`.
    pub fn matches(&self, scalar: ScalarType) -> bool {
        match (self, scalar) {
            (Value::String(_), ScalarType::String) => true,
            (Value::Integer(_), ScalarType::Number(NumberFormat::Integer)) => true,
            (Value::Decimal(_), ScalarType::Number(NumberFormat::Decimal)) => true,
            (Value::Reference(id), ScalarType::Reference(target)) => id.tag() == target.code(),
            (Value::Enum(entry), ScalarType::Enum(values)) => values.contains(*entry),
            (Value::UnknownEnum(_), ScalarType::Enum(_)) => true,
            _ => false,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Decimal(v) => Some(*v),
            Value::Integer(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_reference(&self) -> Option<&XmlId> {
        match self {
            Value::Reference(id) => Some(id),
            _ => None,
        }
    }

    /// The semantic name of a known enumeration value.
    pub fn enum_name(&self) -> Option<&'static str> {
        match self {
            Value::Enum(entry) => Some(entry.name),
            _ => None,
        }
    }

    /// The XML text for this value.
    pub fn to_xml_text(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            Value::Integer(v) => v.to_string(),
            Value::Decimal(v) => v.to_string(),
            Value::Reference(id) => id.to_string(),
            Value::Enum(entry) => entry.code.to_string(),
            Value::UnknownEnum(code) => code.clone(),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Decimal(v)
    }
}

impl From<XmlId> for Value {
    fn from(id: XmlId) -> Self {
        Value::Reference(id)
    }
}

/// Attribute map of one entity, keyed by semantic field name.
pub type Attributes = BTreeMap<&'static str, Value>;
