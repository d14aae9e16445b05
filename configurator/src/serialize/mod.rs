//! Serializers turning schema records into mappings or text.
//!
//! Every schema is bound to one [`Format`]. [`serialize`] dispatches on that
//! binding; the standalone [`to_mapping`], [`to_json`], and [`to_properties`]
//! accept any record regardless of its binding. Nested schemas always
//! serialize with their own bound format, so a properties schema nested in a
//! dict schema appears as its properties text.

mod dict;
mod json;
mod properties;

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use crate::ConfiguratorResult;
use crate::schema::{Format, Primitive, Record};

pub use dict::to_mapping;
pub use json::{to_json, to_json_compact};
pub use properties::{encode, to_properties};

/// Generic keyed mapping produced by the dict serializer, sorted by key.
pub type Mapping = BTreeMap<String, DictValue>;

/// Value inside a [`Mapping`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DictValue {
    /// Scalar.
    Primitive(Primitive),
    /// Ordered sequence, also used for sets holding non-hashable elements.
    Sequence(Vec<DictValue>),
    /// Set of hashable scalars without duplicates.
    Set(Vec<Primitive>),
    /// Nested mapping.
    Mapping(Mapping),
}

impl DictValue {
    /// Returns `true` for values that may be members of a set.
    #[must_use]
    pub const fn is_hashable(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }
}

impl Serialize for Primitive {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(flag) => serializer.serialize_bool(*flag),
            Self::Int(number) => serializer.serialize_i64(*number),
            Self::UInt(number) => serializer.serialize_u64(*number),
            Self::Float(number) => serializer.serialize_f64(*number),
            Self::Str(text) => serializer.serialize_str(text),
        }
    }
}

/// Output of a schema serializer.
#[derive(Clone, Debug, PartialEq)]
pub enum Serialized {
    /// Generic mapping from a dict-bound schema.
    Mapping(Mapping),
    /// Text from a JSON- or properties-bound schema.
    Text(String),
}

impl Serialized {
    /// Borrow the text output, if any.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Mapping(_) => None,
        }
    }

    /// Borrow the mapping output, if any.
    #[must_use]
    pub const fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(mapping) => Some(mapping),
            Self::Text(_) => None,
        }
    }

    /// Convert the output to text, rendering a mapping as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfiguratorError::Serialize`] when JSON rendering
    /// fails.
    pub fn into_text(self) -> ConfiguratorResult<String> {
        match self {
            Self::Text(text) => Ok(text),
            Self::Mapping(mapping) => json::render(&mapping),
        }
    }
}

/// Serialize `record` with the format its schema is bound to.
///
/// # Errors
///
/// Returns [`crate::ConfiguratorError::Serialize`] when JSON rendering fails.
pub fn serialize(record: &Record) -> ConfiguratorResult<Serialized> {
    serialize_as(record, record.descriptor().format())
}

/// Serialize `record` with `format`, ignoring its bound format at the top
/// level. Nested schemas still use their own binding.
///
/// # Errors
///
/// Returns [`crate::ConfiguratorError::Serialize`] when JSON rendering fails.
pub fn serialize_as(record: &Record, format: Format) -> ConfiguratorResult<Serialized> {
    match format {
        Format::Dict => to_mapping(record).map(Serialized::Mapping),
        Format::Json => to_json(record).map(Serialized::Text),
        Format::Properties => to_properties(record).map(Serialized::Text),
    }
}

#[cfg(test)]
mod tests;
