//! Generic mapping serializer.

use super::{DictValue, Mapping, Serialized};
use crate::ConfiguratorResult;
use crate::schema::{FieldValue, Primitive, Record};

/// Serialize `record` into a generic mapping keyed by field name.
///
/// Sequences map element-wise and mappings recurse per value. Nested schemas
/// serialize with their own bound format: dict-bound ones become nested
/// mappings, text-bound ones become strings. A set stays a set only when
/// every serialized element is hashable; otherwise the whole collection
/// degrades to a sequence.
///
/// # Errors
///
/// Returns [`crate::ConfiguratorError::Serialize`] when a nested JSON schema
/// fails to render.
///
/// # Examples
///
/// ```rust
/// use configurator::{DictValue, Primitive, Schema, serialize};
/// use serde::Deserialize;
///
/// #[derive(Deserialize, Schema)]
/// struct Ports {
///     http: u16,
///     tags: Vec<String>,
/// }
///
/// let ports = Ports { http: 80, tags: vec![String::from("edge")] };
/// let mapping = serialize::to_mapping(&ports.record())?;
/// assert_eq!(mapping.get("http"), Some(&DictValue::Primitive(Primitive::UInt(80))));
/// # Ok::<_, configurator::ConfiguratorError>(())
/// ```
pub fn to_mapping(record: &Record) -> ConfiguratorResult<Mapping> {
    record
        .fields()
        .iter()
        .map(|(name, value)| dict_value(value).map(|converted| ((*name).to_owned(), converted)))
        .collect()
}

pub(super) fn dict_value(value: &FieldValue) -> ConfiguratorResult<DictValue> {
    match value {
        FieldValue::Primitive(primitive) => Ok(DictValue::Primitive(primitive.clone())),
        FieldValue::Schema(record) => Ok(match super::serialize(record)? {
            Serialized::Mapping(mapping) => DictValue::Mapping(mapping),
            Serialized::Text(text) => DictValue::Primitive(Primitive::Str(text)),
        }),
        FieldValue::Sequence(items) => items
            .iter()
            .map(dict_value)
            .collect::<ConfiguratorResult<_>>()
            .map(DictValue::Sequence),
        FieldValue::Set(items) => set_value(items),
        FieldValue::Mapping(entries) => entries
            .iter()
            .map(|(key, item)| dict_value(item).map(|converted| (key.clone(), converted)))
            .collect::<ConfiguratorResult<_>>()
            .map(DictValue::Mapping),
    }
}

fn set_value(items: &[FieldValue]) -> ConfiguratorResult<DictValue> {
    let elements = items
        .iter()
        .map(dict_value)
        .collect::<ConfiguratorResult<Vec<_>>>()?;
    if !elements.iter().all(DictValue::is_hashable) {
        return Ok(DictValue::Sequence(elements));
    }
    let mut members: Vec<Primitive> = Vec::with_capacity(elements.len());
    for element in elements {
        if let DictValue::Primitive(primitive) = element {
            if !members.contains(&primitive) {
                members.push(primitive);
            }
        }
    }
    Ok(DictValue::Set(members))
}
