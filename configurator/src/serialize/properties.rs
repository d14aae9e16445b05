//! Java-style properties serializer.

use super::dict::dict_value;
use super::json::render_compact;
use super::Serialized;
use crate::ConfiguratorResult;
use crate::schema::{FieldValue, Record};

/// Serialize `record` as `key=value` lines sorted by key.
///
/// Scalars use their generic string form (booleans lowercase, floats with a
/// decimal point, null empty). Nested schemas render through their own
/// format, with mapping output as compact JSON, and collections render as
/// compact JSON. Values are escaped with [`encode`]; keys are written as is.
/// Lines are joined with `\n` and carry no trailing newline.
///
/// # Errors
///
/// Returns [`crate::ConfiguratorError::Serialize`] when a nested value fails
/// to render as JSON.
///
/// # Examples
///
/// ```rust
/// use configurator::{Schema, serialize};
/// use serde::Deserialize;
///
/// #[derive(Deserialize, Schema)]
/// #[configurator(format = "properties")]
/// struct Hive {
///     metastore: String,
///     enabled: bool,
/// }
///
/// let hive = Hive { metastore: String::from("thrift://db:9083"), enabled: false };
/// assert_eq!(
///     serialize::to_properties(&hive.record())?,
///     "enabled=false\nmetastore=thrift://db:9083",
/// );
/// # Ok::<_, configurator::ConfiguratorError>(())
/// ```
pub fn to_properties(record: &Record) -> ConfiguratorResult<String> {
    let mut lines = record
        .fields()
        .iter()
        .map(|(name, value)| Ok((*name, encode(&plain_text(value)?))))
        .collect::<ConfiguratorResult<Vec<_>>>()?;
    lines.sort_by(|left, right| left.0.cmp(right.0));
    Ok(lines
        .into_iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("\n"))
}

fn plain_text(value: &FieldValue) -> ConfiguratorResult<String> {
    match value {
        FieldValue::Primitive(primitive) => Ok(primitive.to_string()),
        FieldValue::Schema(record) => match super::serialize(record)? {
            Serialized::Text(text) => Ok(text),
            Serialized::Mapping(mapping) => render_compact(&mapping),
        },
        FieldValue::Sequence(_) | FieldValue::Set(_) | FieldValue::Mapping(_) => {
            render_compact(&dict_value(value)?)
        }
    }
}

/// Escape `value` for a properties file.
///
/// Characters outside printable ASCII and its whitespace become `\u`
/// followed by the lowercase hexadecimal code point without padding, a
/// newline becomes a backslash followed by the newline, and a backslash is
/// doubled.
///
/// # Examples
///
/// ```rust
/// use configurator::serialize::encode;
///
/// assert_eq!(encode("a\\b"), "a\\\\b");
/// assert_eq!(encode("one\ntwo"), "one\\\ntwo");
/// assert_eq!(encode("unicode\u{2122}"), "unicode\\u2122");
/// ```
#[must_use]
pub fn encode(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\n' => encoded.push_str("\\\n"),
            '\\' => encoded.push_str("\\\\"),
            printable if is_printable(printable) => encoded.push(printable),
            other => encoded.push_str(&format!("\\u{:x}", u32::from(other))),
        }
    }
    encoded
}

const fn is_printable(c: char) -> bool {
    c.is_ascii_graphic() || matches!(c, ' ' | '\t' | '\r' | '\x0b' | '\x0c')
}
