//! Conversion of a merged template into a typed schema instance.

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use super::{FieldDescriptor, Schema, SchemaDescriptor};
use crate::{ConfiguratorError, ConfiguratorResult, Template, TemplateValue};

/// Instantiate `S` from a fully merged template.
///
/// The template must carry exactly the fields `S` declares. For each declared
/// field, in declaration order, a nested template is instantiated with the
/// field's nested schema, [`TemplateValue::Unset`] omits the field so the
/// schema's serde default applies, and any other value is taken verbatim.
///
/// # Errors
///
/// - [`ConfiguratorError::SchemaMismatch`] when the template and schema field
///   sets differ, at any nesting level.
/// - [`ConfiguratorError::UnexpectedTemplate`] when a template is supplied for
///   a field not declared as a nested schema.
/// - [`ConfiguratorError::UnresolvedTransform`] when a transform value
///   survived merging.
/// - [`ConfiguratorError::Instantiate`] when the values do not fit the field
///   types.
///
/// # Examples
///
/// ```rust
/// use configurator::{ConfiguratorError, Schema, instantiate, template};
/// use serde::Deserialize;
///
/// #[derive(Debug, Deserialize, Schema)]
/// struct Pair {
///     x: i32,
///     y: i32,
/// }
///
/// let pair: Pair = instantiate(&template! { x: 1, y: 2 })?;
/// assert_eq!((pair.x, pair.y), (1, 2));
///
/// let err = instantiate::<Pair>(&template! { x: 1 }).unwrap_err();
/// assert!(matches!(err, ConfiguratorError::SchemaMismatch { .. }));
/// # Ok::<_, ConfiguratorError>(())
/// ```
pub fn instantiate<S: Schema>(template: &Template) -> ConfiguratorResult<S> {
    let descriptor = S::descriptor();
    let object = collect_fields(descriptor, template)?;
    tracing::debug!(schema = descriptor.name(), "instantiating schema");
    serde_json::from_value(Value::Object(object)).map_err(|source| {
        ConfiguratorError::Instantiate {
            schema: descriptor.name(),
            source,
        }
    })
}

fn collect_fields(
    descriptor: &'static SchemaDescriptor,
    template: &Template,
) -> ConfiguratorResult<Map<String, Value>> {
    ensure_same_fields(descriptor, template)?;
    let mut object = Map::new();
    for field in descriptor.fields() {
        let Some(value) = template.get(field.name()) else {
            continue;
        };
        if let Some(resolved) = resolve_field(descriptor, field, value)? {
            object.insert(field.name().to_owned(), resolved);
        }
    }
    Ok(object)
}

fn resolve_field(
    descriptor: &'static SchemaDescriptor,
    field: &FieldDescriptor,
    value: &TemplateValue,
) -> ConfiguratorResult<Option<Value>> {
    match value {
        TemplateValue::Value(plain) => Ok(Some(plain.clone())),
        TemplateValue::Template(nested) => {
            let nested_descriptor =
                field
                    .nested_schema()
                    .ok_or_else(|| ConfiguratorError::UnexpectedTemplate {
                        schema: descriptor.name(),
                        field: field.name().to_owned(),
                    })?;
            collect_fields(nested_descriptor, nested).map(|object| Some(Value::Object(object)))
        }
        TemplateValue::Transform(_) => Err(ConfiguratorError::UnresolvedTransform {
            schema: descriptor.name(),
            field: field.name().to_owned(),
        }),
        TemplateValue::Unset => Ok(None),
    }
}

fn ensure_same_fields(
    descriptor: &'static SchemaDescriptor,
    template: &Template,
) -> ConfiguratorResult<()> {
    let declared: BTreeSet<&str> = descriptor
        .fields()
        .iter()
        .map(FieldDescriptor::name)
        .collect();
    let present: BTreeSet<&str> = template.fields().collect();
    if declared == present {
        return Ok(());
    }
    Err(ConfiguratorError::SchemaMismatch {
        schema: descriptor.name(),
        missing: declared.difference(&present).map(|f| (*f).to_owned()).collect(),
        unexpected: present.difference(&declared).map(|f| (*f).to_owned()).collect(),
    })
}
