//! Schema declarations: the typed target shape of a merged template.
//!
//! A schema is a plain struct with named fields that derives
//! [`Schema`](macro@crate::Schema) alongside `serde::Deserialize`. The derive
//! records a static [`SchemaDescriptor`] listing the declared fields in
//! order, which fields hold nested schemas, and which serializer the schema
//! is bound to. Both [`instantiate`] and the serializers consult that
//! descriptor instead of reflecting over the type.
//!
//! # Example
//!
//! ```rust
//! use configurator::{Format, Schema, template};
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize, Schema)]
//! struct Endpoint {
//!     host: String,
//!     port: u16,
//! }
//!
//! #[derive(Debug, Deserialize, Schema)]
//! #[configurator(format = "json")]
//! struct Service {
//!     name: String,
//!     #[configurator(nested)]
//!     endpoint: Endpoint,
//! }
//!
//! let service: Service = configurator::instantiate(&template! {
//!     name: "api",
//!     endpoint: template! { host: "localhost", port: 8080 },
//! })?;
//! assert_eq!(service.endpoint.port, 8080);
//! assert_eq!(Service::descriptor().format(), Format::Json);
//! # Ok::<_, configurator::ConfiguratorError>(())
//! ```

mod instantiate;
mod value;

use std::fmt;

use serde::de::DeserializeOwned;

use crate::serialize::{self, Serialized};
use crate::{ConfiguratorResult, Template};

pub use instantiate::instantiate;
pub use value::{FieldValue, Primitive, Record, ToFieldValue};
pub(crate) use value::float_repr;

/// Serializer a schema type is bound to.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Format {
    /// Generic keyed mapping.
    #[default]
    Dict,
    /// Canonical JSON text with sorted keys and four-space indentation.
    Json,
    /// Java-style properties text.
    Properties,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Dict => "dict",
            Self::Json => "json",
            Self::Properties => "properties",
        })
    }
}

/// Declared field of a schema.
#[derive(Clone, Copy, Debug)]
pub struct FieldDescriptor {
    name: &'static str,
    nested: Option<fn() -> &'static SchemaDescriptor>,
}

impl FieldDescriptor {
    /// Declare a field whose template value is taken verbatim.
    #[must_use]
    pub const fn value(name: &'static str) -> Self {
        Self { name, nested: None }
    }

    /// Declare a field holding a nested schema described by `schema`.
    #[must_use]
    pub const fn nested(name: &'static str, schema: fn() -> &'static SchemaDescriptor) -> Self {
        Self {
            name,
            nested: Some(schema),
        }
    }

    /// Field name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Descriptor of the nested schema, if the field holds one.
    #[must_use]
    pub fn nested_schema(&self) -> Option<&'static SchemaDescriptor> {
        self.nested.map(|schema| schema())
    }
}

/// Static description of a schema type produced by `#[derive(Schema)]`.
#[derive(Debug)]
pub struct SchemaDescriptor {
    name: &'static str,
    format: Format,
    fields: &'static [FieldDescriptor],
}

impl SchemaDescriptor {
    /// Describe a schema named `name`, bound to `format`, declaring `fields`
    /// in order.
    #[must_use]
    pub const fn new(name: &'static str, format: Format, fields: &'static [FieldDescriptor]) -> Self {
        Self {
            name,
            format,
            fields,
        }
    }

    /// Schema type name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Bound serializer.
    #[must_use]
    pub const fn format(&self) -> Format {
        self.format
    }

    /// Declared fields in declaration order.
    #[must_use]
    pub const fn fields(&self) -> &'static [FieldDescriptor] {
        self.fields
    }

    /// Looks up a declared field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }
}

/// A statically shaped configuration record.
///
/// Implemented by `#[derive(Schema)]`; manual implementations must keep
/// [`Schema::descriptor`] and [`Schema::record`] in agreement about field
/// names and order.
pub trait Schema: DeserializeOwned {
    /// Static description of the declared fields.
    fn descriptor() -> &'static SchemaDescriptor;

    /// Snapshot of the instance's field values in declaration order.
    fn record(&self) -> Record;

    /// Instantiate the schema from a fully merged template.
    ///
    /// # Errors
    ///
    /// See [`instantiate`].
    fn from_template(template: &Template) -> ConfiguratorResult<Self> {
        instantiate(template)
    }

    /// Serialize the instance with the bound serializer.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfiguratorError::Serialize`] when JSON rendering
    /// fails.
    fn serialized(&self) -> ConfiguratorResult<Serialized> {
        serialize::serialize(&self.record())
    }
}
