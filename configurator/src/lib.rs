//! Core crate for the `configurator` configuration generator.
//!
//! Configurations are described as ordered lists of dynamic [`Template`]s
//! that are deep merged into one flat template, instantiated as a strictly
//! typed [`Schema`], adjusted and validated by caller hooks, and finally
//! serialized and written out. A [`ConfigSet`] runs those phases over a
//! group of related configurations so set-wide hooks can keep them
//! consistent.
//!
//! The `#[derive(Schema)]` macro lives in the companion
//! `configurator_macros` crate and is re-exported here.
//!
//! # Example
//!
//! ```rust
//! use configurator::{Config, Schema, Serialized, template};
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize, Schema)]
//! #[configurator(format = "properties")]
//! struct Hive {
//!     metastore: String,
//!     warehouse: String,
//! }
//!
//! let base = template! { metastore: "thrift://db:9083", warehouse: "/data" };
//! let overlay = template! { warehouse: "/warehouse" };
//! let mut config = Config::new(|hive: &Hive| {
//!     assert_eq!(
//!         hive.serialized()?,
//!         Serialized::Text(String::from("metastore=thrift://db:9083\nwarehouse=/warehouse")),
//!     );
//!     Ok(())
//! })
//! .with_templates([base, overlay]);
//! config.resolve()?;
//! config.write()?;
//! # Ok::<_, configurator::ConfiguratorError>(())
//! ```

extern crate self as configurator;

pub use configurator_macros::Schema;

mod error;
mod result_ext;

pub mod pipeline;
pub mod schema;
pub mod serialize;
pub mod template;
pub mod writer;

pub use error::{BoxedError, ConfiguratorError, ConfiguratorResult};
pub use pipeline::{AnyConfig, Config, ConfigSet};
pub use result_ext::{IntoConfiguratorResult, IoResultExt};
pub use schema::{
    FieldDescriptor, FieldValue, Format, Primitive, Record, Schema, SchemaDescriptor,
    ToFieldValue, instantiate,
};
pub use serialize::{DictValue, Mapping, Serialized};
pub use template::{Template, TemplateValue, Transform, UNSET};
pub use writer::FileWriter;
