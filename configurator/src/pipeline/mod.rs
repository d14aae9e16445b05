//! Resolution, validation, and writing of configurations.
//!
//! A [`Config`] turns an ordered list of templates into one schema instance
//! and hands it to a writer. A [`ConfigSet`] materializes a group of configs
//! together so set-wide hooks can inspect or adjust every instance before
//! anything is written. The configs of one set may use different schemas;
//! set hooks see their outputs as [`Any`] or, through the typed variants,
//! only the outputs of one schema.
//!
//! # Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use configurator::{Config, ConfigSet, ConfiguratorError, Schema, template};
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize, Schema)]
//! struct Node {
//!     name: String,
//!     workers: u32,
//! }
//!
//! let written = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&written);
//! let config = Config::new(move |node: &Node| {
//!     sink.borrow_mut().push(node.name.clone());
//!     Ok(())
//! })
//! .with_template(template! { name: "alpha", workers: 2 })
//! .with_template(template! { workers: 4 })
//! .with_validator(|node: &Node| {
//!     if node.workers == 0 {
//!         return Err(ConfiguratorError::validation("workers", "must be positive"));
//!     }
//!     Ok(())
//! });
//!
//! let mut set = ConfigSet::new().with_config(config);
//! set.materialize()?;
//! assert_eq!(*written.borrow(), ["alpha"]);
//! # Ok::<_, ConfiguratorError>(())
//! ```

mod any_config;
mod config;
mod config_set;

use std::any::Any;

pub use any_config::AnyConfig;
pub use config::Config;
pub use config_set::ConfigSet;

use crate::ConfiguratorResult;

/// Hook adjusting one resolved instance in place.
pub type Modifier<S> = Box<dyn Fn(&mut S) -> ConfiguratorResult<()>>;

/// Hook checking one resolved instance.
pub type Validator<S> = Box<dyn Fn(&S) -> ConfiguratorResult<()>>;

/// Hook persisting one validated instance.
pub type Writer<S> = Box<dyn Fn(&S) -> ConfiguratorResult<()>>;

/// Hook adjusting every resolved instance of a set at once.
pub type SetModifier = Box<dyn Fn(&mut [&mut dyn Any]) -> ConfiguratorResult<()>>;

/// Hook checking every validated instance of a set at once.
pub type SetValidator = Box<dyn Fn(&[&dyn Any]) -> ConfiguratorResult<()>>;
