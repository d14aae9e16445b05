//! Schema-erased view of a [`Config`] used by [`super::ConfigSet`].

use std::any::Any;

use super::Config;
use crate::ConfiguratorResult;
use crate::schema::Schema;

/// A config whose schema type has been erased.
///
/// Implemented for every [`Config<S>`] so one set can hold configs of
/// different schemas. Outputs are exposed as [`Any`] and recovered with
/// `downcast_ref::<S>()`.
pub trait AnyConfig {
    /// Label used in log output.
    fn name(&self) -> &str;

    /// See [`Config::resolve`].
    ///
    /// # Errors
    ///
    /// Returns the instantiation error or the first modifier error.
    fn resolve(&mut self) -> ConfiguratorResult<()>;

    /// See [`Config::validate`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfiguratorError::NotResolved`] or the first
    /// validator error.
    fn validate(&self) -> ConfiguratorResult<()>;

    /// See [`Config::write`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfiguratorError::NotResolved`] or the writer error.
    fn write(&self) -> ConfiguratorResult<()>;

    /// Resolved instance, if any.
    fn output_any(&self) -> Option<&dyn Any>;

    /// Mutable access to the resolved instance, if any.
    fn output_any_mut(&mut self) -> Option<&mut dyn Any>;
}

impl<S: Schema + 'static> AnyConfig for Config<S> {
    fn name(&self) -> &str {
        Config::name(self)
    }

    fn resolve(&mut self) -> ConfiguratorResult<()> {
        Config::resolve(self)
    }

    fn validate(&self) -> ConfiguratorResult<()> {
        Config::validate(self)
    }

    fn write(&self) -> ConfiguratorResult<()> {
        Config::write(self)
    }

    fn output_any(&self) -> Option<&dyn Any> {
        self.output().map(|output| output as &dyn Any)
    }

    fn output_any_mut(&mut self) -> Option<&mut dyn Any> {
        self.output_mut().map(|output| output as &mut dyn Any)
    }
}
