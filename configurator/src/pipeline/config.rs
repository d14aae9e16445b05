//! A single configuration: templates in, one validated instance out.

use std::fmt;

use super::{Modifier, Validator, Writer};
use crate::schema::Schema;
use crate::{ConfiguratorError, ConfiguratorResult, Template};

/// One configuration artefact built from an ordered list of templates.
///
/// A config starts unresolved. [`Config::resolve`] merges the templates,
/// instantiates `S`, and applies the modifiers; only then may
/// [`Config::validate`] and [`Config::write`] run.
pub struct Config<S> {
    name: Option<String>,
    templates: Vec<Template>,
    modifiers: Vec<Modifier<S>>,
    validators: Vec<Validator<S>>,
    writer: Writer<S>,
    output: Option<S>,
}

impl<S: Schema> Config<S> {
    /// Create an unresolved config persisted by `writer`.
    #[must_use]
    pub fn new<W>(writer: W) -> Self
    where
        W: Fn(&S) -> ConfiguratorResult<()> + 'static,
    {
        Self {
            name: None,
            templates: Vec::new(),
            modifiers: Vec::new(),
            validators: Vec::new(),
            writer: Box::new(writer),
            output: None,
        }
    }

    /// Label the config in log output. Defaults to the schema name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Append a template; later templates win.
    #[must_use]
    pub fn with_template(mut self, template: Template) -> Self {
        self.templates.push(template);
        self
    }

    /// Append several templates in order.
    #[must_use]
    pub fn with_templates(mut self, templates: impl IntoIterator<Item = Template>) -> Self {
        self.templates.extend(templates);
        self
    }

    /// Append a modifier run on the instance after instantiation.
    #[must_use]
    pub fn with_modifier<F>(mut self, modifier: F) -> Self
    where
        F: Fn(&mut S) -> ConfiguratorResult<()> + 'static,
    {
        self.modifiers.push(Box::new(modifier));
        self
    }

    /// Append a validator run by [`Config::validate`].
    #[must_use]
    pub fn with_validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&S) -> ConfiguratorResult<()> + 'static,
    {
        self.validators.push(Box::new(validator));
        self
    }

    /// Label used in log output.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name
            .as_deref()
            .unwrap_or_else(|| S::descriptor().name())
    }

    /// Templates in merge order.
    #[must_use]
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Merge every template, in order, into a fresh template.
    #[must_use]
    pub fn flat_template(&self) -> Template {
        Template::flatten(&self.templates)
    }

    /// Build the output instance.
    ///
    /// Any previous output is discarded first. The flat template is
    /// instantiated as `S` and every modifier is applied in order; the output
    /// is stored only when all of them succeed.
    ///
    /// # Errors
    ///
    /// Returns the instantiation error or the first modifier error. The
    /// config is left unresolved in both cases.
    pub fn resolve(&mut self) -> ConfiguratorResult<()> {
        self.output = None;
        let mut instance = S::from_template(&self.flat_template())?;
        for (index, modifier) in self.modifiers.iter().enumerate() {
            tracing::debug!(config = self.name(), index, "applying config modifier");
            modifier(&mut instance)?;
        }
        self.output = Some(instance);
        tracing::debug!(config = self.name(), "config resolved");
        Ok(())
    }

    /// Run every validator in order against the output.
    ///
    /// # Errors
    ///
    /// Returns [`ConfiguratorError::NotResolved`] before [`Config::resolve`]
    /// succeeded, otherwise the first validator error unchanged. Remaining
    /// validators are skipped after a failure.
    pub fn validate(&self) -> ConfiguratorResult<()> {
        let output = self.resolved("validate")?;
        for (index, validator) in self.validators.iter().enumerate() {
            tracing::debug!(config = self.name(), index, "applying config validator");
            validator(output)?;
        }
        Ok(())
    }

    /// Hand the output to the writer.
    ///
    /// # Errors
    ///
    /// Returns [`ConfiguratorError::NotResolved`] before [`Config::resolve`]
    /// succeeded, otherwise whatever the writer returns.
    pub fn write(&self) -> ConfiguratorResult<()> {
        let output = self.resolved("write")?;
        tracing::debug!(config = self.name(), "writing config");
        (self.writer)(output)
    }

    fn resolved(&self, operation: &'static str) -> ConfiguratorResult<&S> {
        self.output
            .as_ref()
            .ok_or_else(|| ConfiguratorError::not_resolved(operation))
    }

    /// Resolved instance, if any.
    #[must_use]
    pub const fn output(&self) -> Option<&S> {
        self.output.as_ref()
    }

    /// Mutable access to the resolved instance, if any.
    #[must_use]
    pub const fn output_mut(&mut self) -> Option<&mut S> {
        self.output.as_mut()
    }

    /// Returns `true` once [`Config::resolve`] has succeeded.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.output.is_some()
    }

    /// Consume the config, returning the resolved instance, if any.
    #[must_use]
    pub fn into_output(self) -> Option<S> {
        self.output
    }
}

impl<S: fmt::Debug> fmt::Debug for Config<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("name", &self.name)
            .field("templates", &self.templates)
            .field("modifiers", &self.modifiers.len())
            .field("validators", &self.validators.len())
            .field("output", &self.output)
            .finish_non_exhaustive()
    }
}
