//! Group materialization of related configs.

use std::any::Any;
use std::fmt;

use super::{AnyConfig, Config, SetModifier, SetValidator};
use crate::schema::Schema;
use crate::{ConfiguratorError, ConfiguratorResult};

/// Configs materialized together, committed all or nothing.
///
/// Configs may use different schemas. Set-level hooks see every config's
/// output at once, which lets them keep related artefacts consistent (for
/// instance rejecting two clusters that share a subnet). Plain hooks receive
/// the outputs as [`Any`] in set order; the `with_typed_*` variants receive
/// only the outputs of one schema.
#[derive(Default)]
pub struct ConfigSet {
    configs: Vec<Box<dyn AnyConfig>>,
    modifiers: Vec<SetModifier>,
    validators: Vec<SetValidator>,
}

impl ConfigSet {
    /// Create an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            configs: Vec::new(),
            modifiers: Vec::new(),
            validators: Vec::new(),
        }
    }

    /// Append a config; configs are processed in insertion order.
    #[must_use]
    pub fn with_config<S: Schema + 'static>(mut self, config: Config<S>) -> Self {
        self.configs.push(Box::new(config));
        self
    }

    /// Append several configs of one schema in order.
    #[must_use]
    pub fn with_configs<S: Schema + 'static>(
        mut self,
        configs: impl IntoIterator<Item = Config<S>>,
    ) -> Self {
        self.configs
            .extend(configs.into_iter().map(|config| Box::new(config) as Box<dyn AnyConfig>));
        self
    }

    /// Append a set-level modifier receiving every resolved output.
    #[must_use]
    pub fn with_modifier<F>(mut self, modifier: F) -> Self
    where
        F: Fn(&mut [&mut dyn Any]) -> ConfiguratorResult<()> + 'static,
    {
        self.modifiers.push(Box::new(modifier));
        self
    }

    /// Append a set-level modifier receiving the resolved outputs of schema
    /// `S`, in set order. Outputs of other schemas are left out.
    #[must_use]
    pub fn with_typed_modifier<S, F>(self, modifier: F) -> Self
    where
        S: Schema + 'static,
        F: Fn(&mut [&mut S]) -> ConfiguratorResult<()> + 'static,
    {
        self.with_modifier(move |outputs: &mut [&mut dyn Any]| {
            let mut typed: Vec<&mut S> = outputs
                .iter_mut()
                .filter_map(|output| (**output).downcast_mut::<S>())
                .collect();
            modifier(typed.as_mut_slice())
        })
    }

    /// Append a set-level validator receiving every validated output.
    #[must_use]
    pub fn with_validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&[&dyn Any]) -> ConfiguratorResult<()> + 'static,
    {
        self.validators.push(Box::new(validator));
        self
    }

    /// Append a set-level validator receiving the validated outputs of
    /// schema `S`, in set order. Outputs of other schemas are left out.
    #[must_use]
    pub fn with_typed_validator<S, F>(self, validator: F) -> Self
    where
        S: Schema + 'static,
        F: Fn(&[&S]) -> ConfiguratorResult<()> + 'static,
    {
        self.with_validator(move |outputs: &[&dyn Any]| {
            let typed: Vec<&S> = outputs
                .iter()
                .filter_map(|output| (**output).downcast_ref::<S>())
                .collect();
            validator(typed.as_slice())
        })
    }

    /// Number of configs in the set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.configs.len()
    }

    /// Returns `true` when the set holds no configs.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    /// Configs in processing order.
    #[must_use]
    pub const fn configs(&self) -> &[Box<dyn AnyConfig>] {
        self.configs.as_slice()
    }

    /// Resolved outputs of schema `S`, in set order.
    #[must_use]
    pub fn outputs<S: Schema + 'static>(&self) -> Vec<&S> {
        self.configs
            .iter()
            .filter_map(|config| config.output_any())
            .filter_map(|output| output.downcast_ref::<S>())
            .collect()
    }

    /// Generate every config and write it out.
    ///
    /// Phases run strictly in this order, each over all configs before the
    /// next begins:
    ///
    /// 1. resolve every config;
    /// 2. apply each set modifier to all outputs;
    /// 3. validate every config;
    /// 4. apply each set validator to all outputs;
    /// 5. write every config.
    ///
    /// # Errors
    ///
    /// Returns the first failure from any phase unchanged. Later steps are
    /// skipped, so nothing is written unless every earlier phase succeeded.
    pub fn materialize(&mut self) -> ConfiguratorResult<()> {
        let span = tracing::info_span!("materialize", configs = self.configs.len());
        let _entered = span.enter();
        tracing::info!("starting materialization");

        for config in &mut self.configs {
            config.resolve()?;
        }

        let mut resolved = erased_outputs_mut(&mut self.configs)?;
        for modifier in &self.modifiers {
            modifier(resolved.as_mut_slice())?;
        }

        for config in &self.configs {
            config.validate()?;
        }

        let validated = erased_outputs(&self.configs)?;
        for validator in &self.validators {
            validator(validated.as_slice())?;
        }

        for config in &self.configs {
            tracing::debug!(config = config.name(), "committing config");
            config.write()?;
        }
        tracing::info!("materialization complete");
        Ok(())
    }
}

fn erased_outputs_mut(configs: &mut [Box<dyn AnyConfig>]) -> ConfiguratorResult<Vec<&mut dyn Any>> {
    configs
        .iter_mut()
        .map(|config| {
            config
                .output_any_mut()
                .ok_or_else(|| ConfiguratorError::not_resolved("materialize"))
        })
        .collect()
}

fn erased_outputs(configs: &[Box<dyn AnyConfig>]) -> ConfiguratorResult<Vec<&dyn Any>> {
    configs
        .iter()
        .map(|config| {
            config
                .output_any()
                .ok_or_else(|| ConfiguratorError::not_resolved("materialize"))
        })
        .collect()
}

impl fmt::Debug for ConfigSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.configs.iter().map(|config| config.name()).collect();
        f.debug_struct("ConfigSet")
            .field("configs", &names)
            .field("modifiers", &self.modifiers.len())
            .field("validators", &self.validators.len())
            .finish()
    }
}
