//! Error types produced while composing and materializing configurations.

mod constructors;
mod types;

pub use types::{BoxedError, ConfiguratorError};

/// Result alias used throughout the crate.
pub type ConfiguratorResult<T> = Result<T, ConfiguratorError>;

#[cfg(test)]
mod tests;
