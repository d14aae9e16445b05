//! Extensions for mapping errors to `ConfiguratorResult` concisely.
//!
//! These helpers reduce repetitive `.map_err(|e| ConfiguratorError::…(e))`
//! patterns at hook and writer boundaries.
//!
//! - Use [`IntoConfiguratorResult::into_configurator`] inside modifiers and
//!   validators to surface any caller error verbatim as
//!   [`ConfiguratorError::Custom`].
//! - Use [`IoResultExt::for_path`] for filesystem results that should become
//!   [`ConfiguratorError::Write`].
//!
//! # Examples
//!
//! ```
//! use configurator::{ConfiguratorResult, IntoConfiguratorResult};
//!
//! fn parse_port(raw: &str) -> ConfiguratorResult<u16> {
//!     raw.parse::<u16>().into_configurator()
//! }
//!
//! assert_eq!(parse_port("8080").ok(), Some(8080));
//! assert!(parse_port("eighty").is_err());
//! ```

use camino::Utf8Path;

use crate::{BoxedError, ConfiguratorError, ConfiguratorResult};

/// Generic extension for mapping any `Result<T, E>` into a
/// `ConfiguratorResult<T>` whose error is [`ConfiguratorError::Custom`].
pub trait IntoConfiguratorResult<T> {
    /// Convert `Result<T, E>` into `ConfiguratorResult<T>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error wrapped in [`ConfiguratorError::Custom`].
    fn into_configurator(self) -> ConfiguratorResult<T>;
}

impl<T, E> IntoConfiguratorResult<T> for Result<T, E>
where
    E: Into<BoxedError>,
{
    fn into_configurator(self) -> ConfiguratorResult<T> {
        self.map_err(ConfiguratorError::custom)
    }
}

/// Extension tailored to filesystem results produced while writing
/// configuration artefacts.
pub trait IoResultExt<T> {
    /// Convert `std::io::Result<T>` into `ConfiguratorResult<T>` as a
    /// [`ConfiguratorError::Write`] naming `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfiguratorError::Write`] when the input is `Err`.
    fn for_path(self, path: &Utf8Path) -> ConfiguratorResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn for_path(self, path: &Utf8Path) -> ConfiguratorResult<T> {
        self.map_err(|source| ConfiguratorError::write(path, source))
    }
}
