//! Convenience constructors for `ConfiguratorError`.

use camino::Utf8Path;

use super::{BoxedError, ConfiguratorError};

impl ConfiguratorError {
    /// Construct a validation failure for `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use configurator::ConfiguratorError;
    /// let e = ConfiguratorError::validation("subnet_id", "subnet shared by two clusters");
    /// assert!(matches!(e, ConfiguratorError::Validation { .. }));
    /// ```
    #[must_use]
    pub fn validation(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Wrap a caller-supplied error so it propagates unchanged.
    ///
    /// The original error stays reachable through [`ConfiguratorError::downcast_custom`].
    ///
    /// # Examples
    ///
    /// ```
    /// use configurator::ConfiguratorError;
    /// let io = std::io::Error::other("disk on fire");
    /// let e = ConfiguratorError::custom(io);
    /// assert_eq!(e.to_string(), "disk on fire");
    /// ```
    #[must_use]
    pub fn custom<E>(source: E) -> Self
    where
        E: Into<BoxedError>,
    {
        Self::Custom(source.into())
    }

    /// Construct the usage error raised when `operation` runs before
    /// `resolve()`.
    #[must_use]
    pub const fn not_resolved(operation: &'static str) -> Self {
        Self::NotResolved { operation }
    }

    /// Construct a write failure for `path`.
    #[must_use]
    pub fn write(path: &Utf8Path, source: std::io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Borrow the caller-supplied error as `E` when this is a
    /// [`ConfiguratorError::Custom`] wrapping that type.
    #[must_use]
    pub fn downcast_custom<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        match self {
            Self::Custom(inner) => inner.downcast_ref::<E>(),
            _ => None,
        }
    }
}
