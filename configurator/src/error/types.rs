//! Primary error enum for the configuration pipeline.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Boxed error supplied by caller hooks.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while resolving, validating, or writing
/// configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfiguratorError {
    /// The merged template does not carry exactly the fields the schema
    /// declares.
    #[error(
        "fields mismatch between schema `{schema}` and template: missing {missing:?}, unexpected {unexpected:?}"
    )]
    SchemaMismatch {
        /// Name of the schema being instantiated.
        schema: &'static str,
        /// Declared fields absent from the template, sorted.
        missing: Vec<String>,
        /// Template fields the schema does not declare, sorted.
        unexpected: Vec<String>,
    },

    /// A nested template was supplied for a field that is not a nested schema.
    #[error("field `{field}` of schema `{schema}` is not a nested schema but received a template")]
    UnexpectedTemplate {
        /// Name of the schema being instantiated.
        schema: &'static str,
        /// Offending field.
        field: String,
    },

    /// A transform survived merging and reached instantiation.
    #[error("field `{field}` of schema `{schema}` still holds an unapplied transform")]
    UnresolvedTransform {
        /// Name of the schema being instantiated.
        schema: &'static str,
        /// Offending field.
        field: String,
    },

    /// The merged values could not be converted into the schema's field types.
    #[error("failed to instantiate schema `{schema}`: {source}")]
    Instantiate {
        /// Name of the schema being instantiated.
        schema: &'static str,
        /// Underlying conversion error.
        #[source]
        source: serde_json::Error,
    },

    /// `validate()` or `write()` was called before `resolve()`.
    #[error("configuration has not been resolved yet; call resolve() before {operation}()")]
    NotResolved {
        /// Operation that required a resolved output.
        operation: &'static str,
    },

    /// A validator rejected the configuration.
    #[error("Validation failed for '{key}': {message}")]
    Validation {
        /// Configuration key that failed validation.
        key: String,
        /// Human-readable explanation of the validation failure.
        message: String,
    },

    /// Error raised by a caller-supplied hook, kept verbatim.
    #[error(transparent)]
    Custom(BoxedError),

    /// Rendering a serialized configuration as JSON text failed.
    #[error("failed to render configuration as JSON: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Writing a configuration artefact failed.
    #[error("failed to write configuration to '{path}': {source}")]
    Write {
        /// Destination that triggered the failure.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
