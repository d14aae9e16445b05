//! Writers persisting resolved configurations.
//!
//! Any `Fn(&S) -> ConfiguratorResult<()>` closure can act as a writer. The
//! [`FileWriter`] covers the common case of serializing the instance and
//! writing the text to a fixed path.

mod fs;

use camino::{Utf8Path, Utf8PathBuf};

use crate::result_ext::IoResultExt;
use crate::schema::{Format, Schema};
use crate::serialize;
use crate::ConfiguratorResult;

/// Serializes an instance and writes the text to a file.
///
/// Parent directories are created as needed and an existing file is
/// replaced. By default the instance's bound format is used and a trailing
/// newline is appended; dict-bound output is rendered as indented JSON.
///
/// # Examples
///
/// ```rust,no_run
/// use configurator::{Config, FileWriter, Schema, template};
/// use serde::Deserialize;
///
/// #[derive(Deserialize, Schema)]
/// #[configurator(format = "json")]
/// struct Service {
///     name: String,
/// }
///
/// let mut config = Config::new(FileWriter::new("out/service.json").into_writer::<Service>())
///     .with_template(template! { name: "api" });
/// config.resolve()?;
/// config.write()?;
/// # Ok::<_, configurator::ConfiguratorError>(())
/// ```
#[derive(Clone, Debug)]
pub struct FileWriter {
    path: Utf8PathBuf,
    format: Option<Format>,
    trailing_newline: bool,
}

impl FileWriter {
    /// Write to `path`.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            path: path.into(),
            format: None,
            trailing_newline: true,
        }
    }

    /// Serialize with `format` instead of the instance's bound format.
    #[must_use]
    pub const fn with_format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    /// Omit the trailing newline.
    #[must_use]
    pub const fn without_trailing_newline(mut self) -> Self {
        self.trailing_newline = false;
        self
    }

    /// Destination path.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Render `config` to the exact text [`FileWriter::write`] would write.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfiguratorError::Serialize`] when JSON rendering
    /// fails.
    pub fn render<S: Schema>(&self, config: &S) -> ConfiguratorResult<String> {
        let record = config.record();
        let format = self.format.unwrap_or_else(|| record.descriptor().format());
        let mut text = serialize::serialize_as(&record, format)?.into_text()?;
        if self.trailing_newline {
            text.push('\n');
        }
        Ok(text)
    }

    /// Serialize `config` and write it to the destination path.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfiguratorError::Serialize`] when rendering fails
    /// and [`crate::ConfiguratorError::Write`] when a directory cannot be
    /// created or the file cannot be written.
    pub fn write<S: Schema>(&self, config: &S) -> ConfiguratorResult<()> {
        tracing::debug!(path = %self.path, schema = S::descriptor().name(), "serializing configuration");
        let text = self.render(config)?;
        let file_name = fs::file_name(&self.path).for_path(&self.path)?;
        let directory = fs::target_dir(&self.path);
        tracing::info!(%directory, "making sure the output directory exists");
        let dir = fs::ensure_dir(directory).for_path(directory)?;
        tracing::info!(path = %self.path, "writing configuration");
        dir.write(file_name, text).for_path(&self.path)
    }

    /// Turn the writer into a closure accepted by [`crate::Config::new`].
    #[must_use]
    pub fn into_writer<S: Schema + 'static>(self) -> impl Fn(&S) -> ConfiguratorResult<()> + 'static {
        move |config: &S| self.write(config)
    }
}
