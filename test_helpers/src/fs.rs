//! Temporary output directories with UTF-8 paths.
//!
//! # Examples
//!
//! ```
//! use test_helpers::fs::TempOutput;
//!
//! let out = TempOutput::new()?;
//! std::fs::write(out.join("config.json"), "{}")?;
//! assert_eq!(out.read("config.json")?, "{}");
//! # Ok::<_, anyhow::Error>(())
//! ```

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Temporary directory removed on drop, addressed through UTF-8 paths.
#[derive(Debug)]
pub struct TempOutput {
    root: Utf8PathBuf,
    _dir: TempDir,
}

impl TempOutput {
    /// Create a fresh temporary directory.
    ///
    /// # Errors
    ///
    /// Returns an error when the directory cannot be created or its path is
    /// not valid UTF-8.
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create temporary directory")?;
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
            .map_err(|path| anyhow!("temporary directory is not UTF-8: {}", path.display()))?;
        Ok(Self { root, _dir: dir })
    }

    /// Root of the temporary directory.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.root
    }

    /// Path of `relative` inside the temporary directory.
    #[must_use]
    pub fn join(&self, relative: impl AsRef<Utf8Path>) -> Utf8PathBuf {
        self.root.join(relative)
    }

    /// Read `relative` as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns an error when the file is missing or not valid UTF-8.
    pub fn read(&self, relative: impl AsRef<Utf8Path>) -> Result<String> {
        let path = self.join(relative);
        std::fs::read_to_string(&path).with_context(|| format!("read {path}"))
    }

    /// Returns `true` when `relative` exists.
    #[must_use]
    pub fn exists(&self, relative: impl AsRef<Utf8Path>) -> bool {
        self.join(relative).exists()
    }
}
