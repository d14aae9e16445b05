//! Directory handling for [`super::FileWriter`].

use std::io;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8::Dir};

/// Directory receiving `path`. A bare file name lands in the working
/// directory.
pub(super) fn target_dir(path: &Utf8Path) -> &Utf8Path {
    path.parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."))
}

/// Create `directory` with any missing ancestors and open it for writing.
pub(super) fn ensure_dir(directory: &Utf8Path) -> io::Result<Dir> {
    Dir::create_ambient_dir_all(directory, ambient_authority())?;
    Dir::open_ambient_dir(directory, ambient_authority())
}

/// Final component of `path`, which must name a file.
pub(super) fn file_name(path: &Utf8Path) -> io::Result<&str> {
    path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("output path '{path}' does not name a file"),
        )
    })
}
