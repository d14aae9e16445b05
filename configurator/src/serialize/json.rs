//! JSON text serializer.

use std::io;

use serde::Serialize;
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter};

use super::dict::to_mapping;
use crate::schema::{Record, float_repr};
use crate::{ConfiguratorError, ConfiguratorResult};

/// Serialize `record` as JSON with sorted keys and four-space indentation.
///
/// The generic mapping is rendered, so nested text-bound schemas appear as
/// JSON strings and dict-bound ones as objects. Sets render as arrays.
/// Characters outside printable ASCII are escaped as lowercase `\uXXXX`
/// UTF-16 units and floats use a signed two-digit exponent (`1e-05`), so the
/// output is pure ASCII.
///
/// # Errors
///
/// Returns [`ConfiguratorError::Serialize`] when rendering fails.
///
/// # Examples
///
/// ```rust
/// use configurator::{Schema, serialize};
/// use serde::Deserialize;
///
/// #[derive(Deserialize, Schema)]
/// #[configurator(format = "json")]
/// struct Flags {
///     verbose: bool,
///     level: f64,
/// }
///
/// let text = serialize::to_json(&Flags { verbose: true, level: 1.0 }.record())?;
/// assert_eq!(text, "{\n    \"level\": 1.0,\n    \"verbose\": true\n}");
/// # Ok::<_, configurator::ConfiguratorError>(())
/// ```
pub fn to_json(record: &Record) -> ConfiguratorResult<String> {
    render(&to_mapping(record)?)
}

/// Serialize `record` as single-line JSON with sorted keys.
///
/// Unlike [`to_json`], non-ASCII characters are kept as UTF-8. This form is
/// embedded in properties values, whose own escaping covers them.
///
/// # Errors
///
/// Returns [`ConfiguratorError::Serialize`] when rendering fails.
pub fn to_json_compact(record: &Record) -> ConfiguratorResult<String> {
    render_compact(&to_mapping(record)?)
}

pub(super) fn render<T: Serialize + ?Sized>(value: &T) -> ConfiguratorResult<String> {
    write_with(value, CanonicalFormatter::ascii(PrettyFormatter::with_indent(b"    ")))
}

pub(super) fn render_compact<T: Serialize + ?Sized>(value: &T) -> ConfiguratorResult<String> {
    write_with(value, CanonicalFormatter::utf8(CompactFormatter))
}

fn write_with<T, F>(value: &T, formatter: F) -> ConfiguratorResult<String>
where
    T: Serialize + ?Sized,
    F: Formatter,
{
    let mut buffer = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value
        .serialize(&mut serializer)
        .map_err(ConfiguratorError::Serialize)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Layout formatter wrapper fixing float text and, optionally, ASCII-only
/// string escaping.
struct CanonicalFormatter<F> {
    layout: F,
    ascii_only: bool,
}

impl<F: Formatter> CanonicalFormatter<F> {
    const fn ascii(layout: F) -> Self {
        Self {
            layout,
            ascii_only: true,
        }
    }

    const fn utf8(layout: F) -> Self {
        Self {
            layout,
            ascii_only: false,
        }
    }
}

const fn is_printable_ascii(c: char) -> bool {
    matches!(c, ' '..='~')
}

impl<F: Formatter> Formatter for CanonicalFormatter<F> {
    fn write_f64<W: ?Sized + io::Write>(&mut self, writer: &mut W, value: f64) -> io::Result<()> {
        writer.write_all(float_repr(value).as_bytes())
    }

    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        if !self.ascii_only || fragment.chars().all(is_printable_ascii) {
            return writer.write_all(fragment.as_bytes());
        }
        let mut units = [0_u16; 2];
        for c in fragment.chars() {
            if is_printable_ascii(c) {
                write!(writer, "{c}")?;
                continue;
            }
            for unit in &*c.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
        }
        Ok(())
    }

    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.layout.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.layout.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.layout.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.layout.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.layout.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.layout.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.layout.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.layout.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.layout.end_object_value(writer)
    }
}
