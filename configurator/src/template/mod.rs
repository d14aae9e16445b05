//! Ordered, dynamically keyed templates and their deep merge.
//!
//! A [`Template`] is a bag of named [`TemplateValue`]s that keeps the order in
//! which fields were first introduced. Templates compose through
//! [`Template::merge_from`]: later templates win on plain values, extend nested
//! templates without discarding existing fields, and may derive a field from
//! its current value through a [`Transform`].
//!
//! # Example
//!
//! ```rust
//! use configurator::{Template, template};
//!
//! let mut base = template! {
//!     region: "us-east-1",
//!     ec2: template! { zone: "Any" },
//! };
//! base.merge_from(&template! { ec2: template! { vpc_id: "vpc-01234567" } });
//!
//! assert_eq!(
//!     base,
//!     template! {
//!         region: "us-east-1",
//!         ec2: template! { zone: "Any", vpc_id: "vpc-01234567" },
//!     }
//! );
//! ```

mod value;

pub use value::{TemplateValue, Transform, UNSET};

/// Configuration template.
///
/// Field names are unique and iterate in insertion order. Two templates are
/// equal when their field names appear in the same order and every
/// corresponding value compares equal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Template {
    entries: Vec<(String, TemplateValue)>,
}

impl Template {
    /// Create an empty template.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Set `name` to `value`, returning the template for chaining.
    ///
    /// Setting a field that already exists replaces its value and keeps its
    /// position.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<TemplateValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Set `name` to `value` in place.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<TemplateValue>) {
        let field = name.into();
        let incoming = value.into();
        match self.get_mut(&field) {
            Some(current) => *current = incoming,
            None => self.entries.push((field, incoming)),
        }
    }

    /// Returns the value of `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TemplateValue> {
        self.entries
            .iter()
            .find_map(|(field, value)| (field == name).then_some(value))
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut TemplateValue> {
        self.entries
            .iter_mut()
            .find_map(|(field, value)| (field == name).then_some(value))
    }

    /// Returns `true` when the template defines `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate over field names in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(field, _)| field.as_str())
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TemplateValue)> {
        self.entries
            .iter()
            .map(|(field, value)| (field.as_str(), value))
    }

    /// Number of fields.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the template has no fields.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Absorb every field of `other` into `self`.
    ///
    /// Existing fields keep their position; new fields are appended in
    /// `other`'s order. For each incoming field:
    ///
    /// 1. a field unknown to `self` is first added with the incoming value as
    ///    a placeholder;
    /// 2. then exactly one rule resolves the final value:
    ///    - an incoming [`Transform`] replaces the field with the transform
    ///      applied to the current value. For a field added in step 1 the
    ///      current value is the transform itself;
    ///    - an incoming template merged onto a template merges recursively,
    ///      keeping the current template's fields;
    ///    - anything else overwrites the current value.
    ///
    /// Merging never fails: shape mismatches resolve to an overwrite. Values
    /// are cloned from `other`, which is left untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use configurator::template;
    ///
    /// let mut t = template! { a: template! { c: 2 } };
    /// t.merge_from(&template! { a: 1 });
    /// assert_eq!(t, template! { a: 1 });
    /// ```
    pub fn merge_from(&mut self, other: &Self) {
        for (field, incoming) in &other.entries {
            if !self.contains(field) {
                self.entries.push((field.clone(), incoming.clone()));
            }
            let Some(current) = self.get_mut(field) else {
                continue;
            };
            match incoming {
                TemplateValue::Transform(transform) => {
                    let next = transform.apply(current);
                    *current = next;
                }
                TemplateValue::Template(nested) => match current {
                    TemplateValue::Template(existing) => existing.merge_from(nested),
                    _ => *current = incoming.clone(),
                },
                TemplateValue::Value(_) | TemplateValue::Unset => *current = incoming.clone(),
            }
        }
        tracing::debug!(fields = ?self.fields().collect::<Vec<_>>(), "merged template");
    }

    /// Merge `templates` in order into a fresh empty template.
    ///
    /// The first template seeds the field order; later ones override and
    /// extend it.
    #[must_use]
    pub fn flatten<'a, I>(templates: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
    {
        templates
            .into_iter()
            .fold(Self::new(), |mut flat, template| {
                flat.merge_from(template);
                flat
            })
    }
}

impl<K, V> FromIterator<(K, V)> for Template
where
    K: Into<String>,
    V: Into<TemplateValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |template, (name, value)| template.with(name, value))
    }
}

/// Build a [`Template`] from `field: value` pairs.
///
/// Values go through `Into<TemplateValue>`, so plain literals, `json!`
/// values, nested `template!` invocations, and [`Transform`]s all work. Raw
/// identifiers such as `r#type` name the field `type`.
///
/// # Examples
///
/// ```rust
/// use configurator::template;
///
/// let t = template! { r#type: "hadoop2", nodes: 3 };
/// assert_eq!(t.fields().collect::<Vec<_>>(), ["type", "nodes"]);
/// ```
#[macro_export]
macro_rules! template {
    () => {
        $crate::Template::new()
    };
    ($($name:ident : $value:expr),+ $(,)?) => {
        $crate::Template::new()
            $(.with(stringify!($name).trim_start_matches("r#"), $value))+
    };
}
