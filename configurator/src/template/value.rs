//! Values stored in a [`Template`](super::Template).

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::Template;

/// A unary function applied to the current value of a field while merging.
///
/// Transforms compare equal only when they share the same underlying
/// function object, so clones of a transform are equal to each other.
#[derive(Clone)]
pub struct Transform(Arc<dyn Fn(&TemplateValue) -> TemplateValue + Send + Sync>);

impl Transform {
    /// Wrap `f` as a transform receiving the field's current value.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&TemplateValue) -> TemplateValue + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Build a transform operating on plain values only.
    ///
    /// Inputs that are not [`TemplateValue::Value`] (a nested template, the
    /// unset sentinel, or a transform) pass through unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use configurator::{Template, TemplateValue, Transform};
    /// use serde_json::{Value, json};
    ///
    /// let bump = Transform::on_value(|v| json!(v.as_i64().unwrap_or_default() + 10));
    /// let mut t = Template::new().with("a", 1);
    /// t.merge_from(&Template::new().with("a", bump));
    /// assert_eq!(t.get("a"), Some(&TemplateValue::Value(json!(11))));
    /// ```
    pub fn on_value<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        Self::new(move |current| match current {
            TemplateValue::Value(value) => TemplateValue::Value(f(value)),
            other => other.clone(),
        })
    }

    /// Apply the transform to `current`.
    #[must_use]
    pub fn apply(&self, current: &TemplateValue) -> TemplateValue {
        (self.0)(current)
    }
}

impl PartialEq for Transform {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Transform")
            .field(&Arc::as_ptr(&self.0).cast::<()>())
            .finish()
    }
}

/// Tagged value held by a template field.
#[derive(Clone, Debug, PartialEq)]
pub enum TemplateValue {
    /// A plain value taken verbatim during instantiation.
    Value(Value),
    /// A nested template, merged recursively and instantiated with the
    /// field's nested schema.
    Template(Template),
    /// A function applied to the current value during merging.
    Transform(Transform),
    /// Sentinel omitting the field from the instantiated record so the
    /// schema's serde default applies.
    Unset,
}

/// The unset sentinel.
pub const UNSET: TemplateValue = TemplateValue::Unset;

impl TemplateValue {
    /// Build a transform value from `f`.
    pub fn transform<F>(f: F) -> Self
    where
        F: Fn(&Self) -> Self + Send + Sync + 'static,
    {
        Self::Transform(Transform::new(f))
    }

    /// Returns the nested template when this value is one.
    #[must_use]
    pub const fn as_template(&self) -> Option<&Template> {
        match self {
            Self::Template(template) => Some(template),
            _ => None,
        }
    }

    /// Returns the plain value when this value is one.
    #[must_use]
    pub const fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }
}

impl From<Template> for TemplateValue {
    fn from(template: Template) -> Self {
        Self::Template(template)
    }
}

impl From<Transform> for TemplateValue {
    fn from(transform: Transform) -> Self {
        Self::Transform(transform)
    }
}

impl From<Value> for TemplateValue {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl<T> From<Option<T>> for TemplateValue
where
    T: Into<Value>,
{
    fn from(value: Option<T>) -> Self {
        Self::Value(value.map_or(Value::Null, Into::into))
    }
}

impl<T> From<Vec<T>> for TemplateValue
where
    T: Into<Value>,
{
    fn from(values: Vec<T>) -> Self {
        Self::Value(Value::Array(values.into_iter().map(Into::into).collect()))
    }
}

macro_rules! plain_value_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for TemplateValue {
                fn from(value: $ty) -> Self {
                    Self::Value(Value::from(value))
                }
            }
        )*
    };
}

plain_value_from!(bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, String, &str);
