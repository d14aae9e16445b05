//! Runtime view of a schema instance consumed by the serializers.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt;
use std::hash::BuildHasher;

use serde_json::Value;

use super::SchemaDescriptor;

/// Scalar field value.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// Absent value.
    Null,
    /// Boolean.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer too large for `Int`.
    UInt(u64),
    /// Floating point number.
    Float(f64),
    /// String.
    Str(String),
}

/// Generic string conversion used by the properties serializer.
///
/// Booleans render lowercase, floats use their shortest round-trip form with
/// a signed exponent of at least two digits (`1.0`, `1e-05`), and null
/// renders as the empty string.
impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::UInt(value) => write!(f, "{value}"),
            Self::Float(value) => f.write_str(&float_repr(*value)),
            Self::Str(value) => f.write_str(value),
        }
    }
}

/// Shortest round-trip text of `value`.
///
/// Finite values always carry a fractional part or an exponent (`1.0`,
/// `1e+16`). Exponents are signed and at least two digits wide (`1.5e-07`),
/// and NaN renders as `nan`.
pub(crate) fn float_repr(value: f64) -> String {
    if value.is_nan() {
        return String::from("nan");
    }
    let shortest = format!("{value:?}");
    match shortest.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = exponent
                .strip_prefix('-')
                .map_or(('+', exponent), |magnitude| ('-', magnitude));
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => shortest,
    }
}

/// Value of a schema field, tagged by shape.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    /// Scalar.
    Primitive(Primitive),
    /// Nested schema instance.
    Schema(Record),
    /// Ordered sequence.
    Sequence(Vec<FieldValue>),
    /// Set, in deterministic order.
    Set(Vec<FieldValue>),
    /// Keyed mapping, sorted by key.
    Mapping(Vec<(String, FieldValue)>),
}

/// Field values of one schema instance in declaration order.
#[derive(Clone, Debug)]
pub struct Record {
    descriptor: &'static SchemaDescriptor,
    fields: Vec<(&'static str, FieldValue)>,
}

impl Record {
    /// Pair `descriptor` with the instance's `fields`.
    #[must_use]
    pub const fn new(
        descriptor: &'static SchemaDescriptor,
        fields: Vec<(&'static str, FieldValue)>,
    ) -> Self {
        Self { descriptor, fields }
    }

    /// Descriptor of the schema this record was taken from.
    #[must_use]
    pub const fn descriptor(&self) -> &'static SchemaDescriptor {
        self.descriptor
    }

    /// Field values in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[(&'static str, FieldValue)] {
        &self.fields
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.descriptor.name() == other.descriptor.name() && self.fields == other.fields
    }
}

/// Conversion of a Rust value into a [`FieldValue`].
///
/// `#[derive(Schema)]` implements this for the schema itself, so schema
/// instances nest inside other schemas and collections.
pub trait ToFieldValue {
    /// Tag `self` by shape.
    fn to_field_value(&self) -> FieldValue;
}

macro_rules! primitive_field {
    ($variant:ident => $($ty:ty),*) => {
        $(
            impl ToFieldValue for $ty {
                fn to_field_value(&self) -> FieldValue {
                    FieldValue::Primitive(Primitive::$variant((*self).into()))
                }
            }
        )*
    };
}

primitive_field!(Bool => bool);
primitive_field!(Int => i8, i16, i32, i64);
primitive_field!(UInt => u8, u16, u32, u64);
primitive_field!(Float => f32, f64);

impl ToFieldValue for str {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Primitive(Primitive::Str(self.to_owned()))
    }
}

impl ToFieldValue for String {
    fn to_field_value(&self) -> FieldValue {
        self.as_str().to_field_value()
    }
}

impl ToFieldValue for char {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Primitive(Primitive::Str(self.to_string()))
    }
}

impl<T: ToFieldValue + ?Sized> ToFieldValue for Box<T> {
    fn to_field_value(&self) -> FieldValue {
        (**self).to_field_value()
    }
}

impl<T: ToFieldValue> ToFieldValue for Option<T> {
    fn to_field_value(&self) -> FieldValue {
        self.as_ref().map_or(
            FieldValue::Primitive(Primitive::Null),
            ToFieldValue::to_field_value,
        )
    }
}

impl<T: ToFieldValue> ToFieldValue for [T] {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Sequence(self.iter().map(ToFieldValue::to_field_value).collect())
    }
}

impl<T: ToFieldValue> ToFieldValue for Vec<T> {
    fn to_field_value(&self) -> FieldValue {
        self.as_slice().to_field_value()
    }
}

impl<T: ToFieldValue> ToFieldValue for BTreeSet<T> {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Set(self.iter().map(ToFieldValue::to_field_value).collect())
    }
}

impl<T: ToFieldValue + Ord, S: BuildHasher> ToFieldValue for HashSet<T, S> {
    fn to_field_value(&self) -> FieldValue {
        let mut items: Vec<&T> = self.iter().collect();
        items.sort();
        FieldValue::Set(items.into_iter().map(ToFieldValue::to_field_value).collect())
    }
}

impl<K: fmt::Display, V: ToFieldValue> ToFieldValue for BTreeMap<K, V> {
    fn to_field_value(&self) -> FieldValue {
        mapping(self.iter())
    }
}

impl<K: fmt::Display, V: ToFieldValue, S: BuildHasher> ToFieldValue for HashMap<K, V, S> {
    fn to_field_value(&self) -> FieldValue {
        mapping(self.iter())
    }
}

fn mapping<'a, K, V, I>(entries: I) -> FieldValue
where
    K: fmt::Display + 'a,
    V: ToFieldValue + 'a,
    I: Iterator<Item = (&'a K, &'a V)>,
{
    let mut pairs: Vec<(String, FieldValue)> = entries
        .map(|(key, value)| (key.to_string(), value.to_field_value()))
        .collect();
    pairs.sort_by(|left, right| left.0.cmp(&right.0));
    FieldValue::Mapping(pairs)
}

impl ToFieldValue for Value {
    fn to_field_value(&self) -> FieldValue {
        match self {
            Self::Null => FieldValue::Primitive(Primitive::Null),
            Self::Bool(flag) => FieldValue::Primitive(Primitive::Bool(*flag)),
            Self::Number(number) => FieldValue::Primitive(
                number
                    .as_i64()
                    .map(Primitive::Int)
                    .or_else(|| number.as_u64().map(Primitive::UInt))
                    .or_else(|| number.as_f64().map(Primitive::Float))
                    .unwrap_or(Primitive::Null),
            ),
            Self::String(text) => FieldValue::Primitive(Primitive::Str(text.clone())),
            Self::Array(items) => items.as_slice().to_field_value(),
            Self::Object(map) => mapping(map.iter()),
        }
    }
}
