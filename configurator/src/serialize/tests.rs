//! Unit tests for the dict, JSON, and properties serializers.

use std::collections::{BTreeMap, BTreeSet};

use rstest::rstest;
use serde::Deserialize;
use serde_json::{Value, json};

use super::{DictValue, Serialized, encode, serialize_as, to_mapping, to_properties};
use crate::schema::{Format, Primitive, Record, Schema};

#[derive(Debug, Deserialize, crate::Schema)]
struct Pair {
    a: Value,
    b: Value,
}

#[derive(Debug, Deserialize, crate::Schema)]
#[configurator(format = "properties")]
struct PropsPair {
    a: Value,
    b: Value,
}

#[derive(Debug, Deserialize, crate::Schema)]
#[configurator(format = "json")]
struct JsonPair {
    a: Value,
    b: Value,
}

#[derive(Debug, Deserialize, crate::Schema)]
struct DictOfDict {
    simple: i64,
    #[configurator(nested)]
    nested: Pair,
}

#[derive(Debug, Deserialize, crate::Schema)]
struct DictOfProps {
    simple: i64,
    #[configurator(nested)]
    nested: PropsPair,
}

#[derive(Debug, Deserialize, crate::Schema)]
struct Listed {
    a: i64,
    b: Vec<Pair>,
}

#[derive(Debug, Deserialize, crate::Schema)]
struct Keyed {
    a: i64,
    b: BTreeMap<String, Pair>,
}

#[derive(Debug, Deserialize, crate::Schema)]
struct Numbers {
    a: i64,
    b: BTreeSet<i64>,
}

#[derive(Debug, Deserialize, PartialEq, Eq, PartialOrd, Ord, crate::Schema)]
struct DictKey {
    a: String,
    b: String,
}

#[derive(Debug, Deserialize, PartialEq, Eq, PartialOrd, Ord, crate::Schema)]
#[configurator(format = "properties")]
struct PropsKey {
    a: String,
    b: String,
}

#[derive(Debug, Deserialize, crate::Schema)]
struct SetOfDicts {
    a: i64,
    b: BTreeSet<DictKey>,
}

#[derive(Debug, Deserialize, crate::Schema)]
struct SetOfProps {
    a: i64,
    b: BTreeSet<PropsKey>,
}

#[derive(Debug, Deserialize, crate::Schema)]
#[configurator(format = "properties")]
struct PropsOfSchemas {
    #[configurator(nested)]
    a: PropsPair,
    #[configurator(nested)]
    b: Pair,
}

#[derive(Debug, Deserialize, crate::Schema)]
#[configurator(format = "json")]
struct JsonOfJson {
    a: f64,
    #[configurator(nested)]
    b: JsonPair,
}

#[derive(Debug, Deserialize, crate::Schema)]
#[configurator(format = "json")]
struct JsonOfDict {
    a: f64,
    #[configurator(nested)]
    b: Pair,
}

#[derive(Debug, Deserialize, crate::Schema)]
#[configurator(format = "json")]
struct Unordered {
    zeta: i64,
    alpha: Vec<String>,
    mid: Option<String>,
}

fn pair(a: Value, b: Value) -> Pair {
    Pair { a, b }
}

fn props(a: Value, b: Value) -> PropsPair {
    PropsPair { a, b }
}

#[rstest]
#[case::simple(pair(json!(1), json!("B")).record(), json!({"a": 1, "b": "B"}))]
#[case::dict_in_dict(
    DictOfDict { simple: 1, nested: pair(json!(2.0), json!("B")) }.record(),
    json!({"simple": 1, "nested": {"a": 2.0, "b": "B"}}),
)]
#[case::properties_in_dict(
    DictOfProps { simple: 1, nested: props(json!(2.0), json!("B")) }.record(),
    json!({"simple": 1, "nested": "a=2.0\nb=B"}),
)]
#[case::list_of_primitives(pair(json!(1), json!([2, 3])).record(), json!({"a": 1, "b": [2, 3]}))]
#[case::list_of_schemas(
    Listed { a: 1, b: vec![pair(json!(2.0), json!("B"))] }.record(),
    json!({"a": 1, "b": [{"a": 2.0, "b": "B"}]}),
)]
#[case::map_of_primitives(pair(json!(1), json!({"c": 3})).record(), json!({"a": 1, "b": {"c": 3}}))]
#[case::map_of_schemas(
    Keyed {
        a: 1,
        b: BTreeMap::from([(String::from("c"), pair(json!(2.0), json!("B")))]),
    }
    .record(),
    json!({"a": 1, "b": {"c": {"a": 2.0, "b": "B"}}}),
)]
fn dict_serializer_produces_mapping(#[case] record: Record, #[case] expected: Value) {
    let mapping = to_mapping(&record).expect("serializes");
    assert_eq!(serde_json::to_value(&mapping).expect("converts"), expected);
}

#[rstest]
fn set_of_primitives_stays_set() {
    let record = Numbers {
        a: 1,
        b: BTreeSet::from([3, 2]),
    }
    .record();
    let mapping = to_mapping(&record).expect("serializes");
    assert_eq!(
        mapping.get("b"),
        Some(&DictValue::Set(vec![Primitive::Int(2), Primitive::Int(3)]))
    );
}

#[rstest]
fn set_of_dict_schemas_degrades_to_sequence() {
    let record = SetOfDicts {
        a: 1,
        b: BTreeSet::from([DictKey {
            a: String::from("2.0"),
            b: String::from("B"),
        }]),
    }
    .record();
    let mapping = to_mapping(&record).expect("serializes");
    let Some(DictValue::Sequence(items)) = mapping.get("b") else {
        panic!("expected sequence, got {:?}", mapping.get("b"));
    };
    assert_eq!(items.len(), 1);
    assert!(matches!(items.first(), Some(DictValue::Mapping(_))));
}

#[rstest]
fn set_of_text_schemas_stays_set_of_strings() {
    let record = SetOfProps {
        a: 1,
        b: BTreeSet::from([PropsKey {
            a: String::from("2.0"),
            b: String::from("B"),
        }]),
    }
    .record();
    let mapping = to_mapping(&record).expect("serializes");
    assert_eq!(
        mapping.get("b"),
        Some(&DictValue::Set(vec![Primitive::Str(String::from(
            "a=2.0\nb=B"
        ))]))
    );
}

#[rstest]
#[case::simple(props(json!(1), json!("B")).record(), "a=1\nb=B")]
#[case::floats_and_booleans(props(json!(1.0), json!(false)).record(), "a=1.0\nb=false")]
#[case::null_is_empty(props(Value::Null, json!("x")).record(), "a=\nb=x")]
#[case::nested_schemas(
    PropsOfSchemas { a: props(json!(1), json!("B")), b: pair(json!(2), json!("C")) }.record(),
    "a=a=1\\\nb=B\nb={\"a\":2,\"b\":\"C\"}",
)]
#[case::backslash_and_unicode(
    props(json!("values\\with\\backslash"), json!("unicode\u{2122}")).record(),
    "a=values\\\\with\\\\backslash\nb=unicode\\u2122",
)]
#[case::multiline(
    props(json!("multiple\nlines"), json!("more\nlines")).record(),
    "a=multiple\\\nlines\nb=more\\\nlines",
)]
#[case::collections(props(json!([1, "x"]), json!({"k": true})).record(), "a=[1,\"x\"]\nb={\"k\":true}")]
#[case::float_exponents(props(json!(1e-5), json!(1e16)).record(), "a=1e-05\nb=1e+16")]
#[case::collection_floats(props(json!([2.5e-7]), json!(1e15)).record(), "a=[2.5e-07]\nb=1000000000000000.0")]
fn properties_serializer_renders_lines(#[case] record: Record, #[case] expected: &str) {
    assert_eq!(to_properties(&record).expect("serializes"), expected);
}

#[rstest]
#[case::simple(
    JsonPair { a: json!(1), b: json!("B") }.record(),
    "{\n    \"a\": 1,\n    \"b\": \"B\"\n}",
)]
#[case::json_in_json(
    JsonOfJson { a: 1.0, b: JsonPair { a: Value::Null, b: json!(true) } }.record(),
    "{\n    \"a\": 1.0,\n    \"b\": \"{\\n    \\\"a\\\": null,\\n    \\\"b\\\": true\\n}\"\n}",
)]
#[case::dict_in_json(
    JsonOfDict { a: 1.0, b: pair(Value::Null, json!(true)) }.record(),
    "{\n    \"a\": 1.0,\n    \"b\": {\n        \"a\": null,\n        \"b\": true\n    }\n}",
)]
#[case::sorted_keys(
    Unordered { zeta: 1, alpha: vec![String::from("x")], mid: None }.record(),
    "{\n    \"alpha\": [\n        \"x\"\n    ],\n    \"mid\": null,\n    \"zeta\": 1\n}",
)]
#[case::float_exponents(
    JsonPair { a: json!(1.5e-7), b: json!([1e16, 0.0001]) }.record(),
    "{\n    \"a\": 1.5e-07,\n    \"b\": [\n        1e+16,\n        0.0001\n    ]\n}",
)]
#[case::non_ascii_escaped(
    JsonPair { a: json!("caf\u{e9} \u{2603}"), b: json!({"\u{1f600}": "del\u{7f}"}) }.record(),
    "{\n    \"a\": \"caf\\u00e9 \\u2603\",\n    \"b\": {\n        \"\\ud83d\\ude00\": \"del\\u007f\"\n    }\n}",
)]
fn json_serializer_renders_canonical_text(#[case] record: Record, #[case] expected: &str) {
    let serialized = super::serialize(&record).expect("serializes");
    assert_eq!(serialized.as_text(), Some(expected));
}

#[rstest]
fn serialization_is_deterministic() {
    let first = Unordered {
        zeta: 1,
        alpha: vec![String::from("b"), String::from("a")],
        mid: Some(String::from("m")),
    };
    let again = first.serialized().expect("serializes");
    assert_eq!(first.serialized().expect("serializes"), again);
}

#[rstest]
fn schema_serialized_dispatches_on_bound_format() {
    let dict = pair(json!(1), json!(2)).serialized().expect("serializes");
    assert!(dict.as_mapping().is_some());
    let text = props(json!(1), json!(2)).serialized().expect("serializes");
    assert_eq!(text, Serialized::Text(String::from("a=1\nb=2")));
}

#[rstest]
fn serialize_as_overrides_top_level_format() {
    let record = pair(json!(1), json!("B")).record();
    let serialized = serialize_as(&record, Format::Properties).expect("serializes");
    assert_eq!(serialized.as_text(), Some("a=1\nb=B"));
}

#[rstest]
fn mapping_converts_to_indented_json_text() {
    let serialized = pair(json!(1), json!("B")).serialized().expect("serializes");
    assert_eq!(
        serialized.into_text().expect("renders"),
        "{\n    \"a\": 1,\n    \"b\": \"B\"\n}"
    );
}

#[rstest]
fn compact_json_keeps_non_ascii_for_properties_escaping() {
    let record = props(json!(["caf\u{e9}"]), json!(1)).record();
    assert_eq!(to_properties(&record).expect("serializes"), "a=[\"caf\\ue9\"]\nb=1");
}

#[rstest]
#[case::integral(1.0, "1.0")]
#[case::negative_zero(-0.0, "-0.0")]
#[case::small(1e-5, "1e-05")]
#[case::large(1e16, "1e+16")]
#[case::fractional_mantissa(1.5e17, "1.5e+17")]
#[case::three_digit_exponent(1e-100, "1e-100")]
#[case::infinite(f64::INFINITY, "inf")]
#[case::nan(f64::NAN, "nan")]
fn primitive_floats_render_like_repr(#[case] value: f64, #[case] expected: &str) {
    assert_eq!(Primitive::Float(value).to_string(), expected);
}

#[rstest]
#[case::plain("plain text", "plain text")]
#[case::tab_and_carriage_return("a\tb\rc", "a\tb\rc")]
#[case::non_ascii("caf\u{e9}", "caf\\ue9")]
#[case::astral("\u{1f600}", "\\u1f600")]
#[case::control("bell\u{7}", "bell\\u7")]
fn encode_escapes_non_printable_characters(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(encode(input), expected);
}
