//! Unit tests for error construction and rendering.

use rstest::rstest;

use super::ConfiguratorError;

#[derive(Debug, thiserror::Error)]
#[error("quota exceeded")]
struct QuotaExceeded;

#[rstest]
fn custom_keeps_caller_error() {
    let err = ConfiguratorError::custom(QuotaExceeded);
    assert_eq!(err.to_string(), "quota exceeded");
    assert!(err.downcast_custom::<QuotaExceeded>().is_some());
    assert!(err.downcast_custom::<std::io::Error>().is_none());
}

#[rstest]
fn validation_renders_key_and_message() {
    let err = ConfiguratorError::validation("vpc_id", "must not be empty");
    assert_eq!(
        err.to_string(),
        "Validation failed for 'vpc_id': must not be empty"
    );
    assert!(err.downcast_custom::<QuotaExceeded>().is_none());
}

#[rstest]
#[case("write")]
#[case("validate")]
fn not_resolved_names_operation(#[case] operation: &'static str) {
    let err = ConfiguratorError::not_resolved(operation);
    assert!(err.to_string().ends_with(&format!("before {operation}()")));
}

#[rstest]
fn schema_mismatch_lists_differences() {
    let err = ConfiguratorError::SchemaMismatch {
        schema: "Simple",
        missing: vec![String::from("b")],
        unexpected: vec![String::from("c")],
    };
    let rendered = err.to_string();
    assert!(rendered.contains("`Simple`"));
    assert!(rendered.contains(r#"missing ["b"]"#));
    assert!(rendered.contains(r#"unexpected ["c"]"#));
}
