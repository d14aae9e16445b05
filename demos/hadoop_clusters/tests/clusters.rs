//! End-to-end tests for the example cluster set.
#![expect(
    clippy::expect_used,
    reason = "fixture setup failures should abort the test"
)]

use anyhow::{Result, ensure};
use configurator::{ConfiguratorError, Config, ConfigSet, FileWriter, template};
use hadoop_clusters::schemas::ClusterConfig;
use hadoop_clusters::{HIVE_CLUSTER, SPARK_CLUSTER, cluster_set, config_path, hooks, templates};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use test_helpers::fs::TempOutput;

#[fixture]
fn out() -> TempOutput {
    TempOutput::new().expect("create temporary output directory")
}

fn written_json(out: &TempOutput, cluster: &str) -> Result<Value> {
    let text = std::fs::read_to_string(config_path(out.path(), cluster))?;
    ensure!(text.ends_with("}\n"), "output should end with a newline: {text:?}");
    Ok(serde_json::from_str(&text)?)
}

fn field<'a>(value: &'a Value, pointer: &str) -> &'a Value {
    value.pointer(pointer).unwrap_or(&Value::Null)
}

#[rstest]
fn materialize_writes_both_clusters(out: TempOutput) -> Result<()> {
    cluster_set(out.path()).materialize()?;

    let hive = written_json(&out, HIVE_CLUSTER)?;
    ensure!(
        *field(&hive, "/datadog_settings")
            == json!({
                "datadog_api_token": "ref://datadog-api-token",
                "datadog_app_token": "",
            }),
        "datadog overlay not applied: {hive}"
    );
    ensure!(
        *field(&hive, "/engine_config/hive_settings/hive_version") == json!("2.1.1"),
        "engine config missing: {hive}"
    );
    ensure!(*field(&hive, "/engine_config/type") == json!("hadoop2"), "engine type missing");
    ensure!(
        *field(&hive, "/ec2_settings/compute_external_id") == json!("SOMEUNIQID"),
        "credentials missing: {hive}"
    );

    let spark = written_json(&out, SPARK_CLUSTER)?;
    ensure!(spark.get("engine_config") == Some(&Value::Null), "spark has no engine: {spark}");
    ensure!(
        field(&spark, "/ec2_settings/bastion_node_port").is_null(),
        "unset optional fields render as null"
    );
    ensure!(
        *field(&spark, "/datadog_settings/datadog_api_token") == json!(""),
        "spark keeps the base datadog settings"
    );
    Ok(())
}

#[rstest]
fn output_is_sorted_and_indented(out: TempOutput) -> Result<()> {
    cluster_set(out.path()).materialize()?;
    let text = std::fs::read_to_string(config_path(out.path(), SPARK_CLUSTER))?;
    let expected_head = "{\n    \"datadog_settings\": {\n        \"datadog_api_token\": \"\",";
    ensure!(text.starts_with(expected_head), "unexpected layout: {text}");
    Ok(())
}

#[rstest]
fn shared_subnet_is_rejected_before_writing(out: TempOutput) -> Result<()> {
    let config = |name: &str, subnet: &str| {
        Config::new(FileWriter::new(config_path(out.path(), name)).into_writer::<ClusterConfig>())
            .with_name(name)
            .with_templates([
                templates::base_cluster(),
                templates::ec2_credentials("ID", "arn", subnet, "vpc-1"),
                template! { engine_config: Option::<String>::None },
            ])
    };
    let mut set = ConfigSet::new()
        .with_config(config("a", "subnet-1,subnet-2"))
        .with_config(config("b", "subnet-3, subnet-2"))
        .with_typed_validator(hooks::distinct_subnets);

    let Err(err) = set.materialize() else {
        anyhow::bail!("shared subnet should fail validation");
    };
    ensure!(
        matches!(&err, ConfiguratorError::Validation { key, .. } if key == "subnet_id"),
        "unexpected error: {err:?}"
    );
    ensure!(!out.exists("a/config.json"), "nothing should be written");
    ensure!(!out.exists("b/config.json"), "nothing should be written");
    Ok(())
}

#[rstest]
#[case::objects_overlay(json!({"a": 1, "b": 2}), json!({"b": 3, "c": 4}), json!({"a": 1, "b": 3, "c": 4}))]
#[case::scalar_replaced(json!("plain"), json!({"c": 4}), json!({"c": 4}))]
fn merge_object_overlays_keys(
    #[case] base: Value,
    #[case] overlay: Value,
    #[case] expected: Value,
) -> Result<()> {
    let mut merged = template! { settings: base };
    merged.merge_from(&template! { settings: hooks::merge_object(overlay) });
    ensure!(
        merged.get("settings") == Some(&configurator::TemplateValue::Value(expected)),
        "unexpected merge result: {merged:?}"
    );
    Ok(())
}
