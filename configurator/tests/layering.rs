//! Layered templates resolved through the public API.
#![expect(
    clippy::expect_used,
    reason = "tests panic to surface configuration mistakes"
)]

use std::collections::BTreeMap;

use anyhow::{Result, ensure};
use configurator::{
    Config, ConfiguratorError, Schema, Serialized, Template, Transform, UNSET, template,
};
use rstest::{fixture, rstest};
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Debug, Deserialize, PartialEq, Schema)]
#[configurator(format = "properties")]
struct Metastore {
    uri: String,
    #[serde(default = "default_threads")]
    threads: u32,
}

const fn default_threads() -> u32 {
    4
}

#[derive(Debug, Deserialize, PartialEq, Schema)]
#[configurator(format = "json")]
struct Service {
    name: String,
    labels: BTreeMap<String, String>,
    #[configurator(nested)]
    metastore: Metastore,
    replicas: Option<u32>,
}

#[fixture]
fn base() -> Template {
    template! {
        name: "warehouse",
        labels: json!({ "team": "data" }),
        metastore: template! { uri: "thrift://db:9083", threads: 8 },
        replicas: Option::<u32>::None,
    }
}

fn resolve(templates: impl IntoIterator<Item = Template>) -> Result<Service, ConfiguratorError> {
    let mut config = Config::new(|_: &Service| Ok(())).with_templates(templates);
    config.resolve()?;
    Ok(config.into_output().expect("resolved output"))
}

#[rstest]
fn later_templates_override_nested_fields(base: Template) -> Result<()> {
    let service = resolve([base, template! { metastore: template! { threads: 16 } }])?;
    ensure!(service.metastore.uri == "thrift://db:9083", "uri should survive the overlay");
    ensure!(service.metastore.threads == 16, "threads should be overridden");
    Ok(())
}

#[rstest]
fn unset_falls_back_to_serde_default(base: Template) -> Result<()> {
    let service = resolve([base, template! { metastore: template! { threads: UNSET } }])?;
    ensure!(service.metastore.threads == default_threads(), "expected the default thread count");
    Ok(())
}

#[rstest]
fn transforms_see_the_merged_value(base: Template) -> Result<()> {
    let add_label = Transform::on_value(|current| {
        let mut updated = current.clone();
        if let Value::Object(map) = &mut updated {
            map.insert(String::from("tier"), json!("gold"));
        }
        updated
    });
    let service = resolve([base, template! { labels: add_label }])?;
    ensure!(service.labels.len() == 2, "unexpected labels: {:?}", service.labels);
    ensure!(service.labels.get("team").map(String::as_str) == Some("data"), "team label lost");
    Ok(())
}

#[rstest]
fn json_output_embeds_nested_properties_text(base: Template) -> Result<()> {
    let service = resolve([base, template! { replicas: 3 }])?;
    let Serialized::Text(text) = service.serialized()? else {
        anyhow::bail!("json schemas serialize to text");
    };
    let expected = concat!(
        "{\n",
        "    \"labels\": {\n",
        "        \"team\": \"data\"\n",
        "    },\n",
        "    \"metastore\": \"threads=8\\nuri=thrift://db:9083\",\n",
        "    \"name\": \"warehouse\",\n",
        "    \"replicas\": 3\n",
        "}",
    );
    ensure!(text == expected, "unexpected JSON:\n{text}");
    Ok(())
}

#[rstest]
#[case::missing_field(template! { name: "x" })]
#[case::extra_field(template! {
    name: "x",
    labels: json!({}),
    metastore: template! { uri: "u" },
    replicas: 1,
    owner: "me",
})]
fn mismatched_templates_are_rejected(#[case] template: Template) {
    let err = resolve([template]).expect_err("field sets differ");
    assert!(
        matches!(err, ConfiguratorError::SchemaMismatch { .. }),
        "unexpected error: {err:?}"
    );
}
