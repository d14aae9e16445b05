//! Example Hadoop cluster configurations built with `configurator`.
//!
//! Two clusters share a base template. `NewHiveCluster` layers a Hive engine
//! and its own EC2 credentials on top; `SparkCluster` drops the engine
//! altogether. Both are materialized as one set so their subnets can be
//! checked against each other before anything is written.

pub mod hooks;
pub mod schemas;
pub mod templates;

use camino::Utf8Path;
use configurator::{Config, ConfigSet, FileWriter, template};
use serde_json::json;

use crate::hooks::{distinct_subnets, merge_object};
use crate::schemas::ClusterConfig;

/// Name of the Hive cluster and its output sub-directory.
pub const HIVE_CLUSTER: &str = "NewHiveCluster";

/// Name of the Spark cluster and its output sub-directory.
pub const SPARK_CLUSTER: &str = "SparkCluster";

/// Destination of `cluster`'s configuration under `output_dir`.
#[must_use]
pub fn config_path(output_dir: &Utf8Path, cluster: &str) -> camino::Utf8PathBuf {
    output_dir.join(cluster).join("config.json")
}

fn cluster(output_dir: &Utf8Path, name: &str) -> Config<ClusterConfig> {
    Config::new(FileWriter::new(config_path(output_dir, name)).into_writer()).with_name(name)
}

/// Build the set of example clusters writing under `output_dir`.
#[must_use]
pub fn cluster_set(output_dir: &Utf8Path) -> ConfigSet {
    let hive = cluster(output_dir, HIVE_CLUSTER).with_templates([
        templates::base_cluster(),
        templates::hive_engine(),
        templates::ec2_credentials(
            "SOMEUNIQID",
            "arn:aws:iam::0987654321:role/my-fancy-role",
            "subnet-01234567,subnet-89abcdef,subnet-fedcba98,subnet-7654321",
            "vpc-01234567",
        ),
        template! {
            datadog_settings: merge_object(json!({ "datadog_api_token": "ref://datadog-api-token" })),
        },
    ]);
    let spark = cluster(output_dir, SPARK_CLUSTER).with_templates([
        templates::base_cluster(),
        templates::ec2_credentials(
            "ANOTHERUNIQID",
            "arn:aws:iam::1234567890:role/my-fancy-role",
            "subnet-76543210",
            "vpc-89abcdef",
        ),
        template! { engine_config: Option::<String>::None },
    ]);
    ConfigSet::new()
        .with_config(hive)
        .with_config(spark)
        .with_typed_validator(distinct_subnets)
}
