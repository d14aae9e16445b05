//! Typed shape of a cluster configuration.

use std::collections::BTreeMap;

use configurator::Schema;
use serde::Deserialize;

/// Hive engine settings.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Schema)]
pub struct HiveSettings {
    /// Hive release to install.
    pub hive_version: String,
    /// Whether HiveServer2 is enabled.
    pub is_hs2: bool,
    /// Whether the metadata cache is enabled.
    pub is_metadata_cache_enabled: bool,
    /// Reference to a properties file with Hive overrides.
    pub overrides: String,
}

/// Processing engine of a cluster.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Schema)]
pub struct EngineConfig {
    /// Hive settings for the engine.
    #[configurator(nested)]
    pub hive_settings: HiveSettings,
    /// Engine flavour, for instance `hadoop2`.
    pub r#type: String,
}

/// EC2 placement and credentials.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Schema)]
pub struct Ec2Settings {
    /// Preferred availability zone, or `Any`.
    pub aws_preferred_availability_zone: String,
    /// AWS region.
    pub aws_region: String,
    /// SSH port of the bastion node.
    pub bastion_node_port: Option<String>,
    /// Public DNS name of the bastion node.
    pub bastion_node_public_dns: Option<String>,
    /// User on the bastion node.
    pub bastion_node_user: Option<String>,
    /// External ID used when assuming the compute role.
    pub compute_external_id: String,
    /// ARN of the compute role.
    pub compute_role_arn: String,
    /// Whether the compute credentials were validated.
    pub compute_validated: bool,
    /// EC2 instance tenancy.
    pub instance_tenancy: Option<String>,
    /// Elastic IP of the master node.
    pub master_elastic_ip: Option<String>,
    /// Instance profile of the cluster role.
    pub role_instance_profile: Option<String>,
    /// Comma-separated subnet IDs.
    pub subnet_id: String,
    /// Whether account-level compute credentials are used.
    pub use_account_compute_creds: bool,
    /// VPC ID.
    pub vpc_id: String,
}

impl Ec2Settings {
    /// Iterate over the individual subnet IDs.
    pub fn subnets(&self) -> impl Iterator<Item = &str> {
        self.subnet_id
            .split(',')
            .map(str::trim)
            .filter(|subnet| !subnet.is_empty())
    }
}

/// Complete cluster configuration, written as JSON.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Schema)]
#[configurator(format = "json")]
pub struct ClusterConfig {
    /// Datadog integration tokens.
    pub datadog_settings: BTreeMap<String, String>,
    /// Whether the cluster may not be terminated automatically.
    pub disallow_cluster_termination: bool,
    /// EC2 settings.
    #[configurator(nested)]
    pub ec2_settings: Ec2Settings,
    /// Whether Ganglia monitoring is enabled.
    pub enable_ganglia_monitoring: bool,
    /// Processing engine; absent for clusters without one.
    #[configurator(nested)]
    pub engine_config: Option<EngineConfig>,
}
