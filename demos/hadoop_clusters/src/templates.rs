//! Reusable templates for the example clusters.

use configurator::{Template, template};
use serde_json::json;

/// Settings shared by every cluster.
///
/// The EC2 credentials are left out; see [`ec2_credentials`].
#[must_use]
pub fn base_cluster() -> Template {
    template! {
        datadog_settings: json!({ "datadog_api_token": "", "datadog_app_token": "" }),
        disallow_cluster_termination: true,
        ec2_settings: template! {
            aws_preferred_availability_zone: "Any",
            aws_region: "us-east-1",
            bastion_node_port: Option::<String>::None,
            bastion_node_public_dns: Option::<String>::None,
            bastion_node_user: Option::<String>::None,
            compute_validated: true,
            instance_tenancy: Option::<String>::None,
            master_elastic_ip: Option::<String>::None,
            role_instance_profile: Option::<String>::None,
            use_account_compute_creds: false,
        },
        enable_ganglia_monitoring: true,
    }
}

/// Hive 2 engine.
#[must_use]
pub fn hive_engine() -> Template {
    template! {
        engine_config: template! {
            hive_settings: template! {
                hive_version: "2.1.1",
                is_hs2: true,
                is_metadata_cache_enabled: false,
                overrides: "ref://hive-overrides.properties",
            },
            r#type: "hadoop2",
        },
    }
}

/// Cluster-specific EC2 credentials and network placement.
#[must_use]
pub fn ec2_credentials(
    external_id: &str,
    role_arn: &str,
    subnet_id: &str,
    vpc_id: &str,
) -> Template {
    template! {
        ec2_settings: template! {
            compute_external_id: external_id,
            compute_role_arn: role_arn,
            subnet_id: subnet_id,
            vpc_id: vpc_id,
        },
    }
}
