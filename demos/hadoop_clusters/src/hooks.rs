//! Transforms and validators used by the example clusters.

use std::collections::BTreeMap;

use configurator::{ConfiguratorError, ConfiguratorResult, Transform};
use serde_json::Value;

use crate::schemas::ClusterConfig;

/// Overlay the keys of `overlay` onto the current object value.
///
/// Keys already present are replaced and other keys are kept. When either
/// side is not an object, `overlay` replaces the current value.
#[must_use]
pub fn merge_object(overlay: Value) -> Transform {
    Transform::on_value(move |current| match (current, &overlay) {
        (Value::Object(existing), Value::Object(incoming)) => {
            let mut merged = existing.clone();
            merged.extend(incoming.iter().map(|(key, value)| (key.clone(), value.clone())));
            Value::Object(merged)
        }
        _ => overlay.clone(),
    })
}

/// Reject clusters that share a subnet.
///
/// # Errors
///
/// Returns [`ConfiguratorError::Validation`] keyed `subnet_id` naming the
/// first subnet claimed twice.
pub fn distinct_subnets(clusters: &[&ClusterConfig]) -> ConfiguratorResult<()> {
    let mut owners: BTreeMap<&str, &str> = BTreeMap::new();
    for cluster in clusters {
        let vpc = cluster.ec2_settings.vpc_id.as_str();
        for subnet in cluster.ec2_settings.subnets() {
            if let Some(previous) = owners.insert(subnet, vpc) {
                return Err(ConfiguratorError::validation(
                    "subnet_id",
                    format!("subnet {subnet} is used by clusters in {previous} and {vpc}"),
                ));
            }
        }
    }
    Ok(())
}
