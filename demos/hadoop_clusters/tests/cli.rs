//! Runs the `hadoop_clusters` binary end to end.

use anyhow::{Result, ensure};
use assert_cmd::Command;
use test_helpers::fs::TempOutput;

#[test]
fn binary_writes_configs_to_output_dir() -> Result<()> {
    let out = TempOutput::new()?;
    #[expect(
        deprecated,
        clippy::expect_used,
        reason = "cargo_bin is the standard assert_cmd API and test panics are acceptable"
    )]
    let mut cmd = Command::cargo_bin("hadoop_clusters").expect("binary should exist");
    cmd.arg("--output-dir").arg(out.path().as_str());
    cmd.assert().success();

    ensure!(out.exists("NewHiveCluster/config.json"), "hive config missing");
    ensure!(out.exists("SparkCluster/config.json"), "spark config missing");
    Ok(())
}
