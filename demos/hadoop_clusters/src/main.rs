//! Writes the example Hadoop cluster configurations to disk.

use camino::Utf8PathBuf;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Generate example Hadoop cluster configurations.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Directory receiving one sub-directory per cluster.
    #[arg(long, default_value = "generated_configs")]
    output_dir: Utf8PathBuf,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    hadoop_clusters::cluster_set(&cli.output_dir).materialize()?;
    tracing::info!(output_dir = %cli.output_dir, "cluster configurations generated");
    Ok(())
}
