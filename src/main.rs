use std::path::PathBuf;

use clap::Parser;

use check_outdated::config::{Inputs, RunConfig};
use check_outdated::logging::{self, LogFormat};
use check_outdated::release::GitHubReleases;

#[derive(Parser)]
#[command(name = "check-outdated")]
#[command(
    version,
    about = "Check whether a vendored package is behind its upstream GitHub release"
)]
struct Cli {
    #[command(flatten)]
    inputs: Inputs,

    /// Log output format
    #[arg(long, env = "CHECK_OUTDATED_LOG_FORMAT", value_enum, default_value_t)]
    log_format: LogFormat,

    /// Write logs to this file instead of stderr
    #[arg(long, env = "CHECK_OUTDATED_LOG_FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init(cli.log_format, cli.log_file.as_deref())?;

    let config = RunConfig::from_inputs(cli.inputs)?;
    let source = GitHubReleases::from_config(&config)?;

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(check_outdated::check::run(&config, &source))?;

    Ok(())
}
