use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt};

use time_recorder::shell::cli::{self, Cli};
use time_recorder::shell::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env()?;

    // Only the generic message reaches the terminal, the cause is in the logs.
    if let Err(err) = cli::run(cli, config).await {
        eprintln!("{err}");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
