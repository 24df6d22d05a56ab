mod commands;
mod input;

use anyhow::Context;
use clap::Parser;
use common::config::AppConfig;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = commands::Cli::parse();
    let config = AppConfig::load().context("Failed to load config")?;

    // stdout carries data, so logs go to stderr.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.level));
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    cli.run(&config)
}
