//! Storefront CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use storefront_app::commands::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    storefront_app::init_tracing();

    let cli = Cli::parse();
    Ok(cli.run().await?)
}
