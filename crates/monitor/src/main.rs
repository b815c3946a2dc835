//! Threshold Monitor - Main Entry Point

use clap::Parser;
use monitor::{init_logging, run, Cli};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level)?;

    info!("=== Threshold Monitor v{} ===", env!("CARGO_PKG_VERSION"));

    run(&cli)?;

    Ok(())
}
