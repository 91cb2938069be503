mod cli;
mod commands;
mod output;

use anyhow::{Context, Result};
use cfa_observe::{LoggerConfig, logger_init};
use clap::Parser;
use time::UtcOffset;

use crate::cli::Cli;

fn main() -> Result<()> {
    // Must run while the process is single-threaded.
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    let cli = Cli::parse();

    let mut log_cfg = LoggerConfig::from_env()
        .context("invalid logging environment")?
        .with_verbosity(cli.verbose);
    if let Some(format) = cli.log_format {
        log_cfg.format = format;
    }
    logger_init(&log_cfg).context("failed to initialize logger")?;

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start runtime")?
        .block_on(commands::run(cli, offset))
}
