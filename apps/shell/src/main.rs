#![allow(clippy::print_stdout)]

mod args;
mod handlers;

use crate::args::{Cli, Commands};
use crate::handlers::{check, days, order};
use anyhow::{Context, Result, anyhow};
use clap::Parser;
use podium::domain::config::LoggingConfig;
use podium::features::registry::Registries;
use podium::features::scheduling::Scheduling;
use podium::kernel::config::load_podium_config;
use podium_logger::{LevelFilter, Logger, parse_level};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_podium_config(cli.config.as_deref())
        .context("Critical: Configuration is malformed")?;

    let _log = init_logger(&config.logging, cli.verbose)?;

    let slices = podium::init(&config).map_err(|e| anyhow!("Feature initialization failed: {e}"))?;
    let scheduling =
        podium::slice::<Scheduling>(&slices).context("Scheduling feature is not enabled")?;
    let registries =
        podium::slice::<Registries>(&slices).context("Registry feature is not enabled")?;

    match cli.command {
        Commands::Check { snapshot, exclude_self, cross_role } => {
            check::run_check(scheduling, registries, &snapshot, exclude_self, cross_role)?;
        },
        Commands::Days { start, end } => days::run_days(scheduling, start, end)?,
        Commands::Order { sessions, plain } => order::run_order(scheduling, &sessions, plain)?,
    }

    Ok(())
}

fn init_logger(logging: &LoggingConfig, verbose: u8) -> Result<Logger> {
    let level = match verbose {
        0 => parse_level(&logging.level)?,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let mut builder = Logger::builder(env!("CARGO_PKG_NAME")).console(true).level(level);
    if let Some(filter) = &logging.filter {
        builder = builder.env_filter(filter.clone());
    }
    if let Some(directory) = &logging.directory {
        builder = builder.directory(directory.clone()).json(logging.json);
    }

    Ok(builder.init()?)
}
