//! Horizon CLI Application
//!
//! Command-line interface for the horizon timeline.

mod args;
mod cli;
mod renderer;

use std::sync::Arc;

use anyhow::{Context, Result};
use args::{Args, Commands, ShowArgs};
use clap::Parser;
use cli::Cli;
use horizon_core::{Clock, ConfigLoader, FixedClock, SystemClock, TaskStoreBuilder};
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { config, no_color, today, command } = Args::parse();

    let config = ConfigLoader::new()
        .with_path(config)
        .load()
        .context("Failed to load configuration")?;

    let clock: Arc<dyn Clock> = match today {
        Some(date) => Arc::new(FixedClock(date)),
        None => Arc::new(SystemClock),
    };
    let store = TaskStoreBuilder::new()
        .with_validation(config.validation.clone())
        .with_shared_clock(clock)
        .build();

    let renderer = TerminalRenderer::new(!no_color);

    info!("Horizon started");

    let cli = Cli::new(store, config, renderer);
    match command {
        Some(Show(args)) => cli.show(args).await,
        Some(Check(args)) => cli.check(args).await,
        None => cli.show(ShowArgs::default()).await,
    }
}
