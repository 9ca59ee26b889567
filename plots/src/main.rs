mod chart;
mod cli;
mod config;
mod implementation;
mod lines;
mod preview;

use anyhow::{Context, Result};
use clap::Parser;
use shm_results::ResultCollection;
use str_macro::str;
use crate::cli::Cli;
use crate::config::PlotConfig;
use crate::implementation::datasets;
use crate::lines::{read_lines, write_lines};

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    run(&PlotConfig::from(&cli))
}

fn run(config: &PlotConfig) -> Result<()> {
    let results = ResultCollection::load(&config.data)
        .with_context(|| format!("loading results from {}", config.data.display()))?;
    tracing::info!(records = results.len(), include_zmq = config.include_zmq, "results loaded");

    let all = datasets(&results, config)?;

    let write = chart::chart(str!("Write performance"), &write_lines(&all));
    chart::save_png(&write, &config.write_path, config)?;

    let read = chart::chart(str!("Read performance"), &read_lines(&all));
    chart::save_png(&read, &config.read_path, config)?;

    preview::show(&[config.write_path.as_path(), config.read_path.as_path()]);
    Ok(())
}
