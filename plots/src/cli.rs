use std::path::PathBuf;
use clap::Parser;

/// Plot write and read latency of shared-memory access implementations.
#[derive(Parser, Debug)]
#[command(name = "plot_results", version, about)]
pub struct Cli {
    /// JSON file with benchmark results.
    pub data: PathBuf,

    /// Include ZeroMQ results. Disabled by default.
    #[arg(long)]
    pub zmq: bool,
}
