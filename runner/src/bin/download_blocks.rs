use anyhow::Result;
use clap::Parser;
use log::{info, warn};
use zkvm_bench_runner::cli::DownloadArgs;
use zkvm_bench_runner::{ProcessRunner, fetch, logging};

/// Fetch the blocks replayed by the reth benchmarks. The exit code stays zero
/// when individual blocks fail; the summary line reports it instead.
fn main() -> Result<()> {
    logging::init();
    let config = DownloadArgs::parse().into_config();

    if fetch::download_blocks(&mut ProcessRunner, &config)? {
        info!("All blocks downloaded successfully!");
    } else {
        warn!("Some blocks failed to download. Please check the errors above.");
    }
    Ok(())
}
