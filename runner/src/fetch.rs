use crate::exec::{CommandRunner, Invocation};
use crate::types::DEFAULT_BLOCKS;
use anyhow::{Result, bail};
use log::{error, info};
use std::path::PathBuf;

/// Crate that performs the actual download, relative to the working directory.
pub const DOWNLOADER_DIR: &str = "block-downloader";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchConfig {
    pub rpc_url: String,
    pub blocks: Vec<u64>,
    pub downloader_dir: PathBuf,
}

impl FetchConfig {
    /// Config fetching [`DEFAULT_BLOCKS`] from `rpc_url`.
    pub fn new(rpc_url: impl Into<String>) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            blocks: DEFAULT_BLOCKS.to_vec(),
            downloader_dir: PathBuf::from(DOWNLOADER_DIR),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.rpc_url.trim().is_empty() {
            bail!("rpc url must not be empty");
        }
        if self.blocks.is_empty() {
            bail!("at least one block number is required");
        }
        if let Some(zero) = self.blocks.iter().position(|&b| b == 0) {
            bail!("block numbers must be positive (entry {zero} is 0)");
        }
        Ok(())
    }
}

/// `cargo run --release -- --rpc-url <url> <block>`, run inside the downloader crate.
pub fn downloader_invocation(config: &FetchConfig, block: u64) -> Invocation {
    Invocation::new("cargo")
        .args(["run", "--release", "--", "--rpc-url"])
        .arg(config.rpc_url.as_str())
        .arg(block.to_string())
        .current_dir(&config.downloader_dir)
}

/// Downloads a single block. Returns whether the downloader exited cleanly.
pub fn download_block<R: CommandRunner + ?Sized>(
    runner: &mut R,
    config: &FetchConfig,
    block: u64,
) -> Result<bool> {
    info!("Downloading block {block}...");
    let outcome = runner.run(&downloader_invocation(config, block))?;
    if outcome.success() {
        info!("Successfully downloaded block {block}");
    } else {
        error!("Error downloading block {block}: downloader finished with {outcome}");
    }
    Ok(outcome.success())
}

/// Downloads every configured block in order, carrying on past failed ones.
///
/// Returns `true` only if every block was downloaded.
pub fn download_blocks<R: CommandRunner + ?Sized>(
    runner: &mut R,
    config: &FetchConfig,
) -> Result<bool> {
    config.validate()?;

    let mut all_ok = true;
    for &block in &config.blocks {
        all_ok &= download_block(runner, config, block)?;
    }
    Ok(all_ok)
}
