//! Command-line surfaces of the two binaries.

use crate::fetch::{DOWNLOADER_DIR, FetchConfig};
use crate::sweep::{EVAL_SCRIPT, SweepConfig};
use crate::types::{
    DEFAULT_BLOCK_1, DEFAULT_BLOCK_2, DEFAULT_BLOCKS, DEFAULT_FIBONACCI_INPUTS, DEFAULT_PROGRAMS,
    DEFAULT_PROVERS, DEFAULT_SHARD_SIZES, Program, Prover,
};
use clap::Parser;
use clap::builder::NonEmptyStringValueParser;
use log::warn;
use std::path::PathBuf;

/// Download Ethereum blocks using block-downloader
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct DownloadArgs {
    /// Ethereum RPC URL
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub rpc_url: String,

    /// List of block numbers to download
    #[arg(
        long,
        num_args = 1..,
        default_values_t = DEFAULT_BLOCKS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub blocks: Vec<u64>,

    /// Directory of the block-downloader crate
    #[arg(long, env = "BLOCK_DOWNLOADER_DIR", default_value = DOWNLOADER_DIR)]
    pub downloader_dir: PathBuf,
}

impl DownloadArgs {
    pub fn into_config(self) -> FetchConfig {
        FetchConfig {
            rpc_url: self.rpc_url,
            blocks: self.blocks,
            downloader_dir: self.downloader_dir,
        }
    }
}

/// Run benchmarks with various combinations of options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct SweepArgs {
    /// Filename for the benchmark
    #[arg(long, default_value = "benchmark", value_parser = NonEmptyStringValueParser::new())]
    pub filename: String,

    /// Number of trials to run
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub trials: u32,

    /// List of programs to benchmark
    #[arg(long, num_args = 1.., default_values_t = DEFAULT_PROGRAMS)]
    pub programs: Vec<Program>,

    /// List of provers to use
    #[arg(long, num_args = 1.., default_values_t = DEFAULT_PROVERS)]
    pub provers: Vec<Prover>,

    /// List of shard sizes to use; only the first is run for every prover
    #[arg(
        long,
        num_args = 1..,
        default_values_t = DEFAULT_SHARD_SIZES,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub shard_sizes: Vec<u32>,

    /// Block number for reth1
    #[arg(long = "block-1", default_value = DEFAULT_BLOCK_1)]
    pub block_1: String,

    /// Block number for reth2
    #[arg(long = "block-2", default_value = DEFAULT_BLOCK_2)]
    pub block_2: String,

    /// Input for fibonacci (currently ignored)
    #[arg(long, num_args = 1.., default_values = DEFAULT_FIBONACCI_INPUTS)]
    pub fibonacci: Vec<String>,

    /// Optional RPC URL for downloading blocks
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub rpc_url: Option<String>,

    /// Benchmark driver script
    #[arg(long, env = "EVAL_SCRIPT", default_value = EVAL_SCRIPT)]
    pub driver: PathBuf,

    /// Print the sweep plan as JSON and exit without running anything
    #[arg(long)]
    pub print_plan: bool,
}

impl SweepArgs {
    pub fn into_config(self) -> SweepConfig {
        if self.fibonacci != DEFAULT_FIBONACCI_INPUTS {
            warn!("--fibonacci has no effect on the sweep and is ignored");
        }
        SweepConfig {
            filename: self.filename,
            trials: self.trials,
            programs: self.programs,
            provers: self.provers,
            shard_sizes: self.shard_sizes,
            block_1: self.block_1,
            block_2: self.block_2,
            fibonacci_inputs: self.fibonacci,
            rpc_url: self.rpc_url,
            driver: self.driver,
        }
    }
}
