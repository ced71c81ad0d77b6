//! Enumeration of benchmark configurations and the loop driving `eval.sh`.

use crate::exec::{CommandRunner, Invocation};
use crate::types::{
    BlockSlot, DEFAULT_BLOCK_1, DEFAULT_BLOCK_2, DEFAULT_FIBONACCI_INPUTS, DEFAULT_PROGRAMS,
    DEFAULT_PROVERS, DEFAULT_SHARD_SIZES, Program, Prover,
};
use anyhow::{Result, bail};
use itertools::iproduct;
use log::{debug, info, warn};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Benchmark driver script, relative to the working directory.
pub const EVAL_SCRIPT: &str = "eval.sh";

/// Interpreter the driver script is handed to.
pub const SHELL: &str = "bash";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SweepConfig {
    /// Label the driver uses to name its results file.
    pub filename: String,
    pub trials: u32,
    pub programs: Vec<Program>,
    pub provers: Vec<Prover>,
    /// The first entry is the baseline; see [`plan`].
    pub shard_sizes: Vec<u32>,
    pub block_1: String,
    pub block_2: String,
    /// Accepted on the command line but not consulted anywhere.
    pub fibonacci_inputs: Vec<String>,
    /// Forwarded to reth programs so the driver can fetch missing blocks.
    pub rpc_url: Option<String>,
    pub driver: PathBuf,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            filename: "benchmark".to_string(),
            trials: 1,
            programs: DEFAULT_PROGRAMS.to_vec(),
            provers: DEFAULT_PROVERS.to_vec(),
            shard_sizes: DEFAULT_SHARD_SIZES.to_vec(),
            block_1: DEFAULT_BLOCK_1.to_string(),
            block_2: DEFAULT_BLOCK_2.to_string(),
            fibonacci_inputs: DEFAULT_FIBONACCI_INPUTS.map(String::from).to_vec(),
            rpc_url: None,
            driver: PathBuf::from(EVAL_SCRIPT),
        }
    }
}

impl SweepConfig {
    pub fn validate(&self) -> Result<()> {
        if self.filename.is_empty() {
            bail!("filename must not be empty");
        }
        if self.trials == 0 {
            bail!("trials must be at least 1");
        }
        if self.programs.is_empty() {
            bail!("at least one program is required");
        }
        if self.provers.is_empty() {
            bail!("at least one prover is required");
        }
        if self.shard_sizes.is_empty() {
            bail!("at least one shard size is required");
        }
        if self.shard_sizes.contains(&0) {
            bail!("shard sizes must be positive");
        }
        Ok(())
    }

    fn block_for(&self, slot: BlockSlot) -> &str {
        match slot {
            BlockSlot::First => &self.block_1,
            BlockSlot::Second => &self.block_2,
        }
    }
}

/// One (program, prover, shard size) combination.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BenchConfig {
    pub program: Program,
    pub prover: Prover,
    pub shard_size: u32,
}

impl fmt::Display for BenchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.program, self.prover, self.shard_size)
    }
}

/// The configurations a sweep executes, in execution order.
///
/// Programs vary slowest and shard sizes fastest. Combinations whose shard
/// size differs from the first listed one are dropped: only sp1 honours the
/// shard size, and for the other provers they would just repeat the baseline.
pub fn plan(config: &SweepConfig) -> Vec<BenchConfig> {
    let Some(&baseline) = config.shard_sizes.first() else {
        return Vec::new();
    };

    iproduct!(
        config.programs.iter().copied(),
        config.provers.iter().copied(),
        config.shard_sizes.iter().copied()
    )
    .filter_map(|(program, prover, shard_size)| {
        let bench = BenchConfig {
            program,
            prover,
            shard_size,
        };
        if shard_size != baseline {
            debug!("Skipping: {bench}");
            return None;
        }
        Some(bench)
    })
    .collect()
}

/// `bash eval.sh <program> <prover> <shard size> <filename> [<block>] [<rpc url>]`
pub fn driver_invocation(config: &SweepConfig, bench: &BenchConfig) -> Invocation {
    let mut invocation = Invocation::new(SHELL)
        .arg(config.driver.as_os_str())
        .arg(bench.program.driver_name())
        .arg(bench.prover.name())
        .arg(bench.shard_size.to_string())
        .arg(config.filename.as_str());

    if let Some(slot) = bench.program.block_slot() {
        invocation = invocation.arg(config.block_for(slot));
    }
    if let Some(rpc_url) = &config.rpc_url
        && bench.program.is_reth()
    {
        invocation = invocation.arg(rpc_url.as_str());
    }
    invocation
}

/// Totals of a finished sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub invocations: usize,
    pub failures: usize,
}

/// Runs every configuration of [`plan`] `trials` times, one process at a time.
///
/// A driver exiting non-zero is logged and counted but does not stop the sweep.
/// Failing to start the driver at all is returned as an error.
pub fn run_sweep<R: CommandRunner + ?Sized>(
    runner: &mut R,
    config: &SweepConfig,
) -> Result<SweepReport> {
    config.validate()?;

    let mut report = SweepReport::default();
    for bench in plan(config) {
        info!("Running: {bench}");
        let invocation = driver_invocation(config, &bench);
        for trial in 1..=config.trials {
            debug!("Trial {trial}/{}: {invocation}", config.trials);
            let outcome = runner.run(&invocation)?;
            report.invocations += 1;
            if !outcome.success() {
                report.failures += 1;
                warn!("{bench} trial {trial} failed with {outcome}");
            }
        }
    }
    Ok(report)
}
