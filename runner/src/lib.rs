//! Drivers for zkVM benchmark runs: fetching the blocks the reth programs
//! replay, and sweeping `eval.sh` over programs, provers and shard sizes.

pub mod cli;
pub mod exec;
pub mod fetch;
pub mod logging;
pub mod sweep;
pub mod types;

pub use exec::{CommandRunner, Invocation, Outcome, ProcessRunner};
pub use fetch::FetchConfig;
pub use sweep::{BenchConfig, SweepConfig, SweepReport};
pub use types::{Program, Prover};
