use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// Blocks fetched by `download_blocks` when `--blocks` is not given.
pub const DEFAULT_BLOCKS: [u64; 2] = [17106222, 19409768];

/// Block replayed by [`Program::Reth1`] unless overridden.
pub const DEFAULT_BLOCK_1: &str = "17106222";

/// Block replayed by [`Program::Reth2`] unless overridden.
pub const DEFAULT_BLOCK_2: &str = "19409768";

pub const DEFAULT_PROGRAMS: [Program; 5] = [
    Program::Loop,
    Program::Fibonacci,
    Program::Tendermint,
    Program::Reth1,
    Program::Reth2,
];

pub const DEFAULT_PROVERS: [Prover; 1] = [Prover::Sp1];

/// Log2 of the shard size. Only sp1 actually varies it.
pub const DEFAULT_SHARD_SIZES: [u32; 1] = [21];

/// Kept as text: `--fibonacci` is never parsed any further.
pub const DEFAULT_FIBONACCI_INPUTS: [&str; 4] = ["100", "1000", "10000", "300000"];

/// A guest program the benchmark driver knows how to run.
#[derive(ValueEnum, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[value(rename_all = "lower")]
#[serde(rename_all = "lowercase")]
pub enum Program {
    Loop,
    Fibonacci,
    Tendermint,
    /// Replays the block given by `--block-1`.
    Reth1,
    /// Replays the block given by `--block-2`.
    Reth2,
}

impl Program {
    pub fn name(self) -> &'static str {
        match self {
            Program::Loop => "loop",
            Program::Fibonacci => "fibonacci",
            Program::Tendermint => "tendermint",
            Program::Reth1 => "reth1",
            Program::Reth2 => "reth2",
        }
    }

    /// Whether this program replays a historical block.
    pub fn is_reth(self) -> bool {
        matches!(self, Program::Reth1 | Program::Reth2)
    }

    /// Name the driver expects. Both reth variants run the same `reth` program
    /// and differ only in the block they are handed.
    pub fn driver_name(self) -> &'static str {
        if self.is_reth() { "reth" } else { self.name() }
    }

    /// Which of the two configured blocks this program replays, if any.
    pub fn block_slot(self) -> Option<BlockSlot> {
        match self {
            Program::Reth1 => Some(BlockSlot::First),
            Program::Reth2 => Some(BlockSlot::Second),
            _ => None,
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockSlot {
    First,
    Second,
}

/// Proving backend selected for a benchmark run.
#[derive(ValueEnum, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[value(rename_all = "lower")]
#[serde(rename_all = "lowercase")]
pub enum Prover {
    Sp1,
    Risc0,
    Lita,
    Jolt,
    Nexus,
}

impl Prover {
    pub fn name(self) -> &'static str {
        match self {
            Prover::Sp1 => "sp1",
            Prover::Risc0 => "risc0",
            Prover::Lita => "lita",
            Prover::Jolt => "jolt",
            Prover::Nexus => "nexus",
        }
    }
}

impl fmt::Display for Prover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
