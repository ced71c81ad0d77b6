use clap::Parser;
use zkvm_bench_runner::cli::{DownloadArgs, SweepArgs};
use zkvm_bench_runner::types::{DEFAULT_BLOCKS, DEFAULT_PROGRAMS};
use zkvm_bench_runner::{Program, Prover, SweepConfig, sweep};

#[test]
fn download_requires_rpc_url() {
    assert!(DownloadArgs::try_parse_from(["download_blocks"]).is_err());
    assert!(DownloadArgs::try_parse_from(["download_blocks", "--rpc-url", ""]).is_err());
}

#[test]
fn download_defaults_to_reference_blocks() {
    let config = DownloadArgs::try_parse_from(["download_blocks", "--rpc-url", "http://node:8545"])
        .unwrap()
        .into_config();
    assert_eq!(config.rpc_url, "http://node:8545");
    assert_eq!(config.blocks, DEFAULT_BLOCKS);
}

#[test]
fn download_accepts_block_list() {
    let config = DownloadArgs::try_parse_from([
        "download_blocks",
        "--rpc-url",
        "http://node:8545",
        "--blocks",
        "1",
        "2",
        "3",
    ])
    .unwrap()
    .into_config();
    assert_eq!(config.blocks, [1, 2, 3]);
}

#[test]
fn download_rejects_bad_blocks() {
    for bad in ["0", "-5", "latest"] {
        let parsed = DownloadArgs::try_parse_from([
            "download_blocks",
            "--rpc-url",
            "http://node:8545",
            "--blocks",
            bad,
        ]);
        assert!(parsed.is_err(), "block {bad:?} should be rejected");
    }
}

#[test]
fn sweep_defaults() {
    let config = SweepArgs::try_parse_from(["sweep"]).unwrap().into_config();
    let expected = SweepConfig {
        driver: config.driver.clone(),
        ..SweepConfig::default()
    };
    assert_eq!(config, expected);
    assert_eq!(config.programs, DEFAULT_PROGRAMS);
    assert_eq!(config.provers, [Prover::Sp1]);
    assert_eq!(config.shard_sizes, [21]);
    assert_eq!(config.rpc_url, None);
}

#[test]
fn sweep_parses_lists_and_rpc_url() {
    let config = SweepArgs::try_parse_from([
        "sweep",
        "--filename",
        "nightly",
        "--trials",
        "2",
        "--programs",
        "reth1",
        "loop",
        "--provers",
        "risc0",
        "sp1",
        "--shard-sizes",
        "20",
        "22",
        "--block-1",
        "123",
        "--rpc-url",
        "http://node:8545",
    ])
    .unwrap()
    .into_config();

    assert_eq!(config.filename, "nightly");
    assert_eq!(config.trials, 2);
    assert_eq!(config.programs, [Program::Reth1, Program::Loop]);
    assert_eq!(config.provers, [Prover::Risc0, Prover::Sp1]);
    assert_eq!(config.shard_sizes, [20, 22]);
    assert_eq!(config.block_1, "123");
    assert_eq!(config.rpc_url.as_deref(), Some("http://node:8545"));

    // shard size 22 never runs; 2 programs x 2 provers remain
    assert_eq!(sweep::plan(&config).len(), 4);
}

#[test]
fn sweep_rejects_invalid_values() {
    let bad: [&[&str]; 5] = [
        &["sweep", "--trials", "0"],
        &["sweep", "--shard-sizes", "0"],
        &["sweep", "--programs", "reth3"],
        &["sweep", "--provers", "plonky2"],
        &["sweep", "--programs"],
    ];
    for args in bad {
        assert!(SweepArgs::try_parse_from(args).is_err(), "{args:?}");
    }
}

#[test]
fn sweep_accepts_fibonacci_without_using_it() {
    let config = SweepArgs::try_parse_from(["sweep", "--fibonacci", "seven", "--programs", "fibonacci"])
        .unwrap()
        .into_config();
    assert_eq!(config.fibonacci_inputs, ["seven"]);

    let bench = sweep::plan(&config)[0];
    let invocation = sweep::driver_invocation(&config, &bench);
    assert!(!invocation.args.iter().any(|a| a == "seven"));
}
