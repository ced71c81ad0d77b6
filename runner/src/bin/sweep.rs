use anyhow::Result;
use clap::Parser;
use log::{info, warn};
use zkvm_bench_runner::cli::SweepArgs;
use zkvm_bench_runner::{ProcessRunner, logging, sweep};

fn main() -> Result<()> {
    logging::init();
    let args = SweepArgs::parse();
    let print_plan = args.print_plan;
    let config = args.into_config();

    if print_plan {
        config.validate()?;
        println!("{}", serde_json::to_string_pretty(&sweep::plan(&config))?);
        return Ok(());
    }

    let report = sweep::run_sweep(&mut ProcessRunner, &config)?;
    if report.failures == 0 {
        info!("Sweep finished: {} driver runs", report.invocations);
    } else {
        warn!(
            "Sweep finished: {} of {} driver runs failed",
            report.failures, report.invocations
        );
    }
    Ok(())
}
