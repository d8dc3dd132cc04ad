/*!
 * Scheduler Simulator - Main Entry Point
 *
 * Usage: scheduler <JOB_FILE> <TIME_SLICE> <BLOCK_DURATION>
 */

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use miette::Diagnostic;
use prio_sched_sim::{init_tracing, simulate_file, SimConfig, SimResult};

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Simulate a preemptive priority CPU scheduler with I/O blocking
#[derive(Parser, Debug)]
#[command(name = "scheduler", version, about)]
struct Cli {
    /// Job list: one `name priority arrival burst block_interval` per line
    job_file: PathBuf,

    /// Maximum ticks a job runs before preemption
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    time_slice: u64,

    /// Ticks a job stays blocked after exhausting its block interval
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    block_duration: u64,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn run(cli: &Cli) -> SimResult<String> {
    let config = SimConfig::new(cli.time_slice, cli.block_duration)?;
    let report = simulate_file(&cli.job_file, config)?;
    match cli.format {
        OutputFormat::Text => Ok(report.render_text()),
        OutputFormat::Json => report.render_json(),
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    debug!(?cli, "arguments parsed");

    match run(&cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!(error = %e, code = ?e.code().map(|c| c.to_string()), "simulation failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
