/*!
 * Priority Scheduler Simulator Library
 * Discrete-event simulation of a preemptive priority CPU scheduler with
 * synthetic I/O blocking
 */

pub mod core;
pub mod monitoring;
pub mod process;
pub mod report;
pub mod scheduler;
pub mod simulation;

// Re-exports
pub use crate::core::errors::{ConfigError, ParseError, SimError};
pub use crate::core::types::{Priority, Seq, SimResult, Tick};
pub use monitoring::init_tracing;
pub use process::{load_job_file, parse_job_list, EndReason, Job, JobName, JobSpec};
pub use report::{CompletionLine, Report};
pub use scheduler::{Completion, Dispatch, QueueSnapshot, Queues};
pub use simulation::{
    Interval, IntervalKind, SimConfig, Simulation, SimulationOutcome, SimulationStats,
};

/// Load a job file and run it to completion
pub fn simulate_file(path: impl AsRef<std::path::Path>, config: SimConfig) -> SimResult<Report> {
    let jobs = load_job_file(path)?;
    let outcome = Simulation::new(config, jobs)?.run();
    Ok(Report::from_outcome(&outcome))
}
