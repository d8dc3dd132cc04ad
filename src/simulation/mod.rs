/*!
 * Simulation Driver
 * Tick-by-tick clock loop over the scheduler queues
 */

use crate::core::errors::SimError;
use crate::core::types::{SimResult, Tick};
use crate::process::{Job, JobSpec};
use crate::scheduler::{Completion, Queues};
use tracing::{debug, info, info_span, trace};

pub mod config;
pub mod event;
pub mod stats;

pub use config::SimConfig;
pub use event::{EventLog, Interval, IntervalKind};
pub use stats::SimulationStats;

/// Result of a completed run
#[derive(Debug, Clone)]
pub struct SimulationOutcome {
    pub config: SimConfig,
    pub intervals: Vec<Interval>,
    pub completions: Vec<Completion>,
    pub stats: SimulationStats,
}

impl SimulationOutcome {
    /// Clock value at which the last job terminated
    pub fn final_clock(&self) -> Tick {
        self.stats.final_clock
    }
}

/// Discrete-event driver owning the clock and every job
///
/// Each tick at which the running slot is empty or its interval ends runs
/// admission, completion and dispatch in that order. The run stops at the
/// tick the last job terminates.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimConfig,
    queues: Queues,
    clock: Tick,
    job_count: usize,
    log: EventLog,
    idle_streak: Tick,
    stats: SimulationStats,
    finished: bool,
}

impl Simulation {
    /// Build a simulation with every job waiting in the arrival queue
    pub fn new(config: SimConfig, jobs: Vec<JobSpec>) -> SimResult<Self> {
        config.validate()?;
        if jobs.is_empty() {
            return Err(SimError::EmptyJobList);
        }

        let mut queues = Queues::new(config.time_slice, config.block_duration);
        let job_count = jobs.len();
        for (seq, spec) in jobs.into_iter().enumerate() {
            queues.enqueue_arrival(Job::new(seq, spec));
        }

        info!(
            jobs = job_count,
            time_slice = config.time_slice,
            block_duration = config.block_duration,
            "simulation initialized"
        );

        Ok(Self {
            config,
            queues,
            clock: 0,
            job_count,
            log: EventLog::new(),
            idle_streak: 0,
            stats: SimulationStats::default(),
            finished: false,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn clock(&self) -> Tick {
        self.clock
    }

    pub fn queues(&self) -> &Queues {
        &self.queues
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    pub fn stats(&self) -> &SimulationStats {
        &self.stats
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance one tick; returns true once every job has terminated
    pub fn step(&mut self) -> bool {
        if self.finished {
            return true;
        }

        let now = self.clock;
        if self.queues.needs_decision(now) {
            let admission = self.queues.admit(now);
            if !admission.is_empty() {
                trace!(tick = now, ?admission, "admission");
            }

            if let Some(reason) = self.queues.handle_ending_process(now) {
                self.stats.record_end(reason);
            }

            if self.queues.done_len() == self.job_count {
                self.finish();
                return true;
            }

            trace!(tick = now, snapshot = ?self.queues.snapshot(), "decision point");

            match self.queues.dispatch_next(now) {
                None => self.idle_streak += 1,
                Some(dispatch) => {
                    self.flush_idle();
                    self.stats.record_dispatch(dispatch.duration);
                    self.log.push(Interval::run(
                        now,
                        dispatch.duration,
                        dispatch.job,
                        dispatch.reason,
                    ));
                }
            }
        }

        assert_eq!(
            self.queues.total_jobs(),
            self.job_count,
            "job lost or duplicated at tick {}",
            now
        );

        self.clock += 1;
        false
    }

    /// Run to completion
    pub fn run(mut self) -> SimulationOutcome {
        let span = info_span!(
            "simulation",
            jobs = self.job_count,
            time_slice = self.config.time_slice,
            block_duration = self.config.block_duration
        );
        let _entered = span.enter();

        while !self.step() {}

        SimulationOutcome {
            config: self.config,
            intervals: self.log.into_intervals(),
            completions: self.queues.into_done(),
            stats: self.stats,
        }
    }

    /// Log the accumulated idle streak as one interval ending now
    fn flush_idle(&mut self) {
        if self.idle_streak == 0 {
            return;
        }
        let start = self.clock - self.idle_streak;
        debug!(tick = start, duration = self.idle_streak, "idle");
        self.stats.record_idle(self.idle_streak);
        self.log.push(Interval::idle(start, self.idle_streak));
        self.idle_streak = 0;
    }

    fn finish(&mut self) {
        debug_assert_eq!(self.idle_streak, 0, "unflushed idle streak at finish");
        self.finished = true;
        self.stats.final_clock = self.clock;
        info!(
            final_clock = self.clock,
            dispatches = self.stats.dispatches,
            preemptions = self.stats.preemptions,
            blocks = self.stats.blocks,
            idle_ticks = self.stats.idle_ticks,
            utilization = self.stats.cpu_utilization(),
            "simulation complete"
        );
    }
}
