/*!
 * Dispatch
 * Decide how long a job runs and why its interval will end
 */

use super::Queues;
use crate::core::types::Tick;
use crate::process::{EndReason, Job, JobName};
use tracing::{debug, trace};

/// Interval started by a dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub job: JobName,
    pub duration: Tick,
    pub reason: EndReason,
}

/// Plan the next run interval for `job` starting at `now`
///
/// Outcomes are checked in order: terminate, block, preempt. On a tie
/// between remaining burst and time until block, termination wins.
pub fn plan_run(job: &mut Job, now: Tick, time_slice: Tick) -> EndReason {
    assert!(
        job.time_left > 0,
        "dispatching job {} with no burst remaining",
        job.name()
    );
    assert!(time_slice > 0, "time slice must be positive");

    let reason = if job.time_left <= job.time_till_block && job.time_left <= time_slice {
        job.run_end = now + job.time_left;
        job.time_left = 0;
        EndReason::Terminated
    } else if job.time_till_block <= time_slice && job.time_till_block <= job.time_left {
        job.run_end = now + job.time_till_block;
        job.time_left -= job.time_till_block;
        job.ran_without_blocking = 0;
        job.time_till_block = job.spec().block_interval;
        EndReason::Blocked
    } else {
        // time_slice < time_left && time_slice < time_till_block
        job.run_end = now + time_slice;
        job.time_left -= time_slice;
        job.time_till_block -= time_slice;
        job.ran_without_blocking += time_slice;
        EndReason::Preempted
    };

    job.end_reason = Some(reason);
    reason
}

impl Queues {
    /// Put `job` in the running slot with a freshly planned interval
    pub fn make_running(&mut self, mut job: Job, now: Tick) -> Dispatch {
        assert!(
            self.running.is_none(),
            "running slot occupied while dispatching {}",
            job.name()
        );

        let reason = plan_run(&mut job, now, self.time_slice);
        let dispatch = Dispatch {
            job: job.name().clone(),
            duration: job.run_end() - now,
            reason,
        };
        debug!(
            tick = now,
            job = %dispatch.job,
            duration = dispatch.duration,
            reason = %reason,
            "dispatched"
        );
        trace!(tick = now, "running {}", job);
        self.running = Some(job);
        dispatch
    }

    /// Pop the most urgent ready job and run it; `None` when nothing is ready
    pub fn dispatch_next(&mut self, now: Tick) -> Option<Dispatch> {
        let job = self.pop_ready()?;
        Some(self.make_running(job, now))
    }
}
