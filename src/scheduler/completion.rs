/*!
 * Completion
 * Route a job whose run interval just ended
 */

use super::Queues;
use crate::core::types::Tick;
use crate::process::EndReason;
use tracing::debug;

impl Queues {
    /// Handle the running job if its interval ends at `now`
    ///
    /// Terminated jobs go to the done list, preempted jobs back to the ready
    /// queue, and blocked jobs to the blocked queue until
    /// `now + block_duration`. Returns the reason the interval ended, or
    /// `None` when nothing was running.
    pub fn handle_ending_process(&mut self, now: Tick) -> Option<EndReason> {
        let mut job = self.running.take()?;
        assert_eq!(
            job.run_end(),
            now,
            "job {} completed at {} but its interval ends at {}",
            job.name(),
            now,
            job.run_end()
        );

        let reason = job
            .end_reason()
            .unwrap_or_else(|| panic!("running job {} has no end reason", job.name()));

        match reason {
            EndReason::Terminated => {
                self.append_done(job, now);
            }
            EndReason::Preempted => {
                debug!(tick = now, job = %job.name(), "preempted, back to ready");
                self.enqueue_ready(job);
            }
            EndReason::Blocked => {
                job.unblock_at = now + self.block_duration;
                debug!(tick = now, job = %job.name(), unblock_at = job.unblock_at, "blocked");
                self.enqueue_blocked(job);
            }
        }

        Some(reason)
    }
}
