/*!
 * Scheduler Core Operations
 * Enqueue, peek and pop for each queue; running slot and done list access
 */

use super::{Completion, Queues};
use crate::core::types::Tick;
use crate::process::Job;
use tracing::debug;

impl Queues {
    /// Add a job that has not yet arrived
    pub fn enqueue_arrival(&mut self, job: Job) {
        self.arrival.push(job);
    }

    /// Add a runnable job; its ready key uses the job's last run-end instant
    pub fn enqueue_ready(&mut self, job: Job) {
        self.ready.push(job);
    }

    /// Add a job waiting on I/O, keyed by its unblock instant
    pub fn enqueue_blocked(&mut self, job: Job) {
        self.blocked.push(job);
    }

    pub fn peek_arrival(&self) -> Option<&Job> {
        self.arrival.peek()
    }

    pub fn peek_ready(&self) -> Option<&Job> {
        self.ready.peek()
    }

    pub fn peek_blocked(&self) -> Option<&Job> {
        self.blocked.peek()
    }

    pub fn pop_arrival(&mut self) -> Option<Job> {
        self.arrival.pop()
    }

    pub fn pop_ready(&mut self) -> Option<Job> {
        self.ready.pop()
    }

    pub fn pop_blocked(&mut self) -> Option<Job> {
        self.blocked.pop()
    }

    /// Record a terminated job; turnaround is `now - arrival`
    pub fn append_done(&mut self, job: Job, now: Tick) -> &Completion {
        assert!(
            job.is_finished(),
            "job {} reached the done list with {} ticks outstanding",
            job.name(),
            job.time_left()
        );
        assert!(
            now >= job.arrival(),
            "job {} completed at {} before arriving at {}",
            job.name(),
            now,
            job.arrival()
        );

        let turnaround = now - job.arrival();
        debug!(tick = now, job = %job.name(), turnaround, "job done");
        self.done.push(Completion {
            job,
            completed_at: now,
            turnaround,
        });
        &self.done[self.done.len() - 1]
    }

    /// Currently running job
    pub fn running(&self) -> Option<&Job> {
        self.running.as_ref()
    }

    /// True when the running slot is empty or its interval ends at `now`
    pub fn needs_decision(&self, now: Tick) -> bool {
        match &self.running {
            None => true,
            Some(job) => job.run_end() == now,
        }
    }

    /// Completed jobs in completion order
    pub fn done(&self) -> &[Completion] {
        &self.done
    }

    pub fn done_len(&self) -> usize {
        self.done.len()
    }

    pub fn ready_len(&self) -> usize {
        self.ready.len()
    }

    pub fn blocked_len(&self) -> usize {
        self.blocked.len()
    }

    pub fn arrival_len(&self) -> usize {
        self.arrival.len()
    }

    /// Number of jobs held across all queues, the running slot and the done list
    pub fn total_jobs(&self) -> usize {
        self.arrival.len()
            + self.ready.len()
            + self.blocked.len()
            + usize::from(self.running.is_some())
            + self.done.len()
    }

    /// Consume the queues, yielding the done list
    pub fn into_done(self) -> Vec<Completion> {
        self.done
    }
}
