/*!
 * Admission
 * Move arrived and unblocked jobs into the ready queue
 */

use super::Queues;
use crate::core::types::Tick;
use crate::process::JobName;
use tracing::debug;

/// What an admission pass moved into the ready queue
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Admission {
    pub arrived: Vec<JobName>,
    pub unblocked: Option<JobName>,
}

impl Admission {
    pub fn is_empty(&self) -> bool {
        self.arrived.is_empty() && self.unblocked.is_none()
    }
}

impl Queues {
    /// Admit jobs at `now`
    ///
    /// Every job whose arrival time has been reached is moved to the ready
    /// queue, but at most one job leaves the blocked queue per call even
    /// when several share the earliest unblock instant.
    pub fn admit(&mut self, now: Tick) -> Admission {
        let mut admission = Admission::default();

        while self.peek_arrival().is_some_and(|j| j.arrival() <= now) {
            if let Some(job) = self.pop_arrival() {
                debug!(tick = now, job = %job.name(), "arrived");
                admission.arrived.push(job.name().clone());
                self.enqueue_ready(job);
            }
        }

        if self.peek_blocked().is_some_and(|j| j.unblock_at() <= now) {
            if let Some(job) = self.pop_blocked() {
                debug!(tick = now, job = %job.name(), "unblocked");
                admission.unblocked = Some(job.name().clone());
                self.enqueue_ready(job);
            }
        }

        admission
    }
}
