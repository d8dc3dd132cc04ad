/*!
 * Scheduler Queues
 * Arrival, ready and blocked queues plus the running slot and done list
 */

use crate::core::types::Tick;
use crate::process::{Job, JobName};
use serde::Serialize;

mod admission;
mod completion;
mod dispatch;
mod entry;
mod operations;

pub use admission::Admission;
pub use dispatch::{plan_run, Dispatch};

use entry::{
    arrival_key, blocked_key, ready_key, ArrivalKey, BlockedKey, OrderedQueue, ReadyKey,
};

/// A finished job paired with its turnaround time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub job: Job,
    pub completed_at: Tick,
    pub turnaround: Tick,
}

/// Owner of every job's location during a run
///
/// A job is always in exactly one of: arrival queue, ready queue, blocked
/// queue, running slot, done list.
#[derive(Debug, Clone)]
pub struct Queues {
    time_slice: Tick,
    block_duration: Tick,

    // Jobs not yet arrived, earliest arrival first
    arrival: OrderedQueue<ArrivalKey>,

    // Runnable jobs, most urgent first
    ready: OrderedQueue<ReadyKey>,

    // Jobs waiting on simulated I/O, earliest unblock first
    blocked: OrderedQueue<BlockedKey>,

    running: Option<Job>,

    // Completion order
    done: Vec<Completion>,
}

impl Queues {
    /// Create empty queues for the given time slice and block duration
    pub fn new(time_slice: Tick, block_duration: Tick) -> Self {
        Self {
            time_slice,
            block_duration,
            arrival: OrderedQueue::new(arrival_key),
            ready: OrderedQueue::new(ready_key),
            blocked: OrderedQueue::new(blocked_key),
            running: None,
            done: Vec::new(),
        }
    }

    pub fn time_slice(&self) -> Tick {
        self.time_slice
    }

    pub fn block_duration(&self) -> Tick {
        self.block_duration
    }

    /// Debug view of every queue in pop order
    pub fn snapshot(&self) -> QueueSnapshot {
        QueueSnapshot {
            running: self.running.as_ref().map(|j| j.name().clone()),
            ready: self.ready.in_order().into_iter().map(|j| j.name().clone()).collect(),
            blocked: self
                .blocked
                .in_order()
                .into_iter()
                .map(|j| (j.name().clone(), j.unblock_at()))
                .collect(),
            arrival: self
                .arrival
                .in_order()
                .into_iter()
                .map(|j| j.name().clone())
                .collect(),
            done: self.done.len(),
        }
    }
}

/// Point-in-time view of the queues
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueueSnapshot {
    pub running: Option<JobName>,
    pub ready: Vec<JobName>,
    pub blocked: Vec<(JobName, Tick)>,
    pub arrival: Vec<JobName>,
    pub done: usize,
}
