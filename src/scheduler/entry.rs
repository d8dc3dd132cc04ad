/*!
 * Scheduler Entry Types
 * Keyed heap entries and the three queue orderings
 */

use crate::core::types::{Priority, Seq, Tick};
use crate::process::Job;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Arrival queue order: arrival time, then input order
pub(super) type ArrivalKey = (Tick, Seq);

/// Ready queue order: most urgent priority, then earliest last run-end, then input order
pub(super) type ReadyKey = (Reverse<Priority>, Tick, Seq);

/// Blocked queue order: unblock instant, then input order
pub(super) type BlockedKey = (Tick, Seq);

pub(super) fn arrival_key(job: &Job) -> ArrivalKey {
    (job.arrival(), job.seq())
}

pub(super) fn ready_key(job: &Job) -> ReadyKey {
    (Reverse(job.priority()), job.run_end(), job.seq())
}

pub(super) fn blocked_key(job: &Job) -> BlockedKey {
    (job.unblock_at(), job.seq())
}

/// Heap entry carrying the key captured at enqueue time
#[derive(Debug, Clone)]
struct Entry<K> {
    key: K,
    job: Job,
}

impl<K: Ord> PartialEq for Entry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Ord> Eq for Entry<K> {}

impl<K: Ord> Ord for Entry<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, so the smallest key must compare greatest
        other.key.cmp(&self.key)
    }
}

impl<K: Ord> PartialOrd for Entry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of jobs ordered by a key extracted on push
///
/// Keys always end in the job's input sequence number, so no two entries
/// compare equal and pop order is fully deterministic.
#[derive(Debug, Clone)]
pub(super) struct OrderedQueue<K> {
    heap: BinaryHeap<Entry<K>>,
    key_of: fn(&Job) -> K,
}

impl<K: Ord + Copy> OrderedQueue<K> {
    pub fn new(key_of: fn(&Job) -> K) -> Self {
        Self {
            heap: BinaryHeap::new(),
            key_of,
        }
    }

    pub fn push(&mut self, job: Job) {
        let key = (self.key_of)(&job);
        self.heap.push(Entry { key, job });
    }

    pub fn peek(&self) -> Option<&Job> {
        self.heap.peek().map(|e| &e.job)
    }

    pub fn pop(&mut self) -> Option<Job> {
        self.heap.pop().map(|e| e.job)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Jobs in the order they would be popped
    pub fn in_order(&self) -> Vec<&Job> {
        let mut entries: Vec<&Entry<K>> = self.heap.iter().collect();
        entries.sort_by(|a, b| a.key.cmp(&b.key));
        entries.into_iter().map(|e| &e.job).collect()
    }
}
