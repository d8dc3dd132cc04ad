/*!
 * Event Log
 * Chronological run and idle intervals produced by the driver loop
 */

use crate::core::types::Tick;
use crate::process::{EndReason, JobName};
use serde::Serialize;
use std::fmt;

/// What occupied the CPU during an interval
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IntervalKind {
    Run { job: JobName, reason: EndReason },
    Idle,
}

/// One logged interval, recorded at the tick it begins
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interval {
    pub start: Tick,
    pub duration: Tick,
    #[serde(flatten)]
    pub kind: IntervalKind,
}

impl Interval {
    pub fn run(start: Tick, duration: Tick, job: JobName, reason: EndReason) -> Self {
        Self {
            start,
            duration,
            kind: IntervalKind::Run { job, reason },
        }
    }

    pub fn idle(start: Tick, duration: Tick) -> Self {
        Self {
            start,
            duration,
            kind: IntervalKind::Idle,
        }
    }

    pub fn end(&self) -> Tick {
        self.start + self.duration
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.kind, IntervalKind::Idle)
    }

    /// Job name, or `idle`
    pub fn label(&self) -> &str {
        match &self.kind {
            IntervalKind::Run { job, .. } => job.as_str(),
            IntervalKind::Idle => "idle",
        }
    }

    /// End reason code, `I` for idle intervals
    pub fn code(&self) -> char {
        match &self.kind {
            IntervalKind::Run { reason, .. } => reason.code(),
            IntervalKind::Idle => 'I',
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.start,
            self.label(),
            self.duration,
            self.code()
        )
    }
}

/// Append-only interval log
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EventLog {
    intervals: Vec<Interval>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, interval: Interval) {
        debug_assert!(
            self.intervals.last().map_or(true, |prev| prev.end() <= interval.start),
            "intervals must be logged in chronological order"
        );
        self.intervals.push(interval);
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Sum of all logged durations, idle included
    pub fn total_duration(&self) -> Tick {
        self.intervals.iter().map(|i| i.duration).sum()
    }

    pub fn into_intervals(self) -> Vec<Interval> {
        self.intervals
    }
}
