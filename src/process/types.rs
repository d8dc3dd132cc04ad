/*!
 * Process Types
 * Job identity, runtime state, and interval end reasons
 */

use crate::core::types::{Priority, Seq, Tick};
use serde::{Deserialize, Serialize};
use smartstring::alias::String as SmartString;
use std::fmt;

/// Job name stored inline for the short identifiers job lists use
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct JobName {
    inner: SmartString,
}

impl JobName {
    #[inline(always)]
    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }
}

impl From<&str> for JobName {
    #[inline]
    fn from(s: &str) -> Self {
        Self {
            inner: SmartString::from(s),
        }
    }
}

impl From<String> for JobName {
    #[inline]
    fn from(s: String) -> Self {
        Self {
            inner: SmartString::from(s),
        }
    }
}

impl AsRef<str> for JobName {
    #[inline(always)]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::borrow::Borrow<str> for JobName {
    #[inline(always)]
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for JobName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable job description as read from the job list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSpec {
    pub name: JobName,
    pub priority: Priority,
    pub arrival: Tick,
    pub burst: Tick,
    pub block_interval: Tick,
}

impl JobSpec {
    pub fn new(
        name: impl Into<JobName>,
        priority: Priority,
        arrival: Tick,
        burst: Tick,
        block_interval: Tick,
    ) -> Self {
        Self {
            name: name.into(),
            priority,
            arrival,
            burst,
            block_interval,
        }
    }
}

/// Why a run interval ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// Remaining burst reached zero
    Terminated,
    /// Block interval exhausted, job waits for simulated I/O
    Blocked,
    /// Time slice expired
    Preempted,
}

impl EndReason {
    /// Single-letter trace code
    #[inline(always)]
    pub const fn code(&self) -> char {
        match self {
            Self::Terminated => 'T',
            Self::Blocked => 'B',
            Self::Preempted => 'P',
        }
    }
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A job together with its mutable scheduling state
///
/// Runtime fields are only mutated by the scheduler's dispatch and completion
/// steps. Once a job reaches the done list it is never touched again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Job {
    seq: Seq,
    spec: JobSpec,
    pub(crate) time_left: Tick,
    pub(crate) time_till_block: Tick,
    pub(crate) ran_without_blocking: Tick,
    /// Instant the current (or most recent) run interval ends
    pub(crate) run_end: Tick,
    pub(crate) unblock_at: Tick,
    pub(crate) end_reason: Option<EndReason>,
}

impl Job {
    /// Create a job with its full burst and block interval outstanding
    pub fn new(seq: Seq, spec: JobSpec) -> Self {
        Self {
            seq,
            time_left: spec.burst,
            time_till_block: spec.block_interval,
            ran_without_blocking: 0,
            run_end: 0,
            unblock_at: 0,
            end_reason: None,
            spec,
        }
    }

    #[inline(always)]
    pub fn seq(&self) -> Seq {
        self.seq
    }

    #[inline(always)]
    pub fn spec(&self) -> &JobSpec {
        &self.spec
    }

    #[inline(always)]
    pub fn name(&self) -> &JobName {
        &self.spec.name
    }

    #[inline(always)]
    pub fn priority(&self) -> Priority {
        self.spec.priority
    }

    #[inline(always)]
    pub fn arrival(&self) -> Tick {
        self.spec.arrival
    }

    pub fn time_left(&self) -> Tick {
        self.time_left
    }

    pub fn time_till_block(&self) -> Tick {
        self.time_till_block
    }

    pub fn ran_without_blocking(&self) -> Tick {
        self.ran_without_blocking
    }

    pub fn run_end(&self) -> Tick {
        self.run_end
    }

    pub fn unblock_at(&self) -> Tick {
        self.unblock_at
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    pub fn is_finished(&self) -> bool {
        self.time_left == 0
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Job {}", self.spec.name)?;
        writeln!(f, "  Priority: {}", self.spec.priority)?;
        writeln!(f, "  Arrival: {}", self.spec.arrival)?;
        writeln!(f, "  Time Left: {}", self.time_left)?;
        writeln!(f, "  Block Interval: {}", self.spec.block_interval)?;
        writeln!(f, "  Run End: {}", self.run_end)?;
        writeln!(f, "  Unblock At: {}", self.unblock_at)?;
        writeln!(f, "  Ran Without Blocking: {}", self.ran_without_blocking)?;
        writeln!(f, "  Time Till Block: {}", self.time_till_block)?;
        match self.end_reason {
            Some(reason) => writeln!(f, "  End Reason: {:?}", reason),
            None => writeln!(f, "  End Reason: -"),
        }
    }
}
