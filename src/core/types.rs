/*!
 * Core Types
 * Common types used across the simulator
 */

/// Simulated clock value, one unit per scheduler tick
pub type Tick = u64;

/// Scheduling priority (higher value is more urgent)
pub type Priority = i64;

/// Position of a job in the input file, used as the final ordering tie-break
pub type Seq = usize;

/// Common result type for simulator operations
pub type SimResult<T> = Result<T, super::errors::SimError>;
