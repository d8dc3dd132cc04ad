/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Job-list parse errors with serialization support
///
/// Line numbers are 1-based and count comment and blank lines, so they match
/// what an editor shows.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ParseError {
    #[error("line {line}: expected 5 fields (name priority arrival burst block_interval), found {found}")]
    #[diagnostic(
        code(parse::field_count),
        help("Each job line must have exactly five whitespace-separated fields.")
    )]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: field '{field}' is not an integer: '{value}'")]
    #[diagnostic(
        code(parse::invalid_integer),
        help("Priority, arrival, burst and block interval must be whole numbers.")
    )]
    InvalidInteger {
        line: usize,
        field: String,
        value: String,
    },

    #[error("line {line}: field '{field}' out of range: {value}")]
    #[diagnostic(
        code(parse::out_of_range),
        help("Arrival must be >= 0; burst and block interval must be > 0.")
    )]
    OutOfRange {
        line: usize,
        field: String,
        value: i64,
    },

    #[error("line {line}: duplicate job name '{name}'")]
    #[diagnostic(
        code(parse::duplicate_name),
        help("Job names identify trace lines and must be unique within a file.")
    )]
    DuplicateName { line: usize, name: String },
}

/// Simulation parameter errors
#[derive(Error, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", rename_all = "snake_case")]
pub enum ConfigError {
    #[error("time slice must be a positive integer")]
    #[diagnostic(code(config::zero_time_slice))]
    ZeroTimeSlice,

    #[error("block duration must be a positive integer")]
    #[diagnostic(code(config::zero_block_duration))]
    ZeroBlockDuration,
}

/// Unified simulator error type with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum SimError {
    #[error("File '{path}' not found.")]
    #[diagnostic(
        code(sim::file_not_found),
        help("Check the job list path passed as the first argument.")
    )]
    FileNotFound { path: String },

    #[error("Cannot read '{path}': {reason}")]
    #[diagnostic(
        code(sim::unreadable),
        help("Check file permissions and that the file is UTF-8 text.")
    )]
    Unreadable { path: String, reason: String },

    #[error("Job list contains no jobs")]
    #[diagnostic(
        code(sim::empty_job_list),
        help("Average turnaround is undefined without at least one job.")
    )]
    EmptyJobList,

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(sim::serialization))]
    Serialization(String),
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        SimError::Serialization(err.to_string())
    }
}
