/*!
 * Job List Loader
 * Reads `name priority arrival burst block_interval` lines into job specs
 */

use super::types::JobSpec;
use super::validation::{self, NameRegistry};
use crate::core::errors::{ParseError, SimError};
use crate::core::types::SimResult;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

const FIELD_COUNT: usize = 5;

/// Parse a job list held in memory
///
/// Lines starting with `#` and blank lines are skipped. Any other line must
/// hold exactly five whitespace-separated fields; the first bad line aborts
/// the whole parse.
pub fn parse_job_list(text: &str) -> Result<Vec<JobSpec>, ParseError> {
    let mut names = NameRegistry::default();
    let mut jobs = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        if raw.starts_with('#') || raw.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = raw.split_whitespace().collect();
        if fields.len() != FIELD_COUNT {
            return Err(ParseError::FieldCount {
                line,
                found: fields.len(),
            });
        }

        let name = fields[0];
        let priority = validation::parse_int(line, "priority", fields[1])?;
        let arrival = validation::parse_int(line, "arrival", fields[2])?;
        let arrival = validation::arrival(line, arrival)?;
        let burst = validation::parse_int(line, "burst", fields[3])?;
        let burst = validation::positive(line, "burst", burst)?;
        let block_interval = validation::parse_int(line, "block_interval", fields[4])?;
        let block_interval = validation::positive(line, "block_interval", block_interval)?;
        names.claim(line, name)?;

        debug!(
            line,
            job = name,
            priority,
            arrival,
            burst,
            block_interval,
            "parsed job"
        );
        jobs.push(JobSpec::new(name, priority, arrival, burst, block_interval));
    }

    Ok(jobs)
}

/// Read and parse a job list file
pub fn load_job_file(path: impl AsRef<Path>) -> SimResult<Vec<JobSpec>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => SimError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => SimError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        },
    })?;

    let jobs = parse_job_list(&text)?;
    info!(path = %path.display(), jobs = jobs.len(), "job list loaded");
    Ok(jobs)
}
