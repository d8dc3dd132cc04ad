/*!
 * Process Module
 * Job records and job-list loading
 */

pub mod loader;
pub mod types;
mod validation;

// Re-export for convenience
pub use loader::{load_job_file, parse_job_list};
pub use types::{EndReason, Job, JobName, JobSpec};
