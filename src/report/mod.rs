/*!
 * Reporter
 * Trace, turnaround and average formatting for completed runs
 */

use crate::core::types::{SimResult, Tick};
use crate::process::JobName;
use crate::scheduler::Completion;
use crate::simulation::{Interval, SimulationOutcome, SimulationStats};
use serde::Serialize;
use std::fmt;

/// One completed job in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionLine {
    pub name: JobName,
    pub turnaround: Tick,
}

impl From<&Completion> for CompletionLine {
    fn from(completion: &Completion) -> Self {
        Self {
            name: completion.job.name().clone(),
            turnaround: completion.turnaround,
        }
    }
}

/// Formatted results of a simulation run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub time_slice: Tick,
    pub block_duration: Tick,
    pub intervals: Vec<Interval>,
    pub completions: Vec<CompletionLine>,
    pub average_turnaround: f64,
    pub stats: SimulationStats,
}

impl Report {
    pub fn from_outcome(outcome: &SimulationOutcome) -> Self {
        let completions: Vec<CompletionLine> =
            outcome.completions.iter().map(CompletionLine::from).collect();
        Self {
            time_slice: outcome.config.time_slice,
            block_duration: outcome.config.block_duration,
            intervals: outcome.intervals.clone(),
            average_turnaround: average_turnaround(&completions),
            completions,
            stats: outcome.stats,
        }
    }

    /// Plain-text report as printed by the command line tool
    pub fn render_text(&self) -> String {
        self.to_string()
    }

    /// Pretty-printed JSON report
    pub fn render_json(&self) -> SimResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "timeSlice: {}     blockDuration: {}",
            self.time_slice, self.block_duration
        )?;
        for interval in &self.intervals {
            writeln!(f, "{}", interval)?;
        }
        writeln!(f)?;
        for line in &self.completions {
            writeln!(f, "{} {}", line.name, line.turnaround)?;
        }
        writeln!(f, "Average turnaround time: {:?}", self.average_turnaround)
    }
}

/// Arithmetic mean of turnaround times over every completed job
pub fn average_turnaround(completions: &[CompletionLine]) -> f64 {
    if completions.is_empty() {
        return 0.0;
    }
    let total: Tick = completions.iter().map(|c| c.turnaround).sum();
    total as f64 / completions.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::EndReason;
    use pretty_assertions::assert_eq;

    fn line(name: &str, turnaround: Tick) -> CompletionLine {
        CompletionLine {
            name: name.into(),
            turnaround,
        }
    }

    #[test]
    fn test_average_keeps_fraction() {
        assert_eq!(average_turnaround(&[line("A", 5), line("B", 6)]), 5.5);
        assert_eq!(average_turnaround(&[]), 0.0);
    }

    #[test]
    fn test_text_layout() {
        let report = Report {
            time_slice: 10,
            block_duration: 20,
            intervals: vec![
                Interval::idle(0, 3),
                Interval::run(3, 5, "A".into(), EndReason::Terminated),
            ],
            completions: vec![line("A", 5)],
            average_turnaround: 5.0,
            stats: SimulationStats::default(),
        };

        assert_eq!(
            report.render_text(),
            "timeSlice: 10     blockDuration: 20\n\
             0\tidle\t3\tI\n\
             3\tA\t5\tT\n\
             \n\
             A 5\n\
             Average turnaround time: 5.0\n"
        );
    }

    #[test]
    fn test_average_prints_shortest_round_trip() {
        let report = Report {
            time_slice: 1,
            block_duration: 1,
            intervals: Vec::new(),
            completions: vec![line("A", 1), line("B", 1), line("C", 2)],
            average_turnaround: average_turnaround(&[line("A", 1), line("B", 1), line("C", 2)]),
            stats: SimulationStats::default(),
        };
        assert!(report
            .render_text()
            .ends_with("Average turnaround time: 1.3333333333333333\n"));
    }
}
