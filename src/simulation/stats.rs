/*!
 * Simulation Statistics
 * Counters accumulated by the driver loop
 */

use crate::core::types::Tick;
use crate::process::EndReason;
use serde::{Deserialize, Serialize};

/// Run statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationStats {
    pub dispatches: u64,
    pub terminations: u64,
    pub blocks: u64,
    pub preemptions: u64,
    pub busy_ticks: Tick,
    pub idle_ticks: Tick,
    pub final_clock: Tick,
}

impl SimulationStats {
    pub(super) fn record_dispatch(&mut self, duration: Tick) {
        self.dispatches += 1;
        self.busy_ticks += duration;
    }

    pub(super) fn record_end(&mut self, reason: EndReason) {
        match reason {
            EndReason::Terminated => self.terminations += 1,
            EndReason::Blocked => self.blocks += 1,
            EndReason::Preempted => self.preemptions += 1,
        }
    }

    pub(super) fn record_idle(&mut self, duration: Tick) {
        self.idle_ticks += duration;
    }

    /// Fraction of elapsed ticks spent running a job
    pub fn cpu_utilization(&self) -> f64 {
        if self.final_clock == 0 {
            return 0.0;
        }
        self.busy_ticks as f64 / self.final_clock as f64
    }
}
