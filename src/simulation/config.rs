/*!
 * Simulation Configuration
 * Time slice and block duration shared by every step of a run
 */

use crate::core::errors::ConfigError;
use crate::core::types::Tick;
use serde::{Deserialize, Deserializer, Serialize};

/// Fixed parameters of a simulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SimConfig {
    /// Maximum contiguous ticks a job may run before preemption
    pub time_slice: Tick,
    /// Ticks a job stays blocked once its block interval is used up
    pub block_duration: Tick,
}

impl SimConfig {
    /// Create a validated configuration
    pub fn new(time_slice: Tick, block_duration: Tick) -> Result<Self, ConfigError> {
        let config = Self {
            time_slice,
            block_duration,
        };
        config.validate()?;
        Ok(config)
    }

    /// Set the time slice (validated when the simulation is built)
    pub fn with_time_slice(mut self, time_slice: Tick) -> Self {
        self.time_slice = time_slice;
        self
    }

    /// Set the block duration (validated when the simulation is built)
    pub fn with_block_duration(mut self, block_duration: Tick) -> Self {
        self.block_duration = block_duration;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.time_slice == 0 {
            return Err(ConfigError::ZeroTimeSlice);
        }
        if self.block_duration == 0 {
            return Err(ConfigError::ZeroBlockDuration);
        }
        Ok(())
    }
}

impl<'de> Deserialize<'de> for SimConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Inner {
            time_slice: Tick,
            block_duration: Tick,
        }

        let inner = Inner::deserialize(deserializer)?;
        Self::new(inner.time_slice, inner.block_duration).map_err(serde::de::Error::custom)
    }
}
