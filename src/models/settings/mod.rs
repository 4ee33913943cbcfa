// Settings module
// Runtime tuning for the countdown display

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::countdown::WarningThresholds;

pub const MIN_TICK_INTERVAL_MS: u64 = 100;
pub const MAX_TICK_INTERVAL_MS: u64 = 60_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountdownSettings {
    /// How often the display is refreshed, in milliseconds
    pub tick_interval_ms: u64,
    pub warning_thresholds: WarningThresholds,
}

impl Default for CountdownSettings {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
            warning_thresholds: WarningThresholds::default(),
        }
    }
}

impl CountdownSettings {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS).contains(&self.tick_interval_ms) {
            return Err(format!(
                "tick_interval_ms must be between {} and {}",
                MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS
            ));
        }

        self.warning_thresholds.validate()
    }
}
