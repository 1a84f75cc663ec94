//! Configuration for daily-leg planning.

use chrono::Duration;
use serde::Deserialize;

/// Hour of day (local) at which each day after the first starts.
pub const DAY_START_HOUR: u32 = 9;

/// Calling-at stations passed less than this many minutes before the
/// enrichment segment's arrival become extra stopover candidates.
pub const CALLING_AT_WINDOW_MINS: i64 = 40;

/// Error returned when a planning configuration is out of range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("latest stop hour must be 0-23, got {0}")]
    LatestStopHour(u32),

    #[error("maximum travel time must be positive, got {0} minutes")]
    MaxTravelTime(i64),

    #[error("maximum trip length must be at least one day")]
    MaxDays,

    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Thresholds controlling where each day's travel is cut.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlanConfig {
    /// Maximum travel time per day (minutes). A day is cut once the
    /// accumulated time strictly exceeds this.
    #[serde(alias = "max_travel_time")]
    pub max_travel_time_mins: i64,

    /// Latest arrival hour (0-23). A day is cut at the first move segment
    /// arriving in a strictly later hour.
    #[serde(alias = "latest_stop_time")]
    pub latest_stop_hour: u32,

    /// Upper bound on the number of days in one plan.
    pub max_days: usize,
}

impl PlanConfig {
    /// Create a configuration with the given cut thresholds.
    pub fn new(max_travel_time_mins: i64, latest_stop_hour: u32) -> Self {
        Self {
            max_travel_time_mins,
            latest_stop_hour,
            ..Self::default()
        }
    }

    /// Set the maximum daily travel time.
    pub fn with_max_travel_time(mut self, mins: i64) -> Self {
        self.max_travel_time_mins = mins;
        self
    }

    /// Set the latest arrival hour.
    pub fn with_latest_stop_hour(mut self, hour: u32) -> Self {
        self.latest_stop_hour = hour;
        self
    }

    /// Set the maximum number of days in a plan.
    pub fn with_max_days(mut self, days: usize) -> Self {
        self.max_days = days;
        self
    }

    /// Check that all thresholds are in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.latest_stop_hour > 23 {
            return Err(ConfigError::LatestStopHour(self.latest_stop_hour));
        }
        if self.max_travel_time_mins <= 0 {
            return Err(ConfigError::MaxTravelTime(self.max_travel_time_mins));
        }
        if self.max_days == 0 {
            return Err(ConfigError::MaxDays);
        }
        Ok(())
    }

    /// Returns the calling-at candidate window as a Duration.
    pub fn calling_at_window(&self) -> Duration {
        Duration::minutes(CALLING_AT_WINDOW_MINS)
    }
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            max_travel_time_mins: 360, // 6 hours
            latest_stop_hour: 19,
            max_days: 30,
        }
    }
}
