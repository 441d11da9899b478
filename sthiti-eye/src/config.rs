//! Configuration for sthiti-eye

use serde::{Deserialize, Serialize};

/// Monitoring session configuration.
///
/// Validated before the sampler touches any resource; an invalid value is
/// rejected at configuration time, not at first use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Sampling period in seconds (one capture+detect cycle per period).
    pub sample_period_secs: f64,
    /// Capacity of the observation queue. When the consumer lags further
    /// than this, the oldest observations are dropped.
    pub queue_capacity: usize,
    /// Accumulated present time, in seconds, at which the driving loop
    /// should raise an alert.
    pub alert_threshold_secs: f64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            sample_period_secs: 0.5,
            queue_capacity: 64,
            alert_threshold_secs: 30.0 * 60.0,
        }
    }
}

impl MonitorConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.sample_period_secs.is_finite() || self.sample_period_secs <= 0.0 {
            return Err("Sample period must be a positive number of seconds".to_string());
        }

        if self.sample_period_secs > 3600.0 {
            return Err("Sample period too large (max 1 hour)".to_string());
        }

        if self.queue_capacity == 0 {
            return Err("Queue capacity must be non-zero".to_string());
        }

        if self.queue_capacity > 4096 {
            return Err("Queue capacity too large (max 4096)".to_string());
        }

        if !self.alert_threshold_secs.is_finite() || self.alert_threshold_secs <= 0.0 {
            return Err("Alert threshold must be a positive number of seconds".to_string());
        }

        Ok(())
    }
}
