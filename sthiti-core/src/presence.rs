//! Debounced presence time accounting.
//!
//! Converts a stream of noisy boolean observations into cumulative present
//! and absent durations. Presence is treated as a run-length-encoded signal
//! with a minimum-sustained-duration filter: time accrues into a pending
//! counter while a run is unconfirmed, and only folds into the total once
//! the run outlasts the debounce threshold. A reversal shorter than the
//! threshold leaves no trace in either total, so a person glancing away
//! (or a momentary misdetection) neither interrupts nor inflates the tally.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Minimum sustained duration, in seconds, before a run of same-polarity
/// observations is confirmed into its cumulative total.
pub const DEFAULT_DEBOUNCE_SECS: f64 = 3.0;

/// Sentinel for "no observation of this polarity seen yet". Real timestamps
/// are validated non-negative, so the sentinel can never collide with input.
const UNSET: f64 = -1.0;

/// Polarity of the most recent observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresenceState {
    /// No observation consumed yet.
    Unknown,
    Present,
    Absent,
}

/// Debounced accumulator of present/absent time.
///
/// Owned and mutated by a single consumer loop; observations must arrive in
/// strictly increasing timestamp order or [`observe`](Self::observe) rejects
/// them before touching any counter.
#[derive(Debug, Clone)]
pub struct PresenceAccumulator {
    debounce_threshold: f64,
    total_present_time: f64,
    total_absent_time: f64,
    pending_present_time: f64,
    pending_absent_time: f64,
    last_present_timestamp: f64,
    last_absent_timestamp: f64,
    last_state: PresenceState,
    last_timestamp: f64,
}

impl Default for PresenceAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl PresenceAccumulator {
    /// Create an accumulator with the default debounce threshold.
    pub fn new() -> Self {
        Self {
            debounce_threshold: DEFAULT_DEBOUNCE_SECS,
            total_present_time: 0.0,
            total_absent_time: 0.0,
            pending_present_time: 0.0,
            pending_absent_time: 0.0,
            last_present_timestamp: UNSET,
            last_absent_timestamp: UNSET,
            last_state: PresenceState::Unknown,
            last_timestamp: UNSET,
        }
    }

    /// Create an accumulator with a custom debounce threshold in seconds.
    pub fn with_debounce(debounce_threshold: f64) -> Result<Self> {
        if !debounce_threshold.is_finite() || debounce_threshold <= 0.0 {
            return Err(Error::Configuration(format!(
                "Debounce threshold must be a positive number of seconds, got {}",
                debounce_threshold
            )));
        }
        Ok(Self {
            debounce_threshold,
            ..Self::new()
        })
    }

    /// Consume one observation.
    ///
    /// The very first observation only records which polarity the stream
    /// starts in; there is no preceding timestamp to measure an interval
    /// from, so no duration accrues.
    pub fn observe(&mut self, timestamp: f64, present: bool) -> Result<()> {
        if !timestamp.is_finite() || timestamp < 0.0 {
            return Err(Error::InvalidTimestamp(timestamp));
        }
        if self.last_state != PresenceState::Unknown && timestamp <= self.last_timestamp {
            return Err(Error::OutOfOrder {
                timestamp,
                last: self.last_timestamp,
            });
        }
        self.last_timestamp = timestamp;

        match (self.last_state, present) {
            (PresenceState::Unknown, true) => {
                self.last_present_timestamp = timestamp;
                self.last_state = PresenceState::Present;
            }
            (PresenceState::Unknown, false) => {
                self.last_absent_timestamp = timestamp;
                self.last_state = PresenceState::Absent;
            }
            (PresenceState::Present, true) => {
                self.pending_present_time += timestamp - self.last_present_timestamp;
                self.last_present_timestamp = timestamp;
                if self.pending_present_time > self.debounce_threshold {
                    self.total_present_time += self.pending_present_time;
                    self.pending_present_time = 0.0;
                }
            }
            (PresenceState::Absent, false) => {
                self.pending_absent_time += timestamp - self.last_absent_timestamp;
                self.last_absent_timestamp = timestamp;
                if self.pending_absent_time > self.debounce_threshold {
                    self.total_absent_time += self.pending_absent_time;
                    self.pending_absent_time = 0.0;
                }
            }
            (PresenceState::Absent, true) => {
                // An absent run that never reached the threshold was a
                // flicker: discard it so it leaves no trace in the totals.
                self.last_present_timestamp = timestamp;
                if self.pending_absent_time < self.debounce_threshold {
                    self.pending_absent_time = 0.0;
                }
                self.last_state = PresenceState::Present;
            }
            (PresenceState::Present, false) => {
                self.last_absent_timestamp = timestamp;
                if self.pending_present_time < self.debounce_threshold {
                    self.pending_present_time = 0.0;
                }
                self.last_state = PresenceState::Absent;
            }
        }

        Ok(())
    }

    /// Confirmed present time in seconds. Excludes pending time.
    pub fn present_time(&self) -> f64 {
        self.total_present_time
    }

    /// Confirmed absent time in seconds. Excludes pending time.
    pub fn absent_time(&self) -> f64 {
        self.total_absent_time
    }

    /// Polarity of the most recently consumed observation.
    pub fn state(&self) -> PresenceState {
        self.last_state
    }

    pub fn debounce_threshold(&self) -> f64 {
        self.debounce_threshold
    }

    /// Reset every counter and timestamp to its initial state, beginning a
    /// fresh measurement window. Used when an alert is acknowledged or
    /// monitoring restarts.
    pub fn clear(&mut self) {
        self.total_present_time = 0.0;
        self.total_absent_time = 0.0;
        self.pending_present_time = 0.0;
        self.pending_absent_time = 0.0;
        self.last_present_timestamp = UNSET;
        self.last_absent_timestamp = UNSET;
        self.last_state = PresenceState::Unknown;
        self.last_timestamp = UNSET;
    }
}
