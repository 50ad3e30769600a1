//! Countdown to doors
//!
//! Remaining time is clamped at zero and split into whole days, hours,
//! minutes and seconds. Once the target passes every unit reads zero.

use chrono::{DateTime, Utc};
use serde::Serialize;

const MS_PER_SECOND: u64 = 1_000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;

/// Remaining time until a target instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Countdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Countdown {
    /// Countdown from `now` to `target`
    pub fn between(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let remaining = (target - now).num_milliseconds();
        // Negative remaining means the target has passed
        Self::from_millis(u64::try_from(remaining).unwrap_or(0))
    }

    /// Split a non-negative millisecond count into units
    pub const fn from_millis(remaining: u64) -> Self {
        Self {
            days: remaining / MS_PER_DAY,
            hours: (remaining / MS_PER_HOUR) % 24,
            minutes: (remaining / MS_PER_MINUTE) % 60,
            seconds: (remaining / MS_PER_SECOND) % 60,
        }
    }

    /// Whole seconds left
    pub const fn total_seconds(&self) -> u64 {
        self.days * 86_400 + self.hours * 3_600 + self.minutes * 60 + self.seconds
    }

    pub const fn is_elapsed(&self) -> bool {
        self.total_seconds() == 0
    }

    /// Units in display order with their labels
    pub const fn units(&self) -> [(&'static str, u64); 4] {
        [
            ("Days", self.days),
            ("Hours", self.hours),
            ("Minutes", self.minutes),
            ("Seconds", self.seconds),
        ]
    }
}

/// Zero-pad to two digits; larger values render in full
pub fn pad2(value: u64) -> String {
    format!("{value:02}")
}

/// Countdown state owned by a single view
///
/// Holds the fixed target and the latest "now" sample. The view replaces
/// the sample on every tick and reads the derived countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownClock {
    target: DateTime<Utc>,
    now: DateTime<Utc>,
}

impl CountdownClock {
    pub const fn new(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self { target, now }
    }

    pub const fn target(&self) -> DateTime<Utc> {
        self.target
    }

    /// Record a new wall-clock sample
    pub const fn sample(&mut self, now: DateTime<Utc>) {
        self.now = now;
    }

    pub fn countdown(&self) -> Countdown {
        Countdown::between(self.target, self.now)
    }
}
