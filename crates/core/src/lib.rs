//! Rocktober Core - Domain logic for the event landing page
//!
//! This crate contains pure domain logic with no platform I/O.
//! Event configuration, the countdown, formatting and the share action
//! are defined here; front ends supply clocks, timers and share targets.

pub mod config;
pub mod content;
pub mod countdown;
pub mod error;
pub mod format;
pub mod share;
pub mod ticker;
pub mod timezone;

pub use config::{EventConfig, LineupConfig, RulesConfig};
pub use countdown::{Countdown, CountdownClock};
pub use error::{CoreError, CoreResult};
pub use format::{format_long_date, format_time_of_day};
pub use share::{ShareOutcome, SharePlatform, ShareTarget, share_event};
