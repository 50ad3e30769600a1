//! Configuration for the terminal front end
//!
//! Loads configuration from environment variables

use anyhow::{Context, Result};
use rocktober_core::EventConfig;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON file replacing the built-in event record
    pub event_file: Option<PathBuf>,

    /// Page location included in share payloads
    pub page_url: Option<String>,

    /// Countdown refresh period in milliseconds (default: 1000)
    pub tick_millis: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let page_url = lookup("ROCKTOBER_PAGE_URL")
            .map(|raw| {
                url::Url::parse(&raw)
                    .map(String::from)
                    .with_context(|| format!("ROCKTOBER_PAGE_URL is not a valid URL: {raw}"))
            })
            .transpose()?;

        let tick_millis: u64 = lookup("ROCKTOBER_TICK_MILLIS")
            .unwrap_or_else(|| "1000".to_string())
            .parse()
            .context("ROCKTOBER_TICK_MILLIS must be a valid integer")?;

        if tick_millis == 0 {
            anyhow::bail!("ROCKTOBER_TICK_MILLIS must be greater than zero");
        }

        Ok(Self {
            event_file: lookup("ROCKTOBER_EVENT_FILE").map(PathBuf::from),
            page_url,
            tick_millis,
        })
    }

    pub const fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }

    /// The event record: the override file if configured, else the built-in one
    pub fn load_event(&self) -> Result<EventConfig> {
        let Some(path) = &self.event_file else {
            let event = EventConfig::rocktober();
            event.validate()?;
            return Ok(event);
        };

        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read event file {}", path.display()))?;

        let event = EventConfig::from_json_str(&json)
            .with_context(|| format!("Invalid event file {}", path.display()))?;

        tracing::info!("Loaded event '{}' from {}", event.name, path.display());
        Ok(event)
    }
}
