//! Static event configuration
//!
//! Plain immutable records built once at startup. The built-in values
//! describe Rocktober Fest 2025; the CLI can replace the event record with
//! a JSON file.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::format::{format_long_date, format_time_of_day, parse_time_of_day};
use crate::timezone::EventZone;

/// Event record shown on the landing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventConfig {
    pub name: String,
    pub date: NaiveDate,
    /// Doors time as 24-hour `HH:MM`
    pub doors_time_local: String,
    /// IANA zone of the venue; the runtime's local zone when absent
    #[serde(default)]
    pub timezone: Option<String>,
    pub presenter: String,
    pub venue_name: String,
    pub venue_addr: String,
    pub city_state: String,
    pub hero_tagline: String,
    pub ticket_url: String,
    pub rsvp_url: String,
    pub contact_email: String,
    pub map_url: String,
    pub poster_url: String,
    pub background_url: String,
    #[serde(default)]
    pub lineup_image_url: Option<String>,
    #[serde(default)]
    pub lineup_image_alt: Option<String>,
}

impl EventConfig {
    /// The Rocktober Fest 2025 event
    pub fn rocktober() -> Self {
        Self {
            name: "Rocktober Fest 2025".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 10, 18).unwrap_or_default(),
            doors_time_local: "17:00".to_string(),
            timezone: None,
            presenter: "Ecalos Music Initiative".to_string(),
            venue_name: "Rockwell Event Center".to_string(),
            venue_addr: "16301 I-27, Canyon, TX 79015".to_string(),
            city_state: "Canyon, TX".to_string(),
            hero_tagline: "Turning Canyon up to 11.".to_string(),
            ticket_url: "https://example.com/tickets".to_string(),
            rsvp_url: "https://facebook.com/events/your-event".to_string(),
            contact_email: "info@rocktoberamarillo.com".to_string(),
            map_url: "https://www.google.com/maps/search/?api=1&query=Rockwell+Event+Center+16301+I-27+Canyon+TX+79015".to_string(),
            poster_url: "/rocktober.png".to_string(),
            background_url: "/rocktober.png".to_string(),
            lineup_image_url: Some("/poster.png".to_string()),
            lineup_image_alt: None,
        }
    }

    /// Parse an event record from JSON and validate it
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| CoreError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the fields the countdown and formatter depend on
    pub fn validate(&self) -> CoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::InvalidConfig("event name is empty".to_string()));
        }
        self.zone()?;
        self.doors_instant()?;
        Ok(())
    }

    /// Zone the date and doors time are interpreted in
    pub fn zone(&self) -> CoreResult<EventZone> {
        EventZone::from_name(self.timezone.as_deref())
    }

    /// Wall-clock doors time at the venue
    pub fn doors_local(&self) -> CoreResult<NaiveDateTime> {
        let time = parse_time_of_day(&self.doors_time_local)?;
        Ok(self.date.and_time(time))
    }

    /// The fixed countdown target
    pub fn doors_instant(&self) -> CoreResult<DateTime<Utc>> {
        self.zone()?.resolve(self.doors_local()?)
    }

    /// Long-form event date, e.g. `Saturday, October 18, 2025`
    pub fn long_date(&self) -> String {
        format_long_date(self.date)
    }

    /// Short doors time, e.g. `5:00 PM`
    pub fn doors_time(&self) -> CoreResult<String> {
        format_time_of_day(&self.doors_time_local)
    }

    /// Doors time for display; falls back to the raw configured string
    pub fn doors_time_or_raw(&self) -> String {
        self.doors_time()
            .unwrap_or_else(|_| self.doors_time_local.clone())
    }

    /// `mailto:` link for the contact address
    pub fn contact_mailto(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }
}

impl Default for EventConfig {
    fn default() -> Self {
        Self::rocktober()
    }
}

/// Performer billing; list order is display order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LineupConfig {
    pub headliners: Vec<String>,
    pub guests: Vec<String>,
}

impl LineupConfig {
    /// The Rocktober Fest 2025 lineup
    pub fn rocktober() -> Self {
        let names = |list: &[&str]| list.iter().map(ToString::to_string).collect();
        Self {
            headliners: names(&[
                "Divided Me",
                "Breaking Solace",
                "INSIDES",
                "Labor XII",
                "Black Tie Revolt",
            ]),
            guests: names(&[
                "The Light Superior",
                "Bardown",
                "Stealing Handshakes",
                "Ghosts of Gray County",
                "Sevity",
            ]),
        }
    }
}

/// Settings used by the rules page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    pub background_url: String,
    pub ticket_url: String,
    /// Name of the official ticket seller
    pub ticket_vendor: String,
    pub contact_email: String,
}

impl RulesConfig {
    pub fn rocktober() -> Self {
        Self {
            background_url: "/rocktober.png".to_string(),
            ticket_url: "https://tearstubs.com/event/592".to_string(),
            ticket_vendor: "TearStubs".to_string(),
            contact_email: "contact@ecalosmusicinitiative.org".to_string(),
        }
    }

    pub fn contact_mailto(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self::rocktober()
    }
}
