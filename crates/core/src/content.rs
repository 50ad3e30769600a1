//! Static page copy
//!
//! Text for the landing and rules pages. Lines that mention the doors time
//! are built from the event record so both front ends stay in sync.

use serde::Serialize;

use crate::config::{EventConfig, RulesConfig};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// A link to an external page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalLink {
    pub label: String,
    pub href: String,
}

/// One rule, optionally with an inline link between `prefix` and `suffix`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleLine {
    pub prefix: String,
    pub link: Option<ExternalLink>,
    pub suffix: String,
}

impl RuleLine {
    fn text(text: &str) -> Self {
        Self {
            prefix: text.to_string(),
            link: None,
            suffix: String::new(),
        }
    }

    /// Line as plain text, with the link label in place of the link
    pub fn plain(&self) -> String {
        match &self.link {
            Some(link) => format!("{}{}{}", self.prefix, link.label, self.suffix),
            None => format!("{}{}", self.prefix, self.suffix),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleSection {
    pub title: String,
    pub lines: Vec<RuleLine>,
}

/// Hero subtitle, e.g. `Canyon, TX • 2025`
pub fn hero_subtitle(event: &EventConfig) -> String {
    use chrono::Datelike;
    format!("{} • {}", event.city_state, event.date.year())
}

pub fn faq_entries(event: &EventConfig) -> Vec<FaqEntry> {
    let entry = |q: &str, a: String| FaqEntry {
        question: q.to_string(),
        answer: a,
    };

    vec![
        entry(
            "Where do I get tickets?",
            "Use the Buy Tickets button above.".to_string(),
        ),
        entry(
            "What time is the show?",
            format!(
                "Doors at {}; music shortly after.",
                event.doors_time_or_raw()
            ),
        ),
        entry(
            "Is there re-entry?",
            "Re-entry permitted with wristband.".to_string(),
        ),
        entry(
            "Refund policy?",
            "All sales final unless the event is cancelled or rescheduled.".to_string(),
        ),
    ]
}

pub fn quick_info(event: &EventConfig) -> Vec<String> {
    vec![
        format!(
            "Doors at {} • All ages welcome (with guardian) • BYOB with ID 21+",
            event.doors_time_or_raw()
        ),
        "Free on-site parking • Security screening at entry".to_string(),
        "No outside food/drink • Small bags only (subject to search)".to_string(),
    ]
}

pub fn rule_sections(rules: &RulesConfig) -> Vec<RuleSection> {
    let section = |title: &str, lines: Vec<RuleLine>| RuleSection {
        title: title.to_string(),
        lines,
    };

    vec![
        section(
            "General Rules",
            vec![
                RuleLine::text("No outside food or beverages."),
                RuleLine::text("All bags subject to search (small bags only)."),
                RuleLine::text("No weapons, drugs, or illegal substances."),
                RuleLine::text("Be respectful to staff, artists, and attendees."),
            ],
        ),
        section(
            "Entry & Re-Entry",
            vec![
                RuleLine::text("All ages welcome; under 16 with a guardian."),
                RuleLine::text("Valid government ID required for 18+ wristbands."),
                RuleLine::text("Re-entry permitted with intact wristband and stamp."),
            ],
        ),
        section(
            "Tickets & Refunds",
            vec![
                RuleLine::text("All sales final unless cancelled or rescheduled."),
                RuleLine {
                    prefix: "Official tickets only via ".to_string(),
                    link: Some(ExternalLink {
                        label: rules.ticket_vendor.clone(),
                        href: rules.ticket_url.clone(),
                    }),
                    suffix: ".".to_string(),
                },
                RuleLine::text("We can’t verify third-party resale tickets."),
            ],
        ),
    ]
}

/// Footer line, e.g. `© 2025 Ecalos Music Initiative. All rights reserved.`
pub fn copyright_line(event: &EventConfig, year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, event.presenter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_subtitle() {
        assert_eq!(hero_subtitle(&EventConfig::rocktober()), "Canyon, TX • 2025");
    }

    #[test]
    fn test_faq_interpolates_doors_time() {
        let faq = faq_entries(&EventConfig::rocktober());
        assert_eq!(faq.len(), 4);
        assert_eq!(faq[1].question, "What time is the show?");
        assert_eq!(faq[1].answer, "Doors at 5:00 PM; music shortly after.");
    }

    #[test]
    fn test_quick_info() {
        let info = quick_info(&EventConfig::rocktober());
        assert_eq!(info.len(), 3);
        assert!(info[0].starts_with("Doors at 5:00 PM •"));
    }

    #[test]
    fn test_rule_sections() {
        let sections = rule_sections(&RulesConfig::rocktober());
        let titles: Vec<_> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            ["General Rules", "Entry & Re-Entry", "Tickets & Refunds"]
        );

        let linked = &sections[2].lines[1];
        assert_eq!(
            linked.link.as_ref().map(|l| l.href.as_str()),
            Some("https://tearstubs.com/event/592")
        );
        assert_eq!(linked.plain(), "Official tickets only via TearStubs.");
        assert_eq!(sections[0].lines[0].plain(), "No outside food or beverages.");
    }

    #[test]
    fn test_copyright_line() {
        assert_eq!(
            copyright_line(&EventConfig::rocktober(), 2026),
            "© 2026 Ecalos Music Initiative. All rights reserved."
        );
    }
}
