//! Plain-text rendering of the event pages

use std::fmt::Write;

use rocktober_core::content::{
    copyright_line, faq_entries, hero_subtitle, quick_info, rule_sections,
};
use rocktober_core::countdown::{Countdown, pad2};
use rocktober_core::{EventConfig, LineupConfig, RulesConfig};

/// One-line countdown, e.g. `01 Days  23 Hours  59 Minutes  59 Seconds`
///
/// All four units are always shown; past the target they all read `00`.
pub fn countdown_line(countdown: &Countdown) -> String {
    countdown
        .units()
        .iter()
        .map(|(label, value)| format!("{} {}", pad2(*value), label))
        .collect::<Vec<_>>()
        .join("  ")
}

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{title}\n{}", "-".repeat(title.chars().count()));
}

/// The landing page as text
pub fn landing_page(event: &EventConfig, lineup: &LineupConfig, year: i32) -> String {
    let mut out = String::new();
    let doors = event.doors_time_or_raw();

    let _ = writeln!(out, "{}", event.name);
    let _ = writeln!(out, "{}", hero_subtitle(event));
    let _ = writeln!(out, "{}", event.hero_tagline);
    let _ = writeln!(out);
    let _ = writeln!(out, "  Date:   {}", event.long_date());
    let _ = writeln!(out, "  Doors:  {doors}");
    let _ = writeln!(out, "  Venue:  {}", event.venue_name);
    let _ = writeln!(out, "  Tickets: {}", event.ticket_url);

    heading(&mut out, "Lineup");
    let _ = writeln!(out, "Subject to change. RSVP: {}", event.rsvp_url);
    let _ = writeln!(out, "\nMain Acts:");
    for band in &lineup.headliners {
        let _ = writeln!(out, "  {band}");
    }
    let _ = writeln!(out, "\nSpecial Guests:");
    let _ = writeln!(out, "  {}", lineup.guests.join(" · "));

    heading(&mut out, "Venue");
    let _ = writeln!(out, "{}", event.venue_name);
    let _ = writeln!(out, "{}", event.venue_addr);
    let _ = writeln!(out, "Map: {}", event.map_url);

    heading(&mut out, "Quick Info");
    for line in quick_info(event) {
        let _ = writeln!(out, "• {line}");
    }

    heading(&mut out, "FAQ");
    for entry in faq_entries(event) {
        let _ = writeln!(out, "Q: {}\nA: {}\n", entry.question, entry.answer);
    }

    let _ = writeln!(out, "{}", copyright_line(event, year));
    let _ = writeln!(out, "Questions? {}", event.contact_email);

    out
}

/// The rules page as text; links are shown after their label
pub fn rules_page(rules: &RulesConfig) -> String {
    let mut out = String::from("Rules & Important Information\n");

    for section in rule_sections(rules) {
        heading(&mut out, &section.title);
        for line in &section.lines {
            match &line.link {
                Some(link) => {
                    let _ = writeln!(
                        out,
                        "• {}{} ({}){}",
                        line.prefix, link.label, link.href, line.suffix
                    );
                }
                None => {
                    let _ = writeln!(out, "• {}", line.plain());
                }
            }
        }
    }

    let _ = writeln!(out, "\nTickets: {}", rules.ticket_url);
    let _ = writeln!(out, "Questions? {}", rules.contact_email);

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_line() {
        let countdown = Countdown {
            days: 1,
            hours: 23,
            minutes: 59,
            seconds: 59,
        };
        assert_eq!(
            countdown_line(&countdown),
            "01 Days  23 Hours  59 Minutes  59 Seconds"
        );
    }

    #[test]
    fn test_countdown_line_elapsed() {
        assert_eq!(
            countdown_line(&Countdown::default()),
            "00 Days  00 Hours  00 Minutes  00 Seconds"
        );
    }

    #[test]
    fn test_countdown_line_last_second() {
        // Under a second to go still reads as zero units
        assert_eq!(
            countdown_line(&Countdown::from_millis(500)),
            "00 Days  00 Hours  00 Minutes  00 Seconds"
        );
        assert_eq!(
            countdown_line(&Countdown::from_millis(1_500)),
            "00 Days  00 Hours  00 Minutes  01 Seconds"
        );
    }

    #[test]
    fn test_landing_page_sections() {
        let text = landing_page(&EventConfig::rocktober(), &LineupConfig::rocktober(), 2025);

        assert!(text.starts_with("Rocktober Fest 2025\nCanyon, TX • 2025\n"));
        assert!(text.contains("Date:   Saturday, October 18, 2025"));
        assert!(text.contains("Doors:  5:00 PM"));
        assert!(text.contains("Main Acts:\n  Divided Me\n  Breaking Solace\n"));
        assert!(text.contains("The Light Superior · Bardown"));
        assert!(text.contains("A: Doors at 5:00 PM; music shortly after."));
        assert!(text.contains("© 2025 Ecalos Music Initiative. All rights reserved."));

        let lineup = text.find("Lineup").unwrap();
        let venue = text.find("\nVenue\n").unwrap();
        let faq = text.find("\nFAQ\n").unwrap();
        assert!(lineup < venue && venue < faq);
    }

    #[test]
    fn test_rules_page() {
        let text = rules_page(&RulesConfig::rocktober());

        assert!(text.contains("General Rules\n-------------\n"));
        assert!(text.contains("• Official tickets only via TearStubs (https://tearstubs.com/event/592)."));
        assert!(text.contains("Questions? contact@ecalosmusicinitiative.org"));
    }
}
