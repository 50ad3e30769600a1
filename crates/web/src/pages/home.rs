use chrono::{Datelike, Local};
use dioxus::prelude::*;
use rocktober_core::content::{copyright_line, faq_entries, hero_subtitle, quick_info};

use crate::Site;
use crate::components::{CountdownPanel, InfoPill, ShareButton};

const LOGO_URL: &str = "/rocklogo.png";

fn page_background(url: &str, from: &str, to: &str) -> String {
    format!(
        "background-image: linear-gradient(to bottom, rgba(10,10,10,{from}), rgba(10,10,10,{to})), url({url}); background-size: cover; background-position: center;"
    )
}

#[component]
pub fn Home() -> Element {
    let site = use_context::<Site>();
    let event = site.event.clone();
    let lineup = site.lineup.clone();

    // Computed once per mount; a bad doors time hides the countdown
    let target = use_hook(|| match site.event.doors_instant() {
        Ok(target) => Some(target),
        Err(e) => {
            tracing::error!("Cannot build countdown target: {}", e);
            None
        }
    });

    let doors = event.doors_time_or_raw();
    let long_date = event.long_date();
    let subtitle = hero_subtitle(&event);
    let faq = faq_entries(&event);
    let info = quick_info(&event);
    let copyright = copyright_line(&event, Local::now().year());
    let main_style = format!(
        "{} background-attachment: fixed;",
        page_background(&event.background_url, "0.85", "0.95")
    );
    let hero_style = page_background(&event.poster_url, ".70", ".95");
    let mailto = event.contact_mailto();
    let lineup_alt = event
        .lineup_image_alt
        .clone()
        .unwrap_or_else(|| "Lineup banner".to_string());

    rsx! {
        main {
            class: "min-h-screen text-neutral-100",
            style: "{main_style}",

            // Hero
            section {
                class: "relative overflow-hidden",
                aria_label: "Event hero",
                style: "{hero_style}",
                div { class: "relative mx-auto max-w-6xl px-6 py-20 md:py-28",
                    div { class: "flex flex-col items-center text-center gap-6",
                        div { class: "flex flex-col items-center",
                            img {
                                src: LOGO_URL,
                                alt: "{event.name}",
                                class: "w-[400px] md:w-[600px] object-contain",
                            }
                            span { class: "block text-3xl md:text-5xl font-extrabold mt-2 text-orange-200",
                                "{subtitle}"
                            }
                        }

                        p { class: "max-w-2xl text-neutral-100 font-medium", "{event.hero_tagline}" }

                        div { class: "grid grid-cols-1 sm:grid-cols-3 gap-3 w-full max-w-3xl mt-2",
                            InfoPill { icon: "📅", "{long_date}" }
                            InfoPill { icon: "🕔", "Doors {doors}" }
                            InfoPill { icon: "📍", "{event.venue_name}" }
                        }

                        div { class: "flex flex-wrap items-center justify-center gap-3 mt-6",
                            a {
                                href: "{event.ticket_url}",
                                target: "_blank",
                                rel: "noreferrer",
                                class: "rounded-2xl px-6 py-3 md:py-4 text-lg shadow-lg bg-orange-500 hover:bg-orange-600 transition inline-flex items-center gap-2",
                                "Get Tickets"
                            }
                            a {
                                href: "{event.map_url}",
                                target: "_blank",
                                rel: "noreferrer",
                                class: "rounded-2xl px-6 py-3 md:py-4 text-lg bg-white/10 hover:bg-white/20 transition border border-white/10 inline-flex items-center gap-2",
                                "Directions"
                            }
                            ShareButton { event: event.clone() }
                        }

                        if let Some(target) = target {
                            CountdownPanel { target }
                        }
                    }
                }
            }

            // Lineup
            section { class: "mx-auto max-w-6xl px-6 py-16", aria_labelledby: "lineup",
                if let Some(image) = &event.lineup_image_url {
                    img {
                        src: "{image}",
                        alt: "{lineup_alt}",
                        class: "w-full max-w-5xl mx-auto mb-8 rounded-2xl shadow-lg object-cover",
                        "loading": "lazy",
                    }
                }
                header { class: "flex items-end justify-between mb-8",
                    div {
                        h2 { id: "lineup", class: "text-3xl md:text-4xl font-extrabold text-orange-200", "Lineup" }
                        p { class: "text-neutral-300", "Subject to change." }
                    }
                    a {
                        href: "{event.rsvp_url}",
                        target: "_blank",
                        rel: "noreferrer",
                        class: "rounded-xl px-4 py-2 bg-white/10 hover:bg-white/20 transition inline-flex items-center gap-2",
                        "RSVP ↗"
                    }
                }

                div { class: "grid gap-4 md:grid-cols-2",
                    div { class: "bg-white/5 border border-neutral-800 rounded-2xl",
                        div { class: "px-5 pt-5",
                            h3 { class: "flex items-center gap-2 text-orange-300 font-semibold", "Main Acts" }
                        }
                        div { class: "p-5",
                            ul { class: "space-y-2 text-xl font-semibold",
                                for (i, band) in lineup.headliners.iter().enumerate() {
                                    li {
                                        key: "{i}",
                                        class: "border-b border-white/10 pb-2 last:border-none text-neutral-100",
                                        "{band}"
                                    }
                                }
                            }
                        }
                    }
                    div { class: "bg-white/5 border border-neutral-800 rounded-2xl",
                        div { class: "px-5 pt-5",
                            h3 { class: "flex items-center gap-2 text-orange-200 font-semibold", "Special Guests" }
                        }
                        div { class: "p-5",
                            ul { class: "flex flex-wrap gap-2",
                                for (i, band) in lineup.guests.iter().enumerate() {
                                    li {
                                        key: "{i}",
                                        class: "rounded-xl bg-white/10 px-3 py-1 text-sm text-neutral-100",
                                        "{band}"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            // Venue & info
            section { class: "bg-white/5 border-y border-neutral-800",
                div { class: "mx-auto max-w-6xl px-6 py-16 grid gap-10 md:grid-cols-2",
                    div {
                        h3 { class: "text-2xl font-bold mb-3 text-orange-200", "Venue" }
                        p { class: "text-neutral-100", "{event.venue_name}" }
                        address { class: "not-italic text-neutral-300", "{event.venue_addr}" }
                        div { class: "mt-4 flex gap-3",
                            a {
                                href: "{event.map_url}",
                                target: "_blank",
                                rel: "noreferrer",
                                class: "rounded-xl px-4 py-2 bg-white/10 hover:bg-white/20 transition inline-flex items-center gap-2",
                                "Open in Maps"
                            }
                            a {
                                href: "{event.ticket_url}",
                                target: "_blank",
                                rel: "noreferrer",
                                class: "rounded-xl px-4 py-2 bg-orange-500 hover:bg-orange-600 transition inline-flex items-center gap-2",
                                "Buy Tickets"
                            }
                        }
                    }
                    div {
                        h3 { class: "text-2xl font-bold mb-3 text-orange-200", "Quick Info" }
                        ul { class: "space-y-2 text-neutral-100",
                            for line in info {
                                li { "• {line}" }
                            }
                        }
                    }
                }
            }

            // FAQ
            section { class: "mx-auto max-w-6xl px-6 py-16", aria_labelledby: "faq",
                h3 { id: "faq", class: "text-2xl font-bold mb-6 text-orange-200", "FAQ" }
                div { class: "grid gap-4 md:grid-cols-2",
                    for entry in faq {
                        div {
                            key: "{entry.question}",
                            class: "bg-white/5 border border-neutral-800 rounded-2xl p-5",
                            div { class: "text-base text-neutral-100 font-semibold", "{entry.question}" }
                            div { class: "text-neutral-300", "{entry.answer}" }
                        }
                    }
                }
            }

            footer { class: "border-t border-neutral-800",
                div { class: "mx-auto max-w-6xl px-6 py-10 text-sm text-neutral-400 flex flex-col md:flex-row items-center justify-between gap-4",
                    p { "{copyright}" }
                    p {
                        "Questions? "
                        a { class: "underline hover:text-white", href: "{mailto}", "{event.contact_email}" }
                    }
                }
            }
        }
    }
}
