use dioxus::prelude::*;
use rocktober_core::content::rule_sections;

use crate::components::RuleCard;
use crate::{Route, Site};

#[component]
pub fn Rules() -> Element {
    let site = use_context::<Site>();
    let rules = site.rules.clone();
    let sections = rule_sections(&rules);
    let mailto = rules.contact_mailto();
    let style = format!(
        "background-image: linear-gradient(to bottom, rgba(10,10,10,0.3), rgba(10,10,10,0.6)), url({}); background-size: cover; background-attachment: fixed; background-position: center;",
        rules.background_url
    );

    rsx! {
        main { class: "min-h-screen text-neutral-100", style: "{style}",
            header { class: "sticky top-0 z-50 backdrop-blur-md bg-black/30 border-b border-neutral-800",
                div { class: "mx-auto max-w-6xl px-6 py-3 flex items-center justify-between text-sm",
                    Link {
                        to: Route::Home {},
                        class: "font-semibold text-orange-200 hover:text-white",
                        "← Back to Home"
                    }
                    a {
                        href: "{rules.ticket_url}",
                        target: "_blank",
                        rel: "noreferrer",
                        class: "hover:underline",
                        "Tickets"
                    }
                }
            }

            section { class: "mx-auto max-w-4xl px-6 py-12",
                h1 { class: "text-3xl md:text-4xl font-extrabold text-orange-200 mb-6",
                    "Rules & Important Information"
                }

                for section in sections {
                    RuleCard { key: "{section.title}", section: section.clone() }
                }

                div { class: "mt-10 text-sm text-neutral-400",
                    "Questions? "
                    a { class: "underline hover:text-white", href: "{mailto}", "{rules.contact_email}" }
                }
            }
        }
    }
}
