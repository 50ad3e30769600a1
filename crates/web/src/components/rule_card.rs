use dioxus::prelude::*;
use rocktober_core::content::RuleSection;

#[component]
pub fn RuleCard(section: RuleSection) -> Element {
    rsx! {
        div { class: "bg-white/5 border border-neutral-800 rounded-2xl p-5 mb-6",
            h2 { class: "text-xl font-bold mb-3 text-orange-200", "{section.title}" }
            div { class: "text-neutral-300",
                ul { class: "list-disc ml-5 space-y-1 text-neutral-100",
                    for line in section.lines.iter() {
                        li {
                            "{line.prefix}"
                            if let Some(link) = &line.link {
                                a {
                                    class: "underline",
                                    href: "{link.href}",
                                    target: "_blank",
                                    rel: "noreferrer",
                                    "{link.label}"
                                }
                            }
                            "{line.suffix}"
                        }
                    }
                }
            }
        }
    }
}
