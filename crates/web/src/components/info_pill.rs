use dioxus::prelude::*;

/// Rounded chip with a leading glyph, used for date/time/venue in the hero
#[component]
pub fn InfoPill(icon: &'static str, children: Element) -> Element {
    rsx! {
        div { class: "rounded-2xl bg-white/10 px-4 py-3 text-sm flex items-center justify-center gap-2 border border-white/10 text-neutral-100",
            span { class: "text-orange-300", aria_hidden: "true", "{icon}" }
            span { {children} }
        }
    }
}
