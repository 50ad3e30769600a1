use dioxus::prelude::*;
use rocktober_core::{EventConfig, share_event};

use crate::platform::BrowserPlatform;

/// Shares the event; every click is an independent attempt
#[component]
pub fn ShareButton(event: EventConfig) -> Element {
    rsx! {
        button {
            class: "rounded-2xl px-6 py-3 md:py-4 text-lg border border-neutral-700 text-neutral-200 hover:bg-white/10 transition inline-flex items-center gap-2",
            onclick: move |_| {
                let event = event.clone();
                spawn(async move {
                    let outcome = share_event(&event, &BrowserPlatform).await;
                    tracing::debug!(?outcome, "Share finished");
                });
            },
            span { aria_hidden: "true", "⤴" }
            "Share"
        }
    }
}
