use dioxus::prelude::*;
use rocktober_core::{EventConfig, LineupConfig, RulesConfig};

mod components;
mod pages;
mod platform;

use pages::{Home, Rules};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

/// Configuration shared by every page
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    pub event: EventConfig,
    pub lineup: LineupConfig,
    pub rules: RulesConfig,
}

impl Site {
    fn load() -> Self {
        let event = EventConfig::rocktober();
        if let Err(e) = event.validate() {
            tracing::error!("Invalid event configuration: {}", e);
        }

        Self {
            event,
            lineup: LineupConfig::rocktober(),
            rules: RulesConfig::rocktober(),
        }
    }
}

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/rules")]
    Rules {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let site = use_context_provider(Site::load);

    rsx! {
        document::Title { "{site.event.name}" }
        document::Script { src: TAILWIND_CDN }
        Router::<Route> {}
    }
}
