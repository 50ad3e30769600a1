use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use rocktober_core::countdown::{Countdown, CountdownClock, pad2};
use rocktober_core::ticker::{TICK_PERIOD, run_periodic};

/// Labelled, zero-padded cells in display order
pub fn countdown_cells(countdown: &Countdown) -> Vec<(&'static str, String)> {
    countdown
        .units()
        .into_iter()
        .map(|(label, value)| (label, pad2(value)))
        .collect()
}

/// Live countdown to `target`, refreshed once per second while mounted
#[component]
pub fn CountdownPanel(target: DateTime<Utc>) -> Element {
    let mut clock = use_signal(|| CountdownClock::new(target, Utc::now()));

    // Dropped with the component, which stops the loop
    use_future(move || async move {
        run_periodic(TICK_PERIOD, gloo_timers::future::sleep, move || {
            clock.write().sample(Utc::now());
        })
        .await;
    });

    let cells = countdown_cells(&clock.read().countdown());

    rsx! {
        div { class: "mt-8 grid grid-cols-4 gap-2 sm:gap-4",
            for (label, value) in cells {
                div {
                    key: "{label}",
                    class: "rounded-2xl bg-white/10 px-4 py-3 backdrop-blur-sm",
                    div { class: "text-3xl font-bold tabular-nums text-orange-200", "{value}" }
                    div { class: "text-xs uppercase tracking-wide text-neutral-200", "{label}" }
                }
            }
        }
    }
}
