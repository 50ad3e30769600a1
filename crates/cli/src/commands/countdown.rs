use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use rocktober_core::{CountdownClock, EventConfig};
use rocktober_shared::Ticker;

use crate::render::countdown_line;

fn redraw(clock: &CountdownClock) {
    print!("\r\x1b[2K{}", countdown_line(&clock.countdown()));
    let _ = std::io::stdout().flush();
}

/// Show the countdown to doors, refreshing every `period` until Ctrl+C
pub async fn run(event: &EventConfig, period: Duration, once: bool) -> Result<()> {
    let target = event.doors_instant()?;
    let mut clock = CountdownClock::new(target, Utc::now());

    if once {
        println!("{}", countdown_line(&clock.countdown()));
        return Ok(());
    }

    println!("{} — doors {}", event.name, event.doors_time_or_raw());
    redraw(&clock);

    // The tick callback owns the clock for the lifetime of the ticker
    let ticker = Ticker::start(period, move || {
        clock.sample(Utc::now());
        redraw(&clock);
    });

    tokio::signal::ctrl_c().await?;
    ticker.stop().await;
    println!();

    tracing::debug!("Countdown view closed");
    Ok(())
}
