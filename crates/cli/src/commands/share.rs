use anyhow::Result;
use rocktober_core::{EventConfig, ShareOutcome, share_event};

use crate::terminal::TerminalPlatform;

/// Copy the event summary to the terminal clipboard
pub async fn run(event: &EventConfig, page_url: Option<String>, wait: bool) -> Result<()> {
    let platform = TerminalPlatform::new(page_url, wait);

    match share_event(event, &platform).await {
        ShareOutcome::CopyFailed => anyhow::bail!("Clipboard write failed"),
        outcome => {
            tracing::debug!(?outcome, "Share finished");
            Ok(())
        }
    }
}
