//! Share action
//!
//! Builds a one-line event summary and hands it to the platform: the
//! native share sheet when there is one, otherwise the clipboard followed
//! by a blocking acknowledgment. One best-effort attempt per call.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::EventConfig;

/// Acknowledgment shown after a successful clipboard copy
pub const COPIED_MESSAGE: &str = "Event details copied to clipboard!";

/// Acknowledgment shown when the clipboard write fails
pub const COPY_FAILED_MESSAGE: &str = "Couldn't copy event details to the clipboard.";

/// Errors reported by platform capabilities
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    #[error("Cancelled by user")]
    Cancelled,

    #[error("Capability unavailable")]
    Unavailable,

    #[error("Platform call failed: {0}")]
    Failed(String),
}

/// Content handed to a native share sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Platform capabilities the share action consumes
#[allow(async_fn_in_trait)]
pub trait SharePlatform {
    /// Location of the current page, if known
    async fn page_url(&self) -> Option<String>;

    /// Whether a native share sheet is available
    async fn supports_native_share(&self) -> bool;

    async fn native_share(&self, payload: &SharePayload) -> Result<(), PlatformError>;

    async fn write_clipboard(&self, text: &str) -> Result<(), PlatformError>;

    /// Show a message and wait for the user to dismiss it
    async fn acknowledge(&self, message: &str);
}

/// Where a share request goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareTarget {
    NativeShare,
    ClipboardFallback,
}

impl ShareTarget {
    /// Pick the target from the platform's capabilities
    pub async fn detect<P: SharePlatform>(platform: &P) -> Self {
        if platform.supports_native_share().await {
            Self::NativeShare
        } else {
            Self::ClipboardFallback
        }
    }
}

/// What happened to a share request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Native share sheet completed
    Shared,
    /// Native share cancelled or failed; nothing shown to the user
    Dismissed,
    /// Summary copied and acknowledged
    Copied,
    /// Clipboard write failed and the user was told
    CopyFailed,
}

/// `"{name} — {date} @ {venue}. Doors {time}. Tickets: {url}"`
pub fn share_summary(event: &EventConfig) -> String {
    format!(
        "{} — {} @ {}. Doors {}. Tickets: {}",
        event.name,
        event.long_date(),
        event.venue_name,
        event.doors_time_or_raw(),
        event.ticket_url
    )
}

/// Clipboard text: the summary, then the page URL on its own line
pub fn clipboard_text(summary: &str, page_url: Option<&str>) -> String {
    match page_url {
        Some(url) => format!("{summary}\n{url}"),
        None => summary.to_string(),
    }
}

/// Share the event through whatever the platform offers
pub async fn share_event<P: SharePlatform>(event: &EventConfig, platform: &P) -> ShareOutcome {
    let summary = share_summary(event);
    let page_url = platform.page_url().await;
    let target = ShareTarget::detect(platform).await;

    debug!(?target, "Sharing event");

    match target {
        ShareTarget::NativeShare => {
            let payload = SharePayload {
                title: event.name.clone(),
                text: summary,
                url: page_url,
            };

            match platform.native_share(&payload).await {
                Ok(()) => {
                    info!("Event shared via native share sheet");
                    ShareOutcome::Shared
                }
                Err(e) => {
                    debug!("Native share not completed: {}", e);
                    ShareOutcome::Dismissed
                }
            }
        }
        ShareTarget::ClipboardFallback => {
            let text = clipboard_text(&summary, page_url.as_deref());

            match platform.write_clipboard(&text).await {
                Ok(()) => {
                    info!("Event details copied to clipboard");
                    platform.acknowledge(COPIED_MESSAGE).await;
                    ShareOutcome::Copied
                }
                Err(e) => {
                    warn!("Clipboard write failed: {}", e);
                    platform.acknowledge(COPY_FAILED_MESSAGE).await;
                    ShareOutcome::CopyFailed
                }
            }
        }
    }
}
