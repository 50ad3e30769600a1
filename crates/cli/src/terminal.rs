//! Share platform for a terminal session
//!
//! Terminals have no share sheet, so sharing always takes the clipboard
//! path. The clipboard is set with an OSC 52 escape sequence, which most
//! terminal emulators (and tmux with `set-clipboard on`) honor. When stdout
//! is not a terminal the sequence reaches no clipboard, so the write fails.

use std::io::{IsTerminal, Write};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rocktober_core::share::{PlatformError, SharePayload, SharePlatform};
use tokio::io::{AsyncBufReadExt, BufReader};

/// OSC 52 sequence asking the terminal to put `text` on the clipboard
pub fn osc52(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

/// Write the OSC 52 sequence for `text` to `out`
///
/// Fails with `Unavailable` unless `out` is attached to a terminal.
fn write_osc52(out: &mut impl Write, is_terminal: bool, text: &str) -> Result<(), PlatformError> {
    if !is_terminal {
        return Err(PlatformError::Unavailable);
    }

    out.write_all(osc52(text).as_bytes())
        .and_then(|()| out.flush())
        .map_err(|e| PlatformError::Failed(e.to_string()))
}

#[derive(Debug, Clone)]
pub struct TerminalPlatform {
    page_url: Option<String>,
    /// Wait for Enter after acknowledgments
    wait_for_enter: bool,
    stdout_is_terminal: bool,
}

impl TerminalPlatform {
    pub fn new(page_url: Option<String>, wait_for_enter: bool) -> Self {
        Self {
            page_url,
            wait_for_enter,
            stdout_is_terminal: std::io::stdout().is_terminal(),
        }
    }
}

impl SharePlatform for TerminalPlatform {
    async fn page_url(&self) -> Option<String> {
        self.page_url.clone()
    }

    async fn supports_native_share(&self) -> bool {
        false
    }

    async fn native_share(&self, _payload: &SharePayload) -> Result<(), PlatformError> {
        Err(PlatformError::Unavailable)
    }

    async fn write_clipboard(&self, text: &str) -> Result<(), PlatformError> {
        write_osc52(&mut std::io::stdout().lock(), self.stdout_is_terminal, text)
    }

    async fn acknowledge(&self, message: &str) {
        println!("{message}");

        if !self.wait_for_enter {
            return;
        }

        print!("Press Enter to continue...");
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        if let Err(e) = BufReader::new(tokio::io::stdin()).read_line(&mut line).await {
            tracing::warn!("Failed to read acknowledgment: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rocktober_core::{EventConfig, ShareOutcome, share_event};

    #[test]
    fn test_osc52_encoding() {
        assert_eq!(osc52("hi"), "\x1b]52;c;aGk=\x07");
    }

    #[test]
    fn test_osc52_multiline_utf8() {
        let seq = osc52("Rocktober — 5:00 PM\nhttps://example.com/");
        assert!(seq.starts_with("\x1b]52;c;"));
        assert!(seq.ends_with('\x07'));
        // Base64 payload carries no raw newlines or control bytes
        let payload = &seq[7..seq.len() - 1];
        assert!(payload.bytes().all(|b| b.is_ascii_alphanumeric() || b"+/=".contains(&b)));
        assert_eq!(
            STANDARD.decode(payload).unwrap(),
            "Rocktober — 5:00 PM\nhttps://example.com/".as_bytes()
        );
    }

    #[tokio::test]
    async fn test_terminal_has_no_native_share() {
        let platform = TerminalPlatform::new(None, false);
        assert!(!platform.supports_native_share().await);
        assert_eq!(
            platform
                .native_share(&SharePayload {
                    title: String::new(),
                    text: String::new(),
                    url: None,
                })
                .await,
            Err(PlatformError::Unavailable)
        );
    }

    #[tokio::test]
    async fn test_page_url_passthrough() {
        let platform = TerminalPlatform::new(Some("https://example.com/".to_string()), false);
        assert_eq!(
            platform.page_url().await.as_deref(),
            Some("https://example.com/")
        );
    }

    #[test]
    fn test_write_osc52_to_terminal() {
        let mut out = Vec::new();
        write_osc52(&mut out, true, "hi").unwrap();
        assert_eq!(out, b"\x1b]52;c;aGk=\x07");
    }

    #[test]
    fn test_write_osc52_without_terminal() {
        let mut out = Vec::new();
        assert_eq!(
            write_osc52(&mut out, false, "hi"),
            Err(PlatformError::Unavailable)
        );
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_share_to_redirected_stdout_reports_copy_failed() {
        let platform = TerminalPlatform {
            page_url: None,
            wait_for_enter: false,
            stdout_is_terminal: false,
        };

        assert_eq!(
            share_event(&EventConfig::rocktober(), &platform).await,
            ShareOutcome::CopyFailed
        );
    }
}
