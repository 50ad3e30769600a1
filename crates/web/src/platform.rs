//! Browser share capabilities
//!
//! Each capability is a small JS snippet run through Dioxus's evaluator.
//! Values are embedded as JSON literals; snippets report failures as
//! strings instead of throwing.

use dioxus::prelude::*;
use rocktober_core::share::{PlatformError, SharePayload, SharePlatform};
use serde::de::DeserializeOwned;

const OK: &str = "ok";
const CANCELLED: &str = "cancelled";

/// Share platform backed by `navigator.share`, `navigator.clipboard` and `alert`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPlatform;

async fn run_js<T: DeserializeOwned>(js: &str) -> Result<T, PlatformError> {
    document::eval(js)
        .join::<T>()
        .await
        .map_err(|e| PlatformError::Failed(format!("{e:?}")))
}

fn js_literal<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, PlatformError> {
    serde_json::to_string(value).map_err(|e| PlatformError::Failed(e.to_string()))
}

fn status_to_result(status: &str) -> Result<(), PlatformError> {
    match status {
        OK => Ok(()),
        CANCELLED => Err(PlatformError::Cancelled),
        other => Err(PlatformError::Failed(other.to_string())),
    }
}

/// Wrap a statement so the snippet returns `"ok"`, `"cancelled"` or the error text
fn guarded(statement: &str) -> String {
    format!(
        r#"try {{
    {statement}
    return "{OK}";
}} catch (e) {{
    return (e && e.name === "AbortError") ? "{CANCELLED}" : String(e);
}}"#
    )
}

fn share_script(payload: &SharePayload) -> Result<String, PlatformError> {
    Ok(guarded(&format!(
        "await navigator.share({});",
        js_literal(payload)?
    )))
}

fn clipboard_script(text: &str) -> Result<String, PlatformError> {
    Ok(guarded(&format!(
        "await navigator.clipboard.writeText({});",
        js_literal(text)?
    )))
}

impl SharePlatform for BrowserPlatform {
    async fn page_url(&self) -> Option<String> {
        run_js::<String>("return window.location.href;").await.ok()
    }

    async fn supports_native_share(&self) -> bool {
        run_js::<bool>("return typeof navigator.share === \"function\";")
            .await
            .unwrap_or(false)
    }

    async fn native_share(&self, payload: &SharePayload) -> Result<(), PlatformError> {
        let status = run_js::<String>(&share_script(payload)?).await?;
        status_to_result(&status)
    }

    async fn write_clipboard(&self, text: &str) -> Result<(), PlatformError> {
        let status = run_js::<String>(&clipboard_script(text)?).await?;
        status_to_result(&status)
    }

    async fn acknowledge(&self, message: &str) {
        let Ok(message) = js_literal(message) else {
            return;
        };
        if let Err(e) = run_js::<bool>(&format!("alert({message}); return true;")).await {
            tracing::warn!("Failed to show acknowledgment: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_to_result() {
        assert_eq!(status_to_result("ok"), Ok(()));
        assert_eq!(status_to_result("cancelled"), Err(PlatformError::Cancelled));
        assert_eq!(
            status_to_result("NotAllowedError: denied"),
            Err(PlatformError::Failed("NotAllowedError: denied".to_string()))
        );
    }

    #[test]
    fn test_clipboard_script_escapes_text() {
        let script = clipboard_script("line \"one\"\nline two").unwrap();
        assert!(script.contains(r#"navigator.clipboard.writeText("line \"one\"\nline two");"#));
        assert!(script.contains(r#"return "ok";"#));
    }

    #[test]
    fn test_share_script_embeds_payload() {
        let payload = SharePayload {
            title: "Rocktober Fest 2025".to_string(),
            text: "summary".to_string(),
            url: None,
        };
        let script = share_script(&payload).unwrap();
        assert!(script.contains(
            r#"navigator.share({"title":"Rocktober Fest 2025","text":"summary"});"#
        ));
    }
}
