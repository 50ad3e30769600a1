use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize dotenvy
pub fn init_env() {
    dotenvy::dotenv().ok();
}

/// Initialize tracing with optional file logging
///
/// Console output goes to stderr so it does not interleave with the
/// countdown written to stdout. File logging is off unless
/// `ENABLE_FILE_LOGGING` is `true` or `1`.
/// The returned guard must be kept alive so buffered lines are flushed.
pub fn init_tracing(service_name: &str) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let default_filter = format!("warn,rocktober_core=info,{}=info", service_name);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    if file_logging_enabled(std::env::var("ENABLE_FILE_LOGGING").ok().as_deref()) {
        // If LOG_DIR is set, use it. Default to "logs/app"
        let log_dir = std::env::var("LOG_DIR").unwrap_or_else(|_| "logs/app".to_string());

        let now = chrono::Local::now().format("%y-%m-%d-%H-%M-%S").to_string();
        let filename = format!("rocktober-{}.log.{}.jsonl", service_name, now);

        let file_appender = tracing_appender::rolling::never(&log_dir, filename);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let file_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(non_blocking)
            .json();

        registry.with(file_layer).init();

        Some(guard)
    } else {
        registry.init();
        None
    }
}

fn file_logging_enabled(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.eq_ignore_ascii_case("true") || v == "1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_logging_flag() {
        assert!(!file_logging_enabled(None));
        assert!(!file_logging_enabled(Some("")));
        assert!(file_logging_enabled(Some("true")));
        assert!(file_logging_enabled(Some("TRUE")));
        assert!(file_logging_enabled(Some("1")));
        assert!(!file_logging_enabled(Some("false")));
        assert!(!file_logging_enabled(Some("FALSE")));
        assert!(!file_logging_enabled(Some("0")));
    }
}
