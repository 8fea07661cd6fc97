/// Initialize structured logging with tracing
/// This should be called once at application startup
pub fn init_logging() {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .json(), // JSON output for structured logging
    );

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global tracing subscriber");

    tracing::info!("Structured logging initialized");
}

/// Log the outcome of a platform API call with its latency
pub fn log_platform_call(platform: &str, endpoint: &str, success: bool, latency_ms: u64) {
    if success {
        tracing::info!(
            platform = platform,
            endpoint = endpoint,
            latency_ms = latency_ms,
            "Platform call"
        );
    } else {
        tracing::warn!(
            platform = platform,
            endpoint = endpoint,
            latency_ms = latency_ms,
            "Platform call failed"
        );
    }
}

/// Log a completed sync pass over all configured handles
pub fn log_sync_result(leetcode_ok: bool, codeforces_ok: bool) {
    tracing::info!(
        leetcode_ok = leetcode_ok,
        codeforces_ok = codeforces_ok,
        "Handle sync finished"
    );
}
