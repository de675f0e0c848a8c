//! Bootstrap metrics.
//!
//! # Metrics
//! - `bootstrap_fetch_total` (counter): document fetches by document, outcome
//! - `bootstrap_fetch_duration_seconds` (histogram): fetch latency by document
//! - `bootstrap_runs_total` (counter): completed runs by outcome
//!
//! No exporter is installed here; without a host-installed recorder these
//! calls are no-ops.

use std::time::Instant;

/// Document label for the app config fetch.
pub const APP_CONFIG_DOCUMENT: &str = "app_config";
/// Document label for the user configuration fetch.
pub const USER_CONFIGURATION_DOCUMENT: &str = "user_configuration";

/// Record a single document fetch.
pub fn record_fetch(document: &'static str, success: bool, start: Instant) {
    let outcome = if success { "success" } else { "failure" };
    metrics::counter!("bootstrap_fetch_total", "document" => document, "outcome" => outcome)
        .increment(1);
    metrics::histogram!("bootstrap_fetch_duration_seconds", "document" => document)
        .record(start.elapsed().as_secs_f64());
}

/// Record the end of a bootstrap run; `outcome` is `"success"` or an error kind.
pub fn record_run(outcome: &'static str) {
    metrics::counter!("bootstrap_runs_total", "outcome" => outcome).increment(1);
}
