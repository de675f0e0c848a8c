//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Bootstrap steps produce:
//!     → logging.rs (structured log events, one span per run)
//!     → metrics.rs (fetch counters and latencies)
//! ```
//!
//! # Design Decisions
//! - Each run carries a bootstrap_id on its span
//! - Metrics go through the `metrics` facade; exporting is the host's choice

pub mod logging;
pub mod metrics;
