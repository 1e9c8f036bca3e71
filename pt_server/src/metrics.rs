//! Prometheus metrics for the tracker.
//!
//! Exported only when `METRICS_BIND` is set. Recording is a no-op until an
//! exporter is installed, so handlers record unconditionally.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use pt_server::metrics;
//! use std::net::SocketAddr;
//!
//! let addr: SocketAddr = "127.0.0.1:9090".parse().unwrap();
//! metrics::init_metrics(addr).unwrap();
//!
//! metrics::cards_assigned_total("dealer");
//! metrics::game_resets_total();
//! ```

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;

/// Initialize Prometheus metrics exporter.
///
/// Metrics will be available at `http://<addr>/metrics`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), String> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| format!("Failed to install Prometheus exporter: {}", e))
}

// ============================================================================
// Table Metrics
// ============================================================================

/// Record a dealt card, labelled by seat role.
pub fn cards_assigned_total(role: &str) {
    metrics::counter!("cards_assigned_total", "role" => role.to_string()).increment(1);
}

/// Record an archived table.
pub fn game_resets_total() {
    metrics::counter!("game_resets_total").increment(1);
}

/// Record a roster pull (`ok`, `stale` or `error`).
pub fn roster_sync_total(outcome: &str) {
    metrics::counter!("roster_sync_total", "outcome" => outcome.to_string()).increment(1);
}
