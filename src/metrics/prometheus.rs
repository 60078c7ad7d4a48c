use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus HTTP exporter on the given port.
/// After this call, any metrics recorded via the `metrics` crate
/// macros (counter!, histogram!) are automatically exported at /metrics.
/// Without it the macros are no-ops.
pub fn init_metrics_server(port: u16) -> anyhow::Result<()> {
    PrometheusBuilder::new()
        .with_http_listener(([0, 0, 0, 0], port))
        .install()
        .map_err(|e| anyhow::anyhow!("failed to start Prometheus metrics server: {}", e))
}

// ── Feed metrics ─────────────────────────────────────────────────

pub fn record_fetch(outcome: &'static str) {
    counter!("feed_fetches_total", "outcome" => outcome).increment(1);
}

pub fn record_fetch_latency(latency_ms: f64) {
    histogram!("feed_fetch_latency_ms").record(latency_ms);
}

// ── Change detection metrics ─────────────────────────────────────

pub fn record_price_check(result: &'static str) {
    counter!("price_checks_total", "result" => result).increment(1);
}

// ── Notification metrics ─────────────────────────────────────────

pub fn record_notification(outcome: &'static str) {
    counter!("notifications_total", "outcome" => outcome).increment(1);
}
