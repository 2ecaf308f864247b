//! Prometheus metrics for upstream fetches and page renders.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use tracing::debug;

// === Metric Name Constants ===

/// Upstream fetch latency metric name.
pub const METRIC_UPSTREAM_FETCH_LATENCY: &str = "upstream_fetch_latency_ms";
/// Upstream fetches counter metric name.
pub const METRIC_UPSTREAM_FETCHES: &str = "upstream_fetches_total";
/// Upstream fetch failures counter metric name.
pub const METRIC_UPSTREAM_FETCH_FAILURES: &str = "upstream_fetch_failures_total";
/// Shaped records counter metric name.
pub const METRIC_RECORDS_SHAPED: &str = "records_shaped_total";
/// Rendered pages counter metric name.
pub const METRIC_PAGES_RENDERED: &str = "pages_rendered_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_histogram!(
        METRIC_UPSTREAM_FETCH_LATENCY,
        "Upstream inspection API latency in milliseconds"
    );

    describe_counter!(
        METRIC_UPSTREAM_FETCHES,
        "Total number of upstream inspection API requests"
    );
    describe_counter!(
        METRIC_UPSTREAM_FETCH_FAILURES,
        "Total number of upstream requests that failed at the transport level"
    );
    describe_counter!(
        METRIC_RECORDS_SHAPED,
        "Total number of records surviving filtering"
    );
    describe_counter!(METRIC_PAGES_RENDERED, "Total number of pages rendered");

    debug!("Metrics initialized");
}

/// Install the Prometheus exporter with its own HTTP listener.
pub fn install_exporter(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()
}

/// Record upstream fetch latency.
pub fn record_upstream_fetch_latency(start: Instant) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_UPSTREAM_FETCH_LATENCY).record(latency_ms);
}

/// Increment upstream fetches counter.
pub fn inc_upstream_fetches() {
    counter!(METRIC_UPSTREAM_FETCHES).increment(1);
}

/// Increment upstream fetch failures counter.
pub fn inc_upstream_fetch_failures() {
    counter!(METRIC_UPSTREAM_FETCH_FAILURES).increment(1);
}

/// Add to the shaped records counter.
pub fn inc_records_shaped(count: usize) {
    counter!(METRIC_RECORDS_SHAPED).increment(count as u64);
}

/// Increment pages rendered counter.
pub fn inc_pages_rendered() {
    counter!(METRIC_PAGES_RENDERED).increment(1);
}
