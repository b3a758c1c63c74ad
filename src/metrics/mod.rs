use std::sync::Once;

use autometrics::prometheus_exporter;
use lazy_static::lazy_static;
use prometheus::exponential_buckets;
use prometheus::Histogram;
use prometheus::HistogramOpts;
use prometheus::IntCounter;
use prometheus::IntCounterVec;
use prometheus::Opts;
use prometheus::Registry;
use tracing::warn;


lazy_static! {
    pub static ref PROCESSING_ROUNDS_METRIC: IntCounter = IntCounter::new(
        "processing_rounds",
        "Number of processing rounds dispatched"
    )
    .expect("metric can not be created");

    pub static ref PROCESSED_ENTRIES_METRIC: IntCounterVec = IntCounterVec::new(
        Opts::new("processed_entries", "Processed entries partitioned by result"),
        &["result"]
    )
    .expect("Should succeed to create metric");

    pub static ref ROUND_SIZE_METRIC: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "processing_round_size",
            "Histogram of entries dispatched per processing round"
        )
        .buckets(exponential_buckets(1.0, 2.0, 12).unwrap())
    )
    .expect("metric can not be created");

    pub static ref ROUND_DURATION_MS_METRIC: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "processing_round_duration_ms",
            "Histogram of processing round duration in ms"
        )
        .buckets(exponential_buckets(1.0, 2.0, 16).unwrap())
    )
    .expect("metric can not be created");

    pub static ref REGISTRY: Registry = Registry::new();
}

static METRICS_INIT: Once = Once::new();

/// Register the crate's collectors into `registry`.
///
/// Registering the same collector into one registry twice panics; use
/// [`init_metrics`] for the process-wide registry.
pub fn register_custom_metrics(registry: &Registry) {
    registry
        .register(Box::new(PROCESSING_ROUNDS_METRIC.clone()))
        .expect("collector can be registered");
    registry
        .register(Box::new(PROCESSED_ENTRIES_METRIC.clone()))
        .expect("collector can be registered");
    registry
        .register(Box::new(ROUND_SIZE_METRIC.clone()))
        .expect("collector can be registered");
    registry
        .register(Box::new(ROUND_DURATION_MS_METRIC.clone()))
        .expect("collector can be registered");
}

/// One-time setup of the process-wide metrics pipeline.
///
/// Initializes the autometrics exporter and registers the custom
/// collectors into the process-wide registry. Safe to call repeatedly.
pub fn init_metrics() {
    METRICS_INIT.call_once(|| {
        prometheus_exporter::init();
        register_custom_metrics(&REGISTRY);
    });
}

/// Export metrics for Prometheus to scrape
pub fn get_metrics_body() -> String {
    use prometheus::Encoder;

    init_metrics();

    let encoder = prometheus::TextEncoder::new();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&REGISTRY.gather(), &mut buffer) {
        warn!("could not encode custom metrics: {}", e);
    }
    let mut body = match String::from_utf8(buffer) {
        Ok(v) => v,
        Err(e) => {
            warn!("custom metrics could not be from_utf8'd: {}", e);
            String::default()
        }
    };

    body.push_str(&prometheus_exporter::encode_http_response().into_body());
    body
}
