use batchkv::{get_metrics_body, init_metrics};
use batchkv::{BatchProcessor, ConcurrentStore, SimulatedEntryProcessor};
use batchkv::{Result, Settings};
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> Result<()> {
    let settings = Settings::new()?.validate()?;

    // Initializing Logs
    init_observability();

    // Initializing Metrics
    init_metrics();

    info!("Configuration loaded: {:?}", settings);

    // Build the store and the processing pipeline
    let store = Arc::new(ConcurrentStore::with_config(&settings.store));
    let entry_processor = Arc::new(SimulatedEntryProcessor::from_config(&settings.processor));
    let processor = BatchProcessor::new(store.clone(), entry_processor);

    // Populate the store and process the full working set
    for key in 0..20 {
        store.add(key, format!("Data{}", key));
    }
    processor.process_all().await;
    info!("count after first round: {}", store.len());
    info!("contains key 10: {}", store.contains_key(10));

    // Shrink the working set and process what remains
    for key in 0..=10 {
        store.remove(key);
    }
    processor.process_all().await;
    info!("count after removals: {}", store.len());
    info!("contains key 10: {}", store.contains_key(10));

    // An empty store makes the round return immediately
    store.clear();
    info!("count after clear: {}", store.len());
    processor.process_all().await;

    // Rebuild a small working set
    store.add(20, "Data20".to_string());
    store.add(21, "Data21".to_string());
    info!("count after repopulation: {}", store.len());
    processor.process_all().await;

    // Overwrite in place; the next round sees the new value
    store.update(20, "UpdatedData20".to_string());
    processor.process_all().await;

    debug!("metrics dump:\n{}", get_metrics_body());
    info!("All processing rounds completed.");

    println!("Exiting program.");
    Ok(())
}

pub fn init_observability() {
    let base_subscriber = tracing_subscriber::fmt::layer()
        .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")));
    tracing_subscriber::registry().with(base_subscriber).init();
}
