use tracing::info;

use crate::common::build_pipeline;

/// Overlapping rounds over one store each run to completion.
///
/// Every call builds its own barrier, so two rounds launched at once must
/// not interfere with each other's completion accounting.
///
/// Scenario:
/// 1. Populate a store shared by one processor
/// 2. Launch two rounds concurrently
/// 3. Both rounds complete and every key is processed once per round
#[tokio::test]
async fn test_overlapping_rounds() {
    crate::enable_logger();

    let (store, recorder, processor) = build_pipeline();
    for key in 0..10 {
        store.add(key, format!("Data{}", key));
    }

    info!("launching two rounds at once");
    tokio::join!(processor.process_all(), processor.process_all());

    assert_eq!(recorder.processed_count(), 20);
    let processed = recorder.processed();
    for key in 0..10 {
        assert_eq!(
            processed.iter().filter(|entry| entry.key == key).count(),
            2,
            "key {} should be processed once per round",
            key
        );
    }
}
