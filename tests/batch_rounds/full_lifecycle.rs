use batchkv::Entry;
use tracing::info;

use crate::common::build_pipeline;

/// Walk a store and its processor through a full deployment-shaped run.
///
/// Scenario:
/// 1. Populate 20 entries and process them all
/// 2. Remove half the keys and process the remainder
/// 3. Clear the store; the next round dispatches nothing
/// 4. Rebuild a small working set and process it
/// 5. Update a value in place and verify the next round sees it
#[tokio::test]
async fn test_full_lifecycle() {
    crate::enable_logger();

    let (store, recorder, processor) = build_pipeline();

    // Test 1: full batch
    info!("Test 1: processing the initial working set");
    for key in 0..20 {
        assert!(store.add(key, format!("Data{}", key)));
    }
    processor.process_all().await;
    assert_eq!(recorder.processed_count(), 20);
    assert_eq!(store.len(), 20);
    assert!(store.contains_key(10));

    // Test 2: shrink the working set and reprocess
    info!("Test 2: processing after removals");
    recorder.reset();
    for key in 0..=10 {
        assert!(store.remove(key));
    }
    processor.process_all().await;
    assert_eq!(recorder.processed_count(), 9);
    assert_eq!(store.len(), 9);
    assert!(!store.contains_key(10));

    // Test 3: an empty store dispatches nothing
    info!("Test 3: empty store round");
    recorder.reset();
    store.clear();
    assert_eq!(store.len(), 0);
    processor.process_all().await;
    assert_eq!(recorder.processed_count(), 0);

    // Test 4: rebuild a small working set
    info!("Test 4: processing the rebuilt working set");
    store.add(20, "Data20".to_string());
    store.add(21, "Data21".to_string());
    processor.process_all().await;
    assert_eq!(recorder.processed_count(), 2);

    // Test 5: an in-place update flows into the next round
    info!("Test 5: update flows into the next round");
    recorder.reset();
    let previous = store.update(20, "UpdatedData20".to_string());
    assert_eq!(previous.as_deref(), Some("Data20"));
    processor.process_all().await;
    assert_eq!(
        recorder.processed(),
        vec![
            Entry {
                key: 20,
                value: "UpdatedData20".to_string(),
            },
            Entry {
                key: 21,
                value: "Data21".to_string(),
            },
        ]
    );
}
