use tracing::info;

use crate::common::build_pipeline;

/// Two pipelines over separate stores must not observe each other.
///
/// Scenario:
/// 1. Build two stores, each wired to its own processor
/// 2. Populate them with disjoint key ranges
/// 3. Run both rounds concurrently
/// 4. Verify each recorder saw only its own store's entries
#[tokio::test]
async fn test_independent_pipelines() {
    crate::enable_logger();

    let (left_store, left_recorder, left_processor) = build_pipeline();
    let (right_store, right_recorder, right_processor) = build_pipeline();

    for key in 0..5 {
        left_store.add(key, format!("Left{}", key));
    }
    for key in 100..108 {
        right_store.add(key, format!("Right{}", key));
    }

    info!("running both pipelines concurrently");
    tokio::join!(left_processor.process_all(), right_processor.process_all());

    let left = left_recorder.processed();
    let right = right_recorder.processed();
    assert_eq!(left.len(), 5);
    assert_eq!(right.len(), 8);
    assert!(left
        .iter()
        .all(|entry| entry.key < 100 && entry.value.starts_with("Left")));
    assert!(right
        .iter()
        .all(|entry| entry.key >= 100 && entry.value.starts_with("Right")));
}
