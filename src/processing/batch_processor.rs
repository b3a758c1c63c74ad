use std::sync::Arc;
use std::time::Instant;

use autometrics::autometrics;
use nanoid::nanoid;
use tracing::debug;
use tracing::info;
use tracing::warn;

use super::barrier::CompletionBarrier;
use super::barrier::CompletionSignal;
use super::EntryProcessor;
use crate::metrics::PROCESSED_ENTRIES_METRIC;
use crate::metrics::PROCESSING_ROUNDS_METRIC;
use crate::metrics::ROUND_DURATION_MS_METRIC;
use crate::metrics::ROUND_SIZE_METRIC;
use crate::ConcurrentStore;
use crate::Entry;
use crate::API_SLO;

/// Work item for one dispatched task
///
/// Pairs the captured entry with the completion token its task releases.
struct EntryTask {
    entry: Entry,
    completion: CompletionSignal,
}

/// Drives barrier-gated processing rounds over a shared store
///
/// The processor holds no entries of its own. Each round captures the
/// store's current contents, dispatches one task per captured entry onto
/// the runtime and returns once every task has finished.
///
/// # Example
///
/// ```ignore
/// let store = Arc::new(ConcurrentStore::new());
/// let processor = BatchProcessor::new(
///     Arc::clone(&store),
///     Arc::new(SimulatedEntryProcessor::new(Duration::from_millis(10))),
/// );
///
/// store.add(1, "Data1".to_string());
/// processor.process_all().await;
/// ```
pub struct BatchProcessor<P>
where P: EntryProcessor
{
    store: Arc<ConcurrentStore>,
    entry_processor: Arc<P>,
}

impl<P> BatchProcessor<P>
where P: EntryProcessor
{
    pub fn new(
        store: Arc<ConcurrentStore>,
        entry_processor: Arc<P>,
    ) -> Self {
        Self {
            store,
            entry_processor,
        }
    }

    /// Run one processing round over the store's current contents.
    ///
    /// Captures a snapshot, dispatches one task per captured entry and
    /// waits until all of them have completed. Mutations made to the store
    /// while the round runs are picked up by the next round, never by this
    /// one. An empty store returns immediately.
    #[autometrics(objective = API_SLO)]
    pub async fn process_all(&self) {
        let started_at = Instant::now();
        let snapshot = self.store.snapshot();
        let total = snapshot.len();

        if total == 0 {
            debug!("store is empty, nothing to dispatch");
            return;
        }

        let round_id = nanoid!(8);
        PROCESSING_ROUNDS_METRIC.inc();
        ROUND_SIZE_METRIC.observe(total as f64);
        info!(%round_id, total, "dispatching processing round");

        let (barrier, signals) = CompletionBarrier::new(total);
        for (entry, completion) in snapshot.into_iter().zip(signals) {
            let task = EntryTask { entry, completion };
            let processor = Arc::clone(&self.entry_processor);
            let round_id = round_id.clone();
            tokio::spawn(async move {
                run_entry_task(processor, &round_id, task).await;
            });
        }

        barrier.wait().await;

        let elapsed_ms = started_at.elapsed().as_millis() as f64;
        ROUND_DURATION_MS_METRIC.observe(elapsed_ms);
        info!(%round_id, total, elapsed_ms, "processing round completed");
    }
}

/// Execute one dispatched task and account for its outcome.
///
/// The completion signal travels inside `task` and fires when this frame
/// drops it, so a processor failure or panic still releases the barrier.
async fn run_entry_task<P>(
    processor: Arc<P>,
    round_id: &str,
    task: EntryTask,
) where
    P: EntryProcessor,
{
    let EntryTask { entry, completion } = task;

    match processor.process(&entry).await {
        Ok(()) => {
            PROCESSED_ENTRIES_METRIC.with_label_values(&["ok"]).inc();
        }
        Err(e) => {
            warn!(round_id, key = entry.key, error = %e, "entry processing failed");
            PROCESSED_ENTRIES_METRIC.with_label_values(&["failed"]).inc();
        }
    }

    drop(completion);
}
