//! Barrier-gated batch processing over the concurrent store.
//!
//! Each processing round fans one task per captured entry out onto the
//! shared runtime and fans back in through a single-use countdown barrier:
//!
//! ```text
//! process_all():
//!   store.snapshot() -> [Entry x N] -> CompletionBarrier::new(N)
//!            |
//!            +-> tokio::spawn(run_entry_task) x N, one CompletionSignal each
//!            |       EntryProcessor::process(entry)
//!            |       signal fires when the task's CompletionSignal drops
//!            v
//!   barrier.wait() until all N signals fired, then the round returns
//! ```
//!
//! A fresh barrier is minted for every round. Finished rounds leave no
//! state behind; the next round re-reads the store as it is by then.
mod barrier;
mod batch_processor;
mod simulated_entry_processor;

pub use batch_processor::*;
pub use simulated_entry_processor::*;


use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::Entry;
use crate::Result;

/// Per-entry work unit executed by [`BatchProcessor`] tasks
///
/// Implementations must tolerate concurrent calls; a processing round runs
/// one call per captured entry, each in its own task.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait EntryProcessor: Send + Sync + 'static {
    /// Process a single captured entry.
    ///
    /// A failure is logged and counted by the round driver; it never stops
    /// the rest of the round.
    async fn process(
        &self,
        entry: &Entry,
    ) -> Result<()>;
}
