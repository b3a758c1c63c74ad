use std::sync::Arc;

use tokio::sync::watch;
use tracing::trace;

/// Single-use countdown barrier for one processing round.
///
/// Created together with exactly `count` [`CompletionSignal`]s. The round
/// driver hands one signal to each dispatched task and then waits; the
/// barrier releases once every signal has fired. `wait` consumes the
/// barrier, so a finished round cannot be waited on again.
pub(crate) struct CompletionBarrier {
    remaining: watch::Receiver<usize>,
}

/// Completion token for a single dispatched task.
///
/// Fires exactly once, when dropped. Dropping is what releases it, so a
/// task that fails or panics mid-way still counts against the barrier.
pub(crate) struct CompletionSignal {
    remaining: Arc<watch::Sender<usize>>,
}

impl CompletionBarrier {
    /// Build a barrier expecting `count` completions, along with the
    /// matching signals.
    ///
    /// The expected count is fixed here. Work discovered after this point
    /// belongs to a later round and never extends this one.
    pub(crate) fn new(count: usize) -> (Self, Vec<CompletionSignal>) {
        let (tx, rx) = watch::channel(count);
        let tx = Arc::new(tx);
        let signals = (0..count)
            .map(|_| CompletionSignal {
                remaining: Arc::clone(&tx),
            })
            .collect();

        (Self { remaining: rx }, signals)
    }

    /// Wait until every signal has fired.
    ///
    /// Returns immediately when the barrier was built with `count == 0`.
    pub(crate) async fn wait(mut self) {
        // The sender side cannot close before the count reaches zero: every
        // signal decrements on drop, and the last drop writes 0 first.
        let _ = self.remaining.wait_for(|remaining| *remaining == 0).await;
    }

    /// Number of signals still outstanding
    ///
    /// This is primarily for testing purposes.
    #[cfg(test)]
    pub(crate) fn remaining(&self) -> usize {
        *self.remaining.borrow()
    }
}

impl Drop for CompletionSignal {
    fn drop(&mut self) {
        self.remaining.send_modify(|remaining| {
            *remaining = remaining.saturating_sub(1);
        });
        trace!("completion signal fired");
    }
}
