use std::time::Duration;

use async_trait::async_trait;
use autometrics::autometrics;
use tokio::time::sleep;
use tracing::debug;

use super::EntryProcessor;
use crate::Entry;
use crate::ProcessorConfig;
use crate::Result;
use crate::API_SLO;

/// [`EntryProcessor`] that stands in for real per-entry work.
///
/// Sleeps for a fixed duration per entry and always succeeds. The demo
/// binary drives its rounds with this; tests shrink the delay to keep
/// rounds fast.
pub struct SimulatedEntryProcessor {
    work_delay: Duration,
}

impl SimulatedEntryProcessor {
    pub fn new(work_delay: Duration) -> Self {
        Self { work_delay }
    }

    /// Build from a validated [`ProcessorConfig`]
    pub fn from_config(config: &ProcessorConfig) -> Self {
        Self::new(Duration::from_millis(config.work_delay_ms))
    }

    #[cfg(test)]
    pub(crate) fn work_delay(&self) -> Duration {
        self.work_delay
    }
}

#[async_trait]
impl EntryProcessor for SimulatedEntryProcessor {
    #[autometrics(objective = API_SLO)]
    async fn process(
        &self,
        entry: &Entry,
    ) -> Result<()> {
        debug!(key = entry.key, value = %entry.value, "processing entry");
        sleep(self.work_delay).await;
        Ok(())
    }
}
