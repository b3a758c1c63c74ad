use config::ConfigError;
use serde::Deserialize;
use serde::Serialize;

use crate::Error;
use crate::Result;

/// Sizing parameters for the concurrent key-value store
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StoreConfig {
    /// Number of entries to pre-allocate capacity for
    /// Zero starts the map empty and grows on demand
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,

    /// Number of internal shards backing the map
    /// Zero picks the per-CPU default; any other value must be a power of two
    /// of at least 2
    #[serde(default = "default_shard_amount")]
    pub shard_amount: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            initial_capacity: default_initial_capacity(),
            shard_amount: default_shard_amount(),
        }
    }
}

impl StoreConfig {
    /// Validates store sizing parameters
    pub fn validate(&self) -> Result<()> {
        if self.shard_amount != 0
            && (self.shard_amount < 2 || !self.shard_amount.is_power_of_two())
        {
            return Err(Error::Config(ConfigError::Message(
                "shard_amount must be 0 (auto) or a power of two of at least 2".into(),
            )));
        }

        Ok(())
    }
}

fn default_initial_capacity() -> usize {
    0
}
fn default_shard_amount() -> usize {
    0
}
