use config::ConfigError;
use serde::Deserialize;
use serde::Serialize;

use crate::Error;
use crate::Result;

/// Worker parameters for the batch processing engine
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProcessorConfig {
    /// Simulated per-entry work duration (milliseconds)
    #[serde(default = "default_work_delay")]
    pub work_delay_ms: u64,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            work_delay_ms: default_work_delay(),
        }
    }
}

impl ProcessorConfig {
    /// Validates processing worker parameters
    pub fn validate(&self) -> Result<()> {
        if self.work_delay_ms < 1 {
            return Err(Error::Config(ConfigError::Message(
                "work_delay_ms must be at least 1ms".into(),
            )));
        }

        Ok(())
    }
}

// in ms
fn default_work_delay() -> u64 {
    3000
}
