//! Batch Processing Engine Error Hierarchy
//!
//! Defines error types for the store and the batch processing pipeline,
//! categorized by configuration and per-entry operational concerns.

use config::ConfigError;

#[doc(hidden)]
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration loading and validation failures
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Per-entry processing failures
    #[error(transparent)]
    Processing(#[from] ProcessingError),
}

#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    /// The per-entry work unit reported a failure
    #[error("Processing entry {key} failed: {reason}")]
    EntryFailed { key: u64, reason: String },
}
