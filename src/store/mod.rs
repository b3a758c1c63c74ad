//! Thread-safe key-value storage shared between writers and processing rounds.
mod concurrent_store;
pub use concurrent_store::*;
