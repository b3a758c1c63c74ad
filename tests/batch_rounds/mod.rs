//! # Batch Processing Round Tests
//!
//! End-to-end coverage of barrier-gated processing rounds over a live
//! store, mirroring how a deployment drives the engine:
//!
//! 1. **Full Lifecycle**: populate, process, shrink, clear and rebuild the
//!    working set across consecutive rounds
//! 2. **Independent Pipelines**: two stores with their own processors run
//!    rounds without observing each other's entries
//! 3. **Overlapping Rounds**: concurrent rounds over one store each run to
//!    completion
//! 4. **Configured Pipeline**: the pipeline built from validated settings,
//!    the way the binary builds it
//!
//! ## Test Files
//!
//! Each file contains one primary scenario and the file name matches the
//! test function name.

mod full_lifecycle;
mod independent_pipelines;
mod overlapping_rounds;
