//! # digitalme-learning
//!
//! Incremental profile refinement from conversation batches, and the
//! offline style extractors the refiner can run on.
//!
//! Movement per batch is capped by attribute confidence (confident attributes
//! move least) and scaled by batch size, so repeated batches show diminishing returns.

pub mod batch;
pub mod extraction;
pub mod refiner;
pub mod update;

pub use batch::PreparedBatch;
pub use extraction::{FallbackExtractor, HeuristicExtractor};
pub use refiner::ProfileRefiner;
