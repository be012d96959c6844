//! # digitalme-merge
//!
//! Multi-source merge engine.
//! Enum attributes are resolved by weighted vote, term sets by summed weight,
//! advanced attributes by union and weighted average. Every resolved attribute
//! records which source types it came from.

pub mod advanced;
pub mod attribution;
pub mod engine;
pub mod sets;
pub mod vote;

pub use engine::MergeEngine;
