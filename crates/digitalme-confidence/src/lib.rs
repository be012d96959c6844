//! # digitalme-confidence
//!
//! Profile confidence model.
//! A piecewise-linear base curve over total words, plus diversity and
//! advanced-data bonuses, minus weighted anomaly penalties, capped at 0.95.

pub mod curve;
pub mod engine;
pub mod formula;
pub mod inputs;

pub use engine::ConfidenceModel;
pub use formula::ConfidenceBreakdown;
pub use inputs::ConfidenceInputs;
