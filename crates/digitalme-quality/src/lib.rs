//! # digitalme-quality
//!
//! Quality weighting for style samples.
//! `weight = source prior × quantity multiplier × anomaly penalties`.
//! Anomalies: duplicated sentences (spam) and low vocabulary diversity.

pub mod anomaly;
pub mod quantity;
pub mod scorer;

pub use anomaly::AnomalyReport;
pub use scorer::QualityScorer;
