//! # digitalme-core
//!
//! Foundation crate for the DigitalMe style engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod text;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::DigitalMeConfig;
pub use errors::{DigitalMeError, DigitalMeResult};
pub use models::{
    Confidence, ScoredSample, SourceType, StyleAttribute, StyleProfile, StyleSample,
};
