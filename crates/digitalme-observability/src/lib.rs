//! # digitalme-observability
//!
//! Structured JSON logging for the DigitalMe engine: subscriber setup,
//! per-operation span macros, and structured log events.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, init_tracing_from_config, init_tracing_with_filter};
