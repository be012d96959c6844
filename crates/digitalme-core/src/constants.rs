/// DigitalMe engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hard ceiling for any confidence the engine reports.
/// Perfect style replication is not claimable.
pub const CONFIDENCE_CEILING: f64 = 0.95;

/// Maximum number of terms retained in a vocabulary or avoidance set.
pub const MAX_TERM_SET_SIZE: usize = 10;

/// Hard limits for advanced data. Configured caps may be lower, never higher.
pub const MAX_SIGNATURE_PHRASES: usize = 10;
pub const MAX_PERSONALITY_MARKERS: usize = 10;
pub const MAX_CONTEXT_VOCABULARY: usize = 5;

/// Tolerance used for weight ties and attribution sums.
pub const WEIGHT_EPSILON: f64 = 1e-9;

/// Allowed deviation of an attribute's contribution total from 100.
pub const ATTRIBUTION_TOLERANCE: f64 = 1.0;

/// Source id used for samples derived from refinement batches.
pub const CONVERSATION_SOURCE_ID: &str = "conversation";
