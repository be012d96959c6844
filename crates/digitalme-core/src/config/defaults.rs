// Single source of truth for all default values.

// --- Quality priors (per source type) ---
pub const DEFAULT_PRIOR_GMAIL: f64 = 1.0;
pub const DEFAULT_PRIOR_TEXT: f64 = 0.85;
pub const DEFAULT_PRIOR_GITHUB: f64 = 0.7;
pub const DEFAULT_PRIOR_BLOG: f64 = 0.65;
pub const DEFAULT_PRIOR_CONVERSATION: f64 = 0.85;

// --- Quantity bands ---
pub const DEFAULT_SMALL_SAMPLE_WORDS: u64 = 500;
pub const DEFAULT_LARGE_SAMPLE_WORDS: u64 = 1_500;
pub const DEFAULT_SMALL_SAMPLE_MULTIPLIER: f64 = 0.5;
pub const DEFAULT_MEDIUM_SAMPLE_MULTIPLIER: f64 = 1.0;
pub const DEFAULT_LARGE_SAMPLE_MULTIPLIER: f64 = 1.5;

// --- Anomaly checks ---
pub const DEFAULT_SPAM_DUPLICATE_RATIO: f64 = 0.30;
pub const DEFAULT_SPAM_PENALTY: f64 = 0.5;
pub const DEFAULT_MIN_UNIQUE_WORD_RATIO: f64 = 0.15;
pub const DEFAULT_LOW_DIVERSITY_PENALTY: f64 = 0.7;

// --- Merge caps ---
pub const DEFAULT_MAX_SET_TERMS: usize = 10;
pub const DEFAULT_MAX_SIGNATURE_PHRASES: usize = 10;
pub const DEFAULT_MAX_PERSONALITY_MARKERS: usize = 10;
pub const DEFAULT_MAX_CONTEXT_VOCABULARY: usize = 5;

// --- Confidence ---
pub const DEFAULT_CONFIDENCE_CEILING: f64 = 0.95;
pub const DEFAULT_SOURCE_TYPE_DIVERSITY_BONUS: f64 = 0.03;
pub const DEFAULT_MULTI_SOURCE_BONUS: f64 = 0.03;
pub const DEFAULT_ADVANCED_DATA_BONUS: f64 = 0.02;
pub const DEFAULT_SPAM_CONFIDENCE_PENALTY: f64 = 0.50;
pub const DEFAULT_LOW_DIVERSITY_CONFIDENCE_PENALTY: f64 = 0.30;

// --- Refinement ---
pub const DEFAULT_MAX_BATCH_MESSAGES: usize = 50;
pub const DEFAULT_MAX_MESSAGE_CHARS: usize = 5_000;
pub const DEFAULT_MAX_BATCH_CHARS: usize = 50_000;
pub const DEFAULT_MIN_BATCH_WORDS: u64 = 10;
pub const DEFAULT_FULL_MOVEMENT_WORDS: u64 = 500;
pub const DEFAULT_LOW_CONFIDENCE_EDGE: f64 = 0.5;
pub const DEFAULT_HIGH_CONFIDENCE_EDGE: f64 = 0.8;
pub const DEFAULT_LOW_CONFIDENCE_ALLOTMENT: f64 = 0.20;
pub const DEFAULT_MEDIUM_CONFIDENCE_ALLOTMENT: f64 = 0.10;
pub const DEFAULT_HIGH_CONFIDENCE_ALLOTMENT: f64 = 0.05;
pub const DEFAULT_ENUM_SWITCH_FRACTION: f64 = 0.5;
pub const DEFAULT_MIN_TERM_INCLUSION: f64 = 0.05;
pub const DEFAULT_CONFIDENCE_GAIN: f64 = 1.0;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_TRACING_ENABLED: bool = false;
