use serde::{Deserialize, Serialize};

use super::defaults;

/// Profile refiner configuration: batch limits and update-rule constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefinementConfig {
    pub max_batch_messages: usize,
    /// Per-message limit, in characters.
    pub max_message_chars: usize,
    /// Whole-batch limit, in characters.
    pub max_batch_chars: usize,
    /// Batches below this word count are a no-op.
    pub min_batch_words: u64,
    /// Word count at which a batch applies its full allotted movement.
    pub full_movement_words: u64,
    /// Attribute confidence below this gets the low-confidence allotment.
    pub low_confidence_edge: f64,
    /// Attribute confidence at or above this gets the high-confidence allotment.
    pub high_confidence_edge: f64,
    pub low_confidence_allotment: f64,
    pub medium_confidence_allotment: f64,
    pub high_confidence_allotment: f64,
    /// Fraction of the allotment the scaled movement must exceed to switch an enum value.
    pub enum_switch_fraction: f64,
    /// Minimum `scaled movement × relevance` for a new term to enter a set.
    pub min_term_inclusion: f64,
    /// Multiplier from scaled movement to confidence increase.
    pub confidence_gain: f64,
}

impl Default for RefinementConfig {
    fn default() -> Self {
        Self {
            max_batch_messages: defaults::DEFAULT_MAX_BATCH_MESSAGES,
            max_message_chars: defaults::DEFAULT_MAX_MESSAGE_CHARS,
            max_batch_chars: defaults::DEFAULT_MAX_BATCH_CHARS,
            min_batch_words: defaults::DEFAULT_MIN_BATCH_WORDS,
            full_movement_words: defaults::DEFAULT_FULL_MOVEMENT_WORDS,
            low_confidence_edge: defaults::DEFAULT_LOW_CONFIDENCE_EDGE,
            high_confidence_edge: defaults::DEFAULT_HIGH_CONFIDENCE_EDGE,
            low_confidence_allotment: defaults::DEFAULT_LOW_CONFIDENCE_ALLOTMENT,
            medium_confidence_allotment: defaults::DEFAULT_MEDIUM_CONFIDENCE_ALLOTMENT,
            high_confidence_allotment: defaults::DEFAULT_HIGH_CONFIDENCE_ALLOTMENT,
            enum_switch_fraction: defaults::DEFAULT_ENUM_SWITCH_FRACTION,
            min_term_inclusion: defaults::DEFAULT_MIN_TERM_INCLUSION,
            confidence_gain: defaults::DEFAULT_CONFIDENCE_GAIN,
        }
    }
}
