use serde::{Deserialize, Serialize};

use super::defaults;

/// Confidence model adjustments. The base word-count curve is fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceConfig {
    /// Upper clamp for overall and per-attribute confidence. Never above 0.95.
    pub ceiling: f64,
    /// Bonus when two or more source types contributed.
    pub source_type_diversity_bonus: f64,
    /// Bonus when two or more distinct sources contributed.
    pub multi_source_bonus: f64,
    pub advanced_data_bonus: f64,
    /// Multiplied by the spam-flagged weight fraction.
    pub spam_penalty: f64,
    /// Multiplied by the low-diversity-flagged weight fraction.
    pub low_diversity_penalty: f64,
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            ceiling: defaults::DEFAULT_CONFIDENCE_CEILING,
            source_type_diversity_bonus: defaults::DEFAULT_SOURCE_TYPE_DIVERSITY_BONUS,
            multi_source_bonus: defaults::DEFAULT_MULTI_SOURCE_BONUS,
            advanced_data_bonus: defaults::DEFAULT_ADVANCED_DATA_BONUS,
            spam_penalty: defaults::DEFAULT_SPAM_CONFIDENCE_PENALTY,
            low_diversity_penalty: defaults::DEFAULT_LOW_DIVERSITY_CONFIDENCE_PENALTY,
        }
    }
}
