use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::SourceType;

/// Fixed trust prior per source type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcePriors {
    pub text: f64,
    pub gmail: f64,
    pub github: f64,
    pub blog: f64,
    pub conversation: f64,
}

impl SourcePriors {
    pub fn prior(&self, source_type: SourceType) -> f64 {
        match source_type {
            SourceType::Text => self.text,
            SourceType::Gmail => self.gmail,
            SourceType::Github => self.github,
            SourceType::Blog => self.blog,
            SourceType::Conversation => self.conversation,
        }
    }
}

impl Default for SourcePriors {
    fn default() -> Self {
        Self {
            text: defaults::DEFAULT_PRIOR_TEXT,
            gmail: defaults::DEFAULT_PRIOR_GMAIL,
            github: defaults::DEFAULT_PRIOR_GITHUB,
            blog: defaults::DEFAULT_PRIOR_BLOG,
            conversation: defaults::DEFAULT_PRIOR_CONVERSATION,
        }
    }
}

/// Quality scorer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityConfig {
    /// Samples below this many words get the small multiplier.
    pub small_sample_words: u64,
    /// Samples at or above this many words get the large multiplier.
    pub large_sample_words: u64,
    pub small_sample_multiplier: f64,
    pub medium_sample_multiplier: f64,
    pub large_sample_multiplier: f64,
    /// Duplicate-sentence ratio at or above which a sample is flagged as spam.
    pub spam_duplicate_ratio: f64,
    pub spam_penalty: f64,
    /// Unique-word ratio below which a sample is flagged as low diversity.
    pub min_unique_word_ratio: f64,
    pub low_diversity_penalty: f64,
    pub priors: SourcePriors,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            small_sample_words: defaults::DEFAULT_SMALL_SAMPLE_WORDS,
            large_sample_words: defaults::DEFAULT_LARGE_SAMPLE_WORDS,
            small_sample_multiplier: defaults::DEFAULT_SMALL_SAMPLE_MULTIPLIER,
            medium_sample_multiplier: defaults::DEFAULT_MEDIUM_SAMPLE_MULTIPLIER,
            large_sample_multiplier: defaults::DEFAULT_LARGE_SAMPLE_MULTIPLIER,
            spam_duplicate_ratio: defaults::DEFAULT_SPAM_DUPLICATE_RATIO,
            spam_penalty: defaults::DEFAULT_SPAM_PENALTY,
            min_unique_word_ratio: defaults::DEFAULT_MIN_UNIQUE_WORD_RATIO,
            low_diversity_penalty: defaults::DEFAULT_LOW_DIVERSITY_PENALTY,
            priors: SourcePriors::default(),
        }
    }
}
