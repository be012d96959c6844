//! Anomaly checks on raw sample text.

pub mod diversity;
pub mod duplication;

use std::collections::BTreeSet;

use digitalme_core::config::QualityConfig;
use digitalme_core::models::AnomalyFlag;

/// Measured ratios, raised flags, and the combined penalty.
#[derive(Debug, Clone, PartialEq)]
pub struct AnomalyReport {
    pub duplicate_sentence_ratio: f64,
    pub unique_word_ratio: f64,
    pub flags: BTreeSet<AnomalyFlag>,
    /// Product of the penalties of every raised flag.
    pub penalty: f64,
}

/// Run every check against `raw_text`.
pub fn inspect(config: &QualityConfig, raw_text: &str) -> AnomalyReport {
    let duplicate_sentence_ratio = duplication::duplicate_sentence_ratio(raw_text);
    let unique_word_ratio = diversity::unique_word_ratio(raw_text);

    let mut flags = BTreeSet::new();
    let mut penalty = 1.0;
    if duplicate_sentence_ratio >= config.spam_duplicate_ratio {
        flags.insert(AnomalyFlag::Spam);
        penalty *= config.spam_penalty;
    }
    if unique_word_ratio < config.min_unique_word_ratio {
        flags.insert(AnomalyFlag::LowDiversity);
        penalty *= config.low_diversity_penalty;
    }

    AnomalyReport {
        duplicate_sentence_ratio,
        unique_word_ratio,
        flags,
        penalty,
    }
}
