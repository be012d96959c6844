use digitalme_core::models::StyleProfile;

/// Everything the confidence model looks at.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfidenceInputs {
    /// Per-source words plus conversation words.
    pub total_words: u64,
    /// Distinct source types that contributed non-zero weight.
    pub source_types: usize,
    /// Distinct sources that contributed non-zero weight.
    pub sources: usize,
    pub advanced_present: bool,
    /// Share of total weight from spam-flagged samples, in [0, 1].
    pub spam_fraction: f64,
    /// Share of total weight from low-diversity samples, in [0, 1].
    pub low_diversity_fraction: f64,
}

impl ConfidenceInputs {
    /// Rebuild inputs from a profile's counts and stored quality summary.
    pub fn from_profile(profile: &StyleProfile) -> Self {
        Self {
            total_words: profile.total_words(),
            source_types: profile.sample_count.distinct_source_types(),
            sources: profile.quality.source_count as usize,
            advanced_present: profile.advanced.is_some(),
            spam_fraction: profile.quality.spam_weight_fraction,
            low_diversity_fraction: profile.quality.low_diversity_weight_fraction,
        }
    }

    /// Same inputs with extra words of evidence.
    pub fn with_extra_words(mut self, words: u64) -> Self {
        self.total_words = self.total_words.saturating_add(words);
        self
    }
}
