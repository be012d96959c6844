use crate::models::{QualityAssessment, ScoredSample, SourceType, StyleSample};

/// Per-source quality weighting.
pub trait IQualityScorer: Send + Sync {
    /// Score a source from its type, size, and raw text.
    fn score(&self, source_type: SourceType, word_count: u64, raw_text: &str) -> QualityAssessment;

    /// Score a sample and pair it with its assessment.
    fn score_sample(&self, sample: StyleSample, raw_text: &str) -> ScoredSample {
        let quality = self.score(sample.source_type, sample.word_count, raw_text);
        ScoredSample::new(sample, quality)
    }
}
