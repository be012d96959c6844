use tracing::{debug, warn};

use digitalme_core::config::QualityConfig;
use digitalme_core::models::{QualityAssessment, SourceType};
use digitalme_core::traits::IQualityScorer;
use digitalme_observability::quality_span;

use crate::{anomaly, quantity};

/// Scores samples by source trust, size, and anomalies in their raw text.
pub struct QualityScorer {
    config: QualityConfig,
}

impl QualityScorer {
    pub fn new(config: QualityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &QualityConfig {
        &self.config
    }
}

impl Default for QualityScorer {
    fn default() -> Self {
        Self::new(QualityConfig::default())
    }
}

impl IQualityScorer for QualityScorer {
    fn score(&self, source_type: SourceType, word_count: u64, raw_text: &str) -> QualityAssessment {
        let _span = quality_span!(source_type, word_count).entered();
        let prior = self.config.priors.prior(source_type);
        if word_count == 0 {
            debug!(source_type = %source_type, "empty sample scored zero");
            return QualityAssessment::zero(prior);
        }

        let quantity_multiplier = quantity::multiplier(&self.config, word_count);
        let report = anomaly::inspect(&self.config, raw_text);
        let weight = prior * quantity_multiplier * report.penalty;

        if !report.flags.is_empty() {
            warn!(
                source_type = %source_type,
                word_count,
                flags = ?report.flags,
                duplicate_sentence_ratio = report.duplicate_sentence_ratio,
                unique_word_ratio = report.unique_word_ratio,
                "sample flagged"
            );
        }
        debug!(source_type = %source_type, word_count, weight, "sample scored");

        QualityAssessment {
            weight,
            prior,
            quantity_multiplier,
            anomaly_penalty: report.penalty,
            anomalies: report.flags,
            duplicate_sentence_ratio: report.duplicate_sentence_ratio,
            unique_word_ratio: report.unique_word_ratio,
        }
    }
}
