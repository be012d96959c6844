use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::sample::StyleSample;

/// Anomalies detected on a sample's raw text.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyFlag {
    /// Too many duplicated sentences.
    Spam,
    /// Unique-word ratio under the diversity floor.
    LowDiversity,
}

/// Quality scorer output for one sample.
///
/// `weight = prior × quantity_multiplier × anomaly_penalty`, within [0.0, 1.5].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QualityAssessment {
    pub weight: f64,
    pub prior: f64,
    pub quantity_multiplier: f64,
    /// Product of all anomaly penalties; 1.0 when clean.
    pub anomaly_penalty: f64,
    pub anomalies: BTreeSet<AnomalyFlag>,
    pub duplicate_sentence_ratio: f64,
    pub unique_word_ratio: f64,
}

impl QualityAssessment {
    /// Assessment for an empty sample: zero weight, excluded from merging.
    pub fn zero(prior: f64) -> Self {
        Self {
            weight: 0.0,
            prior,
            quantity_multiplier: 0.0,
            anomaly_penalty: 1.0,
            anomalies: BTreeSet::new(),
            duplicate_sentence_ratio: 0.0,
            unique_word_ratio: 0.0,
        }
    }

    pub fn is_usable(&self) -> bool {
        self.weight > 0.0
    }

    pub fn has(&self, flag: AnomalyFlag) -> bool {
        self.anomalies.contains(&flag)
    }
}

/// A sample paired with its quality assessment; the merge engine's input unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoredSample {
    pub sample: StyleSample,
    pub quality: QualityAssessment,
}

impl ScoredSample {
    pub fn new(sample: StyleSample, quality: QualityAssessment) -> Self {
        Self { sample, quality }
    }

    pub fn weight(&self) -> f64 {
        self.quality.weight
    }
}

/// Merge-time quality facts the confidence model needs after the samples are gone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(deny_unknown_fields)]
pub struct QualitySummary {
    /// Distinct sources that contributed non-zero weight.
    pub source_count: u32,
    /// Share of total weight that came from spam-flagged samples.
    pub spam_weight_fraction: f64,
    /// Share of total weight that came from low-diversity samples.
    pub low_diversity_weight_fraction: f64,
}
