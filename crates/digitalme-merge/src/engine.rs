//! MergeEngine: implements IMerger over quality-scored samples.

use std::collections::{BTreeMap, HashSet};

use tracing::{debug, info, instrument};

use digitalme_confidence::{ConfidenceInputs, ConfidenceModel};
use digitalme_core::config::{DigitalMeConfig, MergeConfig};
use digitalme_core::errors::{DigitalMeResult, MergeError};
use digitalme_core::models::{
    AnomalyFlag, Confidence, LearningMetadata, QualitySummary, ResolvedStyle, SampleCount,
    ScoredSample, StyleAttribute, StyleProfile,
};
use digitalme_core::traits::IMerger;

use crate::advanced::merge_advanced;
use crate::sets::merge_terms;
use crate::vote::{weighted_vote, VoteOutcome};

/// Combines scored samples from every source into one profile.
pub struct MergeEngine {
    config: MergeConfig,
    confidence: ConfidenceModel,
}

impl MergeEngine {
    pub fn new(config: MergeConfig, confidence: ConfidenceModel) -> Self {
        Self { config, confidence }
    }

    pub fn from_config(config: &DigitalMeConfig) -> Self {
        Self::new(
            config.merge.clone(),
            ConfidenceModel::new(config.confidence.clone()),
        )
    }

    pub fn confidence_model(&self) -> &ConfidenceModel {
        &self.confidence
    }

    /// Build a profile from `samples`, counting `conversation_words` of
    /// already-absorbed refinement text towards confidence.
    fn build(&self, samples: &[ScoredSample], conversation_words: u64) -> DigitalMeResult<StyleProfile> {
        if samples.is_empty() {
            return Err(MergeError::NoSources.into());
        }
        let included: Vec<ScoredSample> = samples
            .iter()
            .filter(|s| s.weight().is_finite() && s.weight() > 0.0 && s.sample.word_count > 0)
            .cloned()
            .collect();
        if included.is_empty() {
            return Err(MergeError::InsufficientQualityData {
                samples: samples.len(),
            }
            .into());
        }
        debug!(
            included = included.len(),
            dropped = samples.len() - included.len(),
            "zero-weight samples dropped"
        );

        let tone = resolve(&included, StyleAttribute::Tone, |s| s.sample.basic.tone)?;
        let formality = resolve(&included, StyleAttribute::Formality, |s| {
            s.sample.basic.formality
        })?;
        let sentence_length = resolve(&included, StyleAttribute::SentenceLength, |s| {
            s.sample.basic.sentence_length
        })?;
        let vocabulary = merge_terms(&included, self.config.max_set_terms, |s| {
            s.sample.basic.vocabulary.as_slice()
        });
        let avoidance = merge_terms(&included, self.config.max_set_terms, |s| {
            s.sample.basic.avoidance.as_slice()
        });
        let advanced = merge_advanced(&included, &self.config);

        let mut per_source_word_counts = BTreeMap::new();
        for s in &included {
            *per_source_word_counts.entry(s.sample.source_type).or_insert(0u64) +=
                s.sample.word_count;
        }
        let sample_count = SampleCount {
            per_source_word_counts,
            conversation_words,
        };
        let quality = summarize_quality(&included);

        let inputs = ConfidenceInputs {
            total_words: sample_count.total_words(),
            source_types: sample_count.distinct_source_types(),
            sources: quality.source_count as usize,
            advanced_present: advanced.is_some(),
            spam_fraction: quality.spam_weight_fraction,
            low_diversity_fraction: quality.low_diversity_weight_fraction,
        };
        let breakdown = self.confidence.compute_breakdown(&inputs);
        debug!(?breakdown, "confidence computed");
        let confidence = Confidence::new(breakdown.final_confidence);

        let mut source_attribution = BTreeMap::new();
        source_attribution.insert(StyleAttribute::Tone, tone.attribution);
        source_attribution.insert(StyleAttribute::Formality, formality.attribution);
        source_attribution.insert(StyleAttribute::SentenceLength, sentence_length.attribution);
        source_attribution.insert(StyleAttribute::Vocabulary, vocabulary.attribution);
        source_attribution.insert(StyleAttribute::Avoidance, avoidance.attribution);

        let profile = StyleProfile {
            basic: ResolvedStyle {
                tone: tone.winner,
                formality: formality.winner,
                sentence_length: sentence_length.winner,
                vocabulary: vocabulary.terms,
                avoidance: avoidance.terms,
            },
            advanced,
            confidence,
            attribute_confidence: StyleAttribute::ALL
                .iter()
                .map(|a| (*a, confidence))
                .collect(),
            sample_count,
            source_attribution,
            quality,
            learning_metadata: LearningMetadata::default(),
        };
        profile.validate()?;
        Ok(profile)
    }
}

impl Default for MergeEngine {
    fn default() -> Self {
        Self::new(MergeConfig::default(), ConfidenceModel::default())
    }
}

impl IMerger for MergeEngine {
    #[instrument(skip_all, fields(samples = samples.len()))]
    fn merge(&self, samples: &[ScoredSample]) -> DigitalMeResult<StyleProfile> {
        let profile = self.build(samples, 0)?;
        info!(
            sources = profile.quality.source_count,
            total_words = profile.total_words(),
            confidence = profile.confidence.value(),
            tone = profile.basic.tone.as_str(),
            "profile merged"
        );
        Ok(profile)
    }

    #[instrument(skip_all, fields(samples = samples.len()))]
    fn remerge(&self, profile: &mut StyleProfile, samples: &[ScoredSample]) -> DigitalMeResult<()> {
        let mut rebuilt = self.build(samples, profile.sample_count.conversation_words)?;
        rebuilt.learning_metadata = profile.learning_metadata.clone();
        info!(
            sources = rebuilt.quality.source_count,
            total_words = rebuilt.total_words(),
            old_confidence = profile.confidence.value(),
            new_confidence = rebuilt.confidence.value(),
            "profile re-merged"
        );
        *profile = rebuilt;
        Ok(())
    }
}

/// Weighted vote for one enumerated basic attribute.
fn resolve<T, F>(
    samples: &[ScoredSample],
    attribute: StyleAttribute,
    value_of: F,
) -> DigitalMeResult<VoteOutcome<T>>
where
    T: Copy + PartialEq + std::fmt::Debug,
    F: Fn(&ScoredSample) -> T,
{
    let outcome = weighted_vote(
        samples
            .iter()
            .map(|s| (value_of(s), s.sample.source_type, s.weight())),
    )
    .ok_or(MergeError::NoSources)?;
    debug!(
        attribute = attribute.as_str(),
        winner = ?outcome.winner,
        winner_weight = outcome.winner_weight,
        total_weight = outcome.total_weight,
        "attribute resolved"
    );
    Ok(outcome)
}

fn summarize_quality(samples: &[ScoredSample]) -> QualitySummary {
    let total: f64 = samples.iter().map(ScoredSample::weight).sum();
    let flagged = |flag: AnomalyFlag| -> f64 {
        if total <= 0.0 {
            return 0.0;
        }
        let weight: f64 = samples
            .iter()
            .filter(|s| s.quality.has(flag))
            .map(ScoredSample::weight)
            .sum();
        (weight / total).clamp(0.0, 1.0)
    };
    let sources: HashSet<&str> = samples.iter().map(|s| s.sample.source_id.as_str()).collect();

    QualitySummary {
        source_count: u32::try_from(sources.len()).unwrap_or(u32::MAX),
        spam_weight_fraction: flagged(AnomalyFlag::Spam),
        low_diversity_weight_fraction: flagged(AnomalyFlag::LowDiversity),
    }
}
