//! ProfileRefiner: implements IRefiner, folds conversation batches into a profile.

use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument, warn};

use digitalme_confidence::ConfidenceModel;
use digitalme_core::config::{DigitalMeConfig, RefinementConfig};
use digitalme_core::constants::CONVERSATION_SOURCE_ID;
use digitalme_core::errors::{DigitalMeResult, RefinementError};
use digitalme_core::models::{
    AttributeChange, AttributeValue, Confidence, ConfidenceShift, DeltaReport, SourceType,
    StyleAttribute, StyleProfile, StyleSample, TermSet,
};
use digitalme_core::traits::{IQualityScorer, IRefiner, IStyleExtractor, RefinementOutcome};
use digitalme_quality::QualityScorer;

use crate::batch;
use crate::extraction::HeuristicExtractor;
use crate::update::{raise_confidence, reinforce_set, Movement};

/// Confidence-weighted refinement over a configured extractor.
///
/// Works on a clone of the profile and commits only when every step succeeded,
/// so a failed batch leaves the caller's profile exactly as it was.
pub struct ProfileRefiner {
    config: RefinementConfig,
    /// Same cap the merge engine applies, so refinement never grows a set past it.
    max_set_terms: usize,
    extractor: Box<dyn IStyleExtractor>,
    scorer: QualityScorer,
    confidence: ConfidenceModel,
}

impl ProfileRefiner {
    /// Default configuration over the offline heuristic extractor.
    pub fn new() -> Self {
        Self::with_extractor(Box::new(HeuristicExtractor::new()))
    }

    pub fn with_extractor(extractor: Box<dyn IStyleExtractor>) -> Self {
        Self::from_config(&DigitalMeConfig::default(), extractor)
    }

    pub fn from_config(config: &DigitalMeConfig, extractor: Box<dyn IStyleExtractor>) -> Self {
        Self {
            config: config.refinement.clone(),
            max_set_terms: config.merge.max_set_terms,
            extractor,
            scorer: QualityScorer::new(config.quality.clone()),
            confidence: ConfidenceModel::new(config.confidence.clone()),
        }
    }

    pub fn config(&self) -> &RefinementConfig {
        &self.config
    }

    /// Refine with an explicit timestamp.
    #[instrument(skip_all, fields(messages = batch.len()))]
    pub fn refine_at(
        &self,
        profile: &mut StyleProfile,
        batch: &[String],
        now: DateTime<Utc>,
    ) -> DigitalMeResult<RefinementOutcome> {
        profile.validate()?;
        if !profile.learning_metadata.enabled {
            return Err(RefinementError::LearningDisabled.into());
        }
        let prepared = batch::prepare(batch, &self.config)?;
        if prepared.words < self.config.min_batch_words {
            debug!(
                words = prepared.words,
                min = self.config.min_batch_words,
                "batch too small to learn from"
            );
            return Ok(RefinementOutcome::InsufficientSignal(DeltaReport::empty(
                prepared.hash,
                now,
            )));
        }

        let extracted = self.extractor.extract(&prepared.text).map_err(|source| {
            warn!(
                extractor = self.extractor.name(),
                error = %source,
                "extraction failed, profile preserved"
            );
            RefinementError::ExtractionFailed { source }
        })?;
        let sample = StyleSample::from_extraction(
            CONVERSATION_SOURCE_ID,
            SourceType::Conversation,
            &prepared.text,
            extracted,
        );
        let quality = self
            .scorer
            .score(SourceType::Conversation, prepared.words, &prepared.text);
        let penalty = quality.anomaly_penalty;

        let mut next = profile.clone();
        let mut changes = Vec::new();
        let mut shifts = Vec::new();

        for attribute in StyleAttribute::ALL {
            let current = next.attribute_confidence(attribute);
            let movement = Movement::for_attribute(&self.config, current, prepared.words, penalty);

            let change = match attribute {
                StyleAttribute::Tone => self.update_label(
                    &mut next.basic.tone,
                    sample.basic.tone,
                    movement,
                    attribute,
                    |v| v.as_str(),
                ),
                StyleAttribute::Formality => self.update_label(
                    &mut next.basic.formality,
                    sample.basic.formality,
                    movement,
                    attribute,
                    |v| v.as_str(),
                ),
                StyleAttribute::SentenceLength => self.update_label(
                    &mut next.basic.sentence_length,
                    sample.basic.sentence_length,
                    movement,
                    attribute,
                    |v| v.as_str(),
                ),
                StyleAttribute::Vocabulary => self.update_set(
                    &mut next.basic.vocabulary,
                    &sample.basic.vocabulary,
                    movement,
                    attribute,
                ),
                StyleAttribute::Avoidance => self.update_set(
                    &mut next.basic.avoidance,
                    &sample.basic.avoidance,
                    movement,
                    attribute,
                ),
            };
            changes.extend(change);

            let raised = raise_confidence(
                current,
                movement.scaled,
                self.config.confidence_gain,
                self.confidence.config().ceiling,
            );
            if raised != current {
                shifts.push(ConfidenceShift {
                    attribute,
                    old: current.value(),
                    new: raised.value(),
                });
            }
            next.attribute_confidence.insert(attribute, raised);
            debug!(
                attribute = attribute.as_str(),
                allotment = movement.allotment,
                scaled = movement.scaled,
                confidence = raised.value(),
                "attribute refined"
            );
        }

        next.sample_count.conversation_words = next
            .sample_count
            .conversation_words
            .saturating_add(prepared.words);
        let previous_confidence = profile.confidence;
        next.confidence = self.confidence.for_profile(&next);
        next.learning_metadata.total_refinements += 1;
        next.learning_metadata.last_refinement_at = Some(now);
        next.validate()?;

        let delta = DeltaReport {
            refinement_id: uuid::Uuid::new_v4().to_string(),
            changes,
            confidence_shifts: shifts,
            words_analyzed: prepared.words,
            confidence_change: next.confidence.value() - previous_confidence.value(),
            batch_hash: prepared.hash,
            timestamp: now,
        };
        *profile = next;

        info!(
            words = delta.words_analyzed,
            changes = delta.changes.len(),
            confidence = profile.confidence.value(),
            confidence_change = delta.confidence_change,
            "refinement applied"
        );
        Ok(RefinementOutcome::Applied(delta))
    }

    fn update_label<T: Copy + PartialEq>(
        &self,
        current: &mut T,
        observed: T,
        movement: Movement,
        attribute: StyleAttribute,
        label: fn(T) -> &'static str,
    ) -> Option<AttributeChange> {
        if *current == observed || !movement.switches_enum(&self.config) {
            return None;
        }
        let old = std::mem::replace(current, observed);
        Some(AttributeChange {
            attribute,
            old_value: AttributeValue::Label(label(old).to_string()),
            new_value: AttributeValue::Label(label(observed).to_string()),
            change_percent: movement.scaled * 100.0,
        })
    }

    fn update_set(
        &self,
        set: &mut TermSet,
        observed: &[String],
        movement: Movement,
        attribute: StyleAttribute,
    ) -> Option<AttributeChange> {
        let before = set.terms();
        let update = reinforce_set(
            set,
            observed,
            movement.scaled,
            self.config.min_term_inclusion,
            self.max_set_terms,
        );
        if update.changed() == 0 {
            return None;
        }
        let after = set.terms();
        let span = (before.len() + after.len()).max(1) as f64;
        Some(AttributeChange {
            attribute,
            change_percent: update.changed() as f64 / span * 100.0,
            old_value: AttributeValue::Terms(before),
            new_value: AttributeValue::Terms(after),
        })
    }
}

impl Default for ProfileRefiner {
    fn default() -> Self {
        Self::new()
    }
}

impl IRefiner for ProfileRefiner {
    fn refine(
        &self,
        profile: &mut StyleProfile,
        batch: &[String],
    ) -> DigitalMeResult<RefinementOutcome> {
        self.refine_at(profile, batch, Utc::now())
    }
}
