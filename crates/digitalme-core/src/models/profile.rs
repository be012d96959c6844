use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::advanced::AdvancedStyle;
use super::attributes::{Formality, SentenceLength, StyleAttribute, Tone};
use super::confidence::Confidence;
use super::quality::QualitySummary;
use super::source::SourceType;
use super::term_set::TermSet;
use crate::constants::{
    ATTRIBUTION_TOLERANCE, MAX_CONTEXT_VOCABULARY, MAX_PERSONALITY_MARKERS, MAX_SIGNATURE_PHRASES,
    MAX_TERM_SET_SIZE,
};
use crate::errors::{DigitalMeError, DigitalMeResult};
use crate::text::normalize_term;

/// Basic attributes resolved to a single value each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(deny_unknown_fields)]
pub struct ResolvedStyle {
    pub tone: Tone,
    pub formality: Formality,
    pub sentence_length: SentenceLength,
    pub vocabulary: TermSet,
    pub avoidance: TermSet,
}

/// Words of evidence behind the profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(deny_unknown_fields)]
pub struct SampleCount {
    pub per_source_word_counts: BTreeMap<SourceType, u64>,
    /// Words absorbed through refinement batches.
    pub conversation_words: u64,
}

impl SampleCount {
    pub fn source_words(&self) -> u64 {
        self.per_source_word_counts.values().sum()
    }

    pub fn total_words(&self) -> u64 {
        self.source_words() + self.conversation_words
    }

    /// Source types with at least one counted word.
    pub fn distinct_source_types(&self) -> usize {
        self.per_source_word_counts.values().filter(|w| **w > 0).count()
    }
}

/// One source type's share of an attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(deny_unknown_fields)]
pub struct Contribution {
    pub source_type: SourceType,
    pub contribution_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(deny_unknown_fields)]
pub struct LearningMetadata {
    pub enabled: bool,
    pub last_refinement_at: Option<DateTime<Utc>>,
    pub total_refinements: u64,
}

impl Default for LearningMetadata {
    fn default() -> Self {
        Self {
            enabled: true,
            last_refinement_at: None,
            total_refinements: 0,
        }
    }
}

/// How this user writes. Created by the first merge, then mutated in place by
/// re-merges and refinement batches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(deny_unknown_fields)]
pub struct StyleProfile {
    pub basic: ResolvedStyle,
    pub advanced: Option<AdvancedStyle>,
    pub confidence: Confidence,
    pub attribute_confidence: BTreeMap<StyleAttribute, Confidence>,
    pub sample_count: SampleCount,
    pub source_attribution: BTreeMap<StyleAttribute, Vec<Contribution>>,
    pub quality: QualitySummary,
    pub learning_metadata: LearningMetadata,
}

impl StyleProfile {
    pub fn total_words(&self) -> u64 {
        self.sample_count.total_words()
    }

    /// Confidence for one attribute, falling back to the overall confidence.
    pub fn attribute_confidence(&self, attribute: StyleAttribute) -> Confidence {
        self.attribute_confidence
            .get(&attribute)
            .copied()
            .unwrap_or(self.confidence)
    }

    pub fn term_set(&self, attribute: StyleAttribute) -> Option<&TermSet> {
        match attribute {
            StyleAttribute::Vocabulary => Some(&self.basic.vocabulary),
            StyleAttribute::Avoidance => Some(&self.basic.avoidance),
            _ => None,
        }
    }

    /// Deserialize from JSON and validate every invariant.
    pub fn from_json(json: &str) -> DigitalMeResult<Self> {
        let profile: Self = serde_json::from_str(json)?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn to_json(&self) -> DigitalMeResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Check the structural invariants of a profile. Returns the first violation.
    pub fn validate(&self) -> DigitalMeResult<()> {
        if !self.confidence.is_valid() {
            return Err(invalid(format!(
                "confidence {} outside [0, {}]",
                self.confidence.value(),
                Confidence::CEILING
            )));
        }
        for attribute in StyleAttribute::ALL {
            match self.attribute_confidence.get(&attribute) {
                Some(c) if c.is_valid() => {}
                Some(c) => {
                    return Err(invalid(format!(
                        "attribute confidence for {attribute} is {}, outside [0, {}]",
                        c.value(),
                        Confidence::CEILING
                    )))
                }
                None => {
                    return Err(invalid(format!(
                        "attribute confidence for {attribute} is missing"
                    )))
                }
            }
        }

        for (attribute, set) in [
            (StyleAttribute::Vocabulary, &self.basic.vocabulary),
            (StyleAttribute::Avoidance, &self.basic.avoidance),
        ] {
            if set.len() > MAX_TERM_SET_SIZE {
                return Err(invalid(format!(
                    "{attribute} holds {} terms, cap is {MAX_TERM_SET_SIZE}",
                    set.len()
                )));
            }
            if !set.is_unique() {
                return Err(invalid(format!("{attribute} contains duplicate terms")));
            }
            if let Some(bad) = set
                .iter()
                .find(|t| !t.weight.is_finite() || t.weight <= 0.0 || t.weight > 1.0)
            {
                return Err(invalid(format!(
                    "{attribute} term '{}' has weight {} outside (0, 1]",
                    bad.term, bad.weight
                )));
            }
            if !set.is_sorted() {
                return Err(invalid(format!("{attribute} terms are not ordered by weight")));
            }
        }

        if let Some(advanced) = &self.advanced {
            validate_advanced(advanced)?;
        }

        for (attribute, contributions) in &self.source_attribution {
            if contributions.is_empty() {
                continue;
            }
            let mut seen = HashSet::new();
            for c in contributions {
                if !c.contribution_percent.is_finite() || c.contribution_percent < 0.0 {
                    return Err(invalid(format!(
                        "{attribute} attribution for {} is {}",
                        c.source_type, c.contribution_percent
                    )));
                }
                if !seen.insert(c.source_type) {
                    return Err(invalid(format!(
                        "{attribute} attribution lists {} twice",
                        c.source_type
                    )));
                }
                let present = self
                    .sample_count
                    .per_source_word_counts
                    .get(&c.source_type)
                    .is_some_and(|w| *w > 0);
                if !present {
                    return Err(invalid(format!(
                        "{attribute} attribution references absent source {}",
                        c.source_type
                    )));
                }
            }
            let total: f64 = contributions.iter().map(|c| c.contribution_percent).sum();
            if (total - 100.0).abs() > ATTRIBUTION_TOLERANCE {
                return Err(invalid(format!(
                    "{attribute} attribution sums to {total:.2}, expected 100"
                )));
            }
        }

        let q = &self.quality;
        for (name, fraction) in [
            ("spam_weight_fraction", q.spam_weight_fraction),
            ("low_diversity_weight_fraction", q.low_diversity_weight_fraction),
        ] {
            if !fraction.is_finite() || !(0.0..=1.0).contains(&fraction) {
                return Err(invalid(format!("quality.{name} is {fraction}")));
            }
        }
        Ok(())
    }
}

fn validate_advanced(advanced: &AdvancedStyle) -> DigitalMeResult<()> {
    if advanced.signature_phrases.len() > MAX_SIGNATURE_PHRASES {
        return Err(invalid("too many signature phrases".to_string()));
    }
    let mut phrases = HashSet::new();
    if advanced
        .signature_phrases
        .iter()
        .any(|p| !phrases.insert(normalize_term(&p.phrase)))
    {
        return Err(invalid("duplicate signature phrase".to_string()));
    }

    let patterns = &advanced.thought_patterns;
    if !patterns.flow_score.is_finite() || !(0.0..=100.0).contains(&patterns.flow_score) {
        return Err(invalid(format!(
            "flow score {} outside [0, 100]",
            patterns.flow_score
        )));
    }
    if !patterns.parenthetical_frequency.is_finite() || patterns.parenthetical_frequency < 0.0 {
        return Err(invalid(format!(
            "parenthetical frequency {} is invalid",
            patterns.parenthetical_frequency
        )));
    }

    if advanced.personality_markers.len() > MAX_PERSONALITY_MARKERS {
        return Err(invalid("too many personality markers".to_string()));
    }
    let mut markers = HashSet::new();
    if advanced
        .personality_markers
        .iter()
        .any(|m| !markers.insert(normalize_term(&m.text)))
    {
        return Err(invalid("duplicate personality marker".to_string()));
    }

    for (context, vocabulary) in &advanced.contextual_vocabulary {
        if vocabulary.vocabulary.len() > MAX_CONTEXT_VOCABULARY {
            return Err(invalid(format!("context '{context}' vocabulary over cap")));
        }
        let mut seen = HashSet::new();
        if vocabulary.vocabulary.iter().any(|t| !seen.insert(t.as_str())) {
            return Err(invalid(format!("context '{context}' has duplicate terms")));
        }
    }
    Ok(())
}

fn invalid(message: String) -> DigitalMeError {
    DigitalMeError::ValidationError(message)
}
