//! Builders for samples, scored samples and profiles.

use std::collections::{BTreeMap, BTreeSet};

use digitalme_core::models::{
    AdvancedStyle, AnomalyFlag, BasicStyle, Confidence, ContextVocabulary, Contribution,
    ExtractedStyle, Formality, LearningMetadata, MarkerType, PersonalityMarker, PhraseCategory,
    QualityAssessment, QualitySummary, ResolvedStyle, SampleCount, ScoredSample, SentenceLength,
    SignaturePhrase, SourceType, StyleAttribute, StyleProfile, StyleSample, TermSet,
    ThoughtPatterns, Tone, TransitionStyle,
};

/// Basic attributes with a neutral default vocabulary.
pub fn basic(tone: Tone, formality: Formality, sentence_length: SentenceLength) -> BasicStyle {
    BasicStyle {
        tone,
        formality,
        sentence_length,
        vocabulary: vec!["project".to_string(), "team".to_string()],
        avoidance: vec!["synergy".to_string()],
    }
}

pub fn basic_with_terms(
    tone: Tone,
    formality: Formality,
    vocabulary: &[&str],
    avoidance: &[&str],
) -> BasicStyle {
    BasicStyle {
        tone,
        formality,
        sentence_length: SentenceLength::Medium,
        vocabulary: vocabulary.iter().map(|s| s.to_string()).collect(),
        avoidance: avoidance.iter().map(|s| s.to_string()).collect(),
    }
}

/// A small, valid advanced block.
pub fn advanced(flow_score: f64, transition_style: TransitionStyle) -> AdvancedStyle {
    let mut contextual_vocabulary = BTreeMap::new();
    contextual_vocabulary.insert(
        "work".to_string(),
        ContextVocabulary {
            vocabulary: vec!["deadline".to_string(), "review".to_string()],
            tone: Tone::Professional,
        },
    );
    AdvancedStyle {
        signature_phrases: vec![SignaturePhrase {
            phrase: "to be honest".to_string(),
            frequency: 3,
            category: PhraseCategory::Filler,
        }],
        thought_patterns: ThoughtPatterns {
            flow_score,
            transition_style,
            parenthetical_frequency: 1.0,
        },
        personality_markers: vec![PersonalityMarker {
            text: "Happy to help!".to_string(),
            marker_type: MarkerType::Enthusiasm,
        }],
        contextual_vocabulary,
    }
}

pub fn extracted(basic: BasicStyle) -> ExtractedStyle {
    ExtractedStyle {
        basic,
        advanced: None,
    }
}

pub fn sample(source_type: SourceType, word_count: u64, tone: Tone) -> StyleSample {
    sample_with(
        &format!("{}-1", source_type.as_str()),
        source_type,
        word_count,
        basic(tone, Formality::Neutral, SentenceLength::Medium),
    )
}

pub fn sample_with(
    source_id: &str,
    source_type: SourceType,
    word_count: u64,
    basic: BasicStyle,
) -> StyleSample {
    StyleSample {
        source_id: source_id.to_string(),
        source_type,
        word_count,
        basic,
        advanced: None,
    }
}

/// Pair a sample with a hand-set quality weight and no anomalies.
pub fn scored(sample: StyleSample, weight: f64) -> ScoredSample {
    scored_flagged(sample, weight, &[])
}

/// Pair a sample with a hand-set weight and the given anomaly flags.
pub fn scored_flagged(sample: StyleSample, weight: f64, flags: &[AnomalyFlag]) -> ScoredSample {
    let anomalies: BTreeSet<AnomalyFlag> = flags.iter().copied().collect();
    let quality = if weight <= 0.0 {
        QualityAssessment::zero(0.0)
    } else {
        QualityAssessment {
            weight,
            prior: weight.min(1.0),
            quantity_multiplier: 1.0,
            anomaly_penalty: 1.0,
            anomalies,
            duplicate_sentence_ratio: 0.0,
            unique_word_ratio: 1.0,
        }
    };
    ScoredSample::new(sample, quality)
}

/// A valid single-source profile with every attribute confidence set to `confidence`.
pub fn profile(confidence: f64) -> StyleProfile {
    let confidence = Confidence::new(confidence);
    let attribute_confidence = StyleAttribute::ALL
        .iter()
        .map(|a| (*a, confidence))
        .collect();
    let full_text = vec![Contribution {
        source_type: SourceType::Text,
        contribution_percent: 100.0,
    }];
    let source_attribution = StyleAttribute::ALL
        .iter()
        .map(|a| (*a, full_text.clone()))
        .collect();
    let mut per_source_word_counts = BTreeMap::new();
    per_source_word_counts.insert(SourceType::Text, 1_000);

    StyleProfile {
        basic: ResolvedStyle {
            tone: Tone::Casual,
            formality: Formality::Informal,
            sentence_length: SentenceLength::Short,
            vocabulary: TermSet::from_weighted(
                vec![
                    ("project".to_string(), 1.0),
                    ("team".to_string(), 0.8),
                    ("ship".to_string(), 0.6),
                ],
                10,
            ),
            avoidance: TermSet::from_weighted(vec![("synergy".to_string(), 1.0)], 10),
        },
        advanced: None,
        confidence,
        attribute_confidence,
        sample_count: SampleCount {
            per_source_word_counts,
            conversation_words: 0,
        },
        source_attribution,
        quality: QualitySummary {
            source_count: 1,
            spam_weight_fraction: 0.0,
            low_diversity_weight_fraction: 0.0,
        },
        learning_metadata: LearningMetadata::default(),
    }
}

/// [`profile`] with one attribute's confidence overridden.
pub fn profile_with_attribute(
    confidence: f64,
    attribute: StyleAttribute,
    attribute_confidence: f64,
) -> StyleProfile {
    let mut p = profile(confidence);
    p.attribute_confidence
        .insert(attribute, Confidence::new(attribute_confidence));
    p
}
