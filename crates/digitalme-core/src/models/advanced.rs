use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::attributes::{MarkerType, PhraseCategory, Tone, TransitionStyle};

/// Optional deep-analysis attributes. Absent (`None` on the owner) means "not analyzed",
/// present with empty lists means "analyzed, nothing found".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(deny_unknown_fields)]
pub struct AdvancedStyle {
    pub signature_phrases: Vec<SignaturePhrase>,
    pub thought_patterns: ThoughtPatterns,
    pub personality_markers: Vec<PersonalityMarker>,
    pub contextual_vocabulary: BTreeMap<String, ContextVocabulary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(deny_unknown_fields)]
pub struct SignaturePhrase {
    pub phrase: String,
    pub frequency: u32,
    pub category: PhraseCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(deny_unknown_fields)]
pub struct ThoughtPatterns {
    /// 0–100.
    pub flow_score: f64,
    pub transition_style: TransitionStyle,
    /// Parentheticals per 100 words.
    pub parenthetical_frequency: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(deny_unknown_fields)]
pub struct PersonalityMarker {
    pub text: String,
    pub marker_type: MarkerType,
}

/// Vocabulary and tone the writer uses in one context (e.g. "work", "family").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(deny_unknown_fields)]
pub struct ContextVocabulary {
    pub vocabulary: Vec<String>,
    pub tone: Tone,
}
