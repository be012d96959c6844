use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::advanced::AdvancedStyle;
use super::attributes::{Formality, SentenceLength, Tone};
use super::source::SourceType;
use crate::text;

/// Basic attributes as reported for a single source.
/// Sets are ordered by salience, most salient first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(deny_unknown_fields)]
pub struct BasicStyle {
    pub tone: Tone,
    pub formality: Formality,
    pub sentence_length: SentenceLength,
    pub vocabulary: Vec<String>,
    pub avoidance: Vec<String>,
}

/// Structured output of a style extractor, before it is tied to a source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(deny_unknown_fields)]
pub struct ExtractedStyle {
    pub basic: BasicStyle,
    pub advanced: Option<AdvancedStyle>,
}

/// One source's extracted writing-style snapshot. Ephemeral input to merging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(deny_unknown_fields)]
pub struct StyleSample {
    /// Identifies the concrete source (mailbox, blog URL, repository).
    pub source_id: String,
    pub source_type: SourceType,
    pub word_count: u64,
    pub basic: BasicStyle,
    pub advanced: Option<AdvancedStyle>,
}

impl StyleSample {
    /// Tie an extractor result to its source; the word count comes from the raw text.
    pub fn from_extraction(
        source_id: impl Into<String>,
        source_type: SourceType,
        raw_text: &str,
        extracted: ExtractedStyle,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            source_type,
            word_count: text::count_words(raw_text),
            basic: extracted.basic,
            advanced: extracted.advanced,
        }
    }
}
