//! Enumerated style attributes produced by extractors and resolved by the merge engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Overall emotional register of the writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Casual,
    Professional,
    Friendly,
    Enthusiastic,
    Analytical,
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Self::Casual,
        Self::Professional,
        Self::Friendly,
        Self::Enthusiastic,
        Self::Analytical,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Casual => "casual",
            Self::Professional => "professional",
            Self::Friendly => "friendly",
            Self::Enthusiastic => "enthusiastic",
            Self::Analytical => "analytical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Formality {
    Informal,
    Neutral,
    Formal,
}

impl Formality {
    pub const ALL: [Formality; 3] = [Self::Informal, Self::Neutral, Self::Formal];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Informal => "informal",
            Self::Neutral => "neutral",
            Self::Formal => "formal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum SentenceLength {
    Short,
    Medium,
    Long,
}

impl SentenceLength {
    pub const ALL: [SentenceLength; 3] = [Self::Short, Self::Medium, Self::Long];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }
}

/// How the writer moves between ideas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum TransitionStyle {
    Abrupt,
    Smooth,
    Varied,
}

impl TransitionStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Abrupt => "abrupt",
            Self::Smooth => "smooth",
            Self::Varied => "varied",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum PhraseCategory {
    Opener,
    Closer,
    Transition,
    Filler,
    Emphasis,
    Expression,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum MarkerType {
    Humor,
    Empathy,
    Enthusiasm,
    Hedging,
    Directness,
}

/// The basic attributes that carry confidence, attribution and refinement.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum StyleAttribute {
    Tone,
    Formality,
    SentenceLength,
    Vocabulary,
    Avoidance,
}

impl StyleAttribute {
    pub const COUNT: usize = 5;

    pub const ALL: [StyleAttribute; Self::COUNT] = [
        Self::Tone,
        Self::Formality,
        Self::SentenceLength,
        Self::Vocabulary,
        Self::Avoidance,
    ];

    /// Single-valued attributes resolved by weighted vote.
    pub const ENUMS: [StyleAttribute; 3] = [Self::Tone, Self::Formality, Self::SentenceLength];

    /// Bounded term sets.
    pub const SETS: [StyleAttribute; 2] = [Self::Vocabulary, Self::Avoidance];

    pub fn is_set(self) -> bool {
        matches!(self, Self::Vocabulary | Self::Avoidance)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tone => "tone",
            Self::Formality => "formality",
            Self::SentenceLength => "sentence_length",
            Self::Vocabulary => "vocabulary",
            Self::Avoidance => "avoidance",
        }
    }
}

impl fmt::Display for StyleAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
