pub mod advanced;
pub mod attributes;
pub mod confidence;
pub mod delta;
pub mod profile;
pub mod quality;
pub mod sample;
pub mod source;
pub mod term_set;

pub use advanced::{
    AdvancedStyle, ContextVocabulary, PersonalityMarker, SignaturePhrase, ThoughtPatterns,
};
pub use attributes::{
    Formality, MarkerType, PhraseCategory, SentenceLength, StyleAttribute, Tone,
    TransitionStyle,
};
pub use confidence::Confidence;
pub use delta::{AttributeChange, AttributeValue, ConfidenceShift, DeltaReport};
pub use profile::{Contribution, LearningMetadata, ResolvedStyle, SampleCount, StyleProfile};
pub use quality::{AnomalyFlag, QualityAssessment, QualitySummary, ScoredSample};
pub use sample::{BasicStyle, ExtractedStyle, StyleSample};
pub use source::SourceType;
pub use term_set::{TermSet, WeightedTerm};
