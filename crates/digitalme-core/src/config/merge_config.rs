use serde::{Deserialize, Serialize};

use super::defaults;

/// Merge engine caps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Vocabulary and avoidance cap.
    pub max_set_terms: usize,
    pub max_signature_phrases: usize,
    pub max_personality_markers: usize,
    /// Vocabulary cap per context name.
    pub max_context_vocabulary: usize,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            max_set_terms: defaults::DEFAULT_MAX_SET_TERMS,
            max_signature_phrases: defaults::DEFAULT_MAX_SIGNATURE_PHRASES,
            max_personality_markers: defaults::DEFAULT_MAX_PERSONALITY_MARKERS,
            max_context_vocabulary: defaults::DEFAULT_MAX_CONTEXT_VOCABULARY,
        }
    }
}
