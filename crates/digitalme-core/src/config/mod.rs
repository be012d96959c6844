//! Engine configuration. Every tunable weight, band edge and threshold lives here.

pub mod confidence_config;
pub mod defaults;
pub mod merge_config;
pub mod observability_config;
pub mod quality_config;
pub mod refinement_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use confidence_config::ConfidenceConfig;
pub use merge_config::MergeConfig;
pub use observability_config::ObservabilityConfig;
pub use quality_config::{QualityConfig, SourcePriors};
pub use refinement_config::RefinementConfig;

use crate::constants::{
    CONFIDENCE_CEILING, MAX_CONTEXT_VOCABULARY, MAX_PERSONALITY_MARKERS, MAX_SIGNATURE_PHRASES,
    MAX_TERM_SET_SIZE,
};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Missing sections and keys fall back to the compiled defaults in [`defaults`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DigitalMeConfig {
    pub quality: QualityConfig,
    pub merge: MergeConfig,
    pub confidence: ConfidenceConfig,
    pub refinement: RefinementConfig,
    pub observability: ObservabilityConfig,
}

impl DigitalMeConfig {
    /// Load configuration from a TOML string and validate it.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file and validate it.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let q = &self.quality;
        for (field, prior) in [
            ("quality.priors.text", q.priors.text),
            ("quality.priors.gmail", q.priors.gmail),
            ("quality.priors.github", q.priors.github),
            ("quality.priors.blog", q.priors.blog),
            ("quality.priors.conversation", q.priors.conversation),
        ] {
            check_range(field, prior, 0.0, 1.0)?;
        }
        if q.small_sample_words >= q.large_sample_words {
            return Err(invalid(
                "quality.small_sample_words",
                "must be lower than quality.large_sample_words",
            ));
        }
        if !(q.small_sample_multiplier <= q.medium_sample_multiplier
            && q.medium_sample_multiplier <= q.large_sample_multiplier)
        {
            return Err(invalid(
                "quality.medium_sample_multiplier",
                "quantity multipliers must be non-decreasing",
            ));
        }
        check_range("quality.large_sample_multiplier", q.large_sample_multiplier, 0.0, 1.5)?;
        check_range("quality.spam_duplicate_ratio", q.spam_duplicate_ratio, 0.0, 1.0)?;
        check_range("quality.spam_penalty", q.spam_penalty, 0.0, 1.0)?;
        check_range("quality.min_unique_word_ratio", q.min_unique_word_ratio, 0.0, 1.0)?;
        check_range("quality.low_diversity_penalty", q.low_diversity_penalty, 0.0, 1.0)?;

        let m = &self.merge;
        for (field, cap, limit) in [
            ("merge.max_set_terms", m.max_set_terms, MAX_TERM_SET_SIZE),
            ("merge.max_signature_phrases", m.max_signature_phrases, MAX_SIGNATURE_PHRASES),
            ("merge.max_personality_markers", m.max_personality_markers, MAX_PERSONALITY_MARKERS),
            ("merge.max_context_vocabulary", m.max_context_vocabulary, MAX_CONTEXT_VOCABULARY),
        ] {
            if cap == 0 || cap > limit {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: format!("must be between 1 and {limit}, got {cap}"),
                });
            }
        }

        let c = &self.confidence;
        check_range("confidence.ceiling", c.ceiling, 0.0, CONFIDENCE_CEILING)?;
        check_range("confidence.spam_penalty", c.spam_penalty, 0.0, 1.0)?;
        check_range("confidence.low_diversity_penalty", c.low_diversity_penalty, 0.0, 1.0)?;

        let r = &self.refinement;
        if r.max_batch_messages == 0 || r.max_message_chars == 0 || r.max_batch_chars == 0 {
            return Err(invalid("refinement", "batch limits must be greater than 0"));
        }
        if r.full_movement_words == 0 {
            return Err(invalid("refinement.full_movement_words", "must be greater than 0"));
        }
        if r.low_confidence_edge >= r.high_confidence_edge {
            return Err(invalid(
                "refinement.low_confidence_edge",
                "must be lower than refinement.high_confidence_edge",
            ));
        }
        check_range("refinement.high_confidence_edge", r.high_confidence_edge, 0.0, 1.0)?;
        for (field, value) in [
            ("refinement.low_confidence_allotment", r.low_confidence_allotment),
            ("refinement.medium_confidence_allotment", r.medium_confidence_allotment),
            ("refinement.high_confidence_allotment", r.high_confidence_allotment),
            ("refinement.enum_switch_fraction", r.enum_switch_fraction),
            ("refinement.min_term_inclusion", r.min_term_inclusion),
            ("refinement.confidence_gain", r.confidence_gain),
        ] {
            check_range(field, value, 0.0, 1.0)?;
        }
        Ok(())
    }
}

fn check_range(field: &str, value: f64, min: f64, max: f64) -> Result<(), ConfigError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: format!("must be between {min} and {max}, got {value}"),
        })
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
