use digitalme_core::config::ConfidenceConfig;

use crate::curve;
use crate::inputs::ConfidenceInputs;

/// Additive confidence formula.
///
/// ```text
/// confidence = base(total_words)
///   + source_type_bonus   (≥ 2 source types)
///   + multi_source_bonus  (≥ 2 sources)
///   + advanced_bonus      (advanced data present)
///   − spam_penalty × spam_fraction
///   − low_diversity_penalty × low_diversity_fraction
/// ```
///
/// Result is clamped to [0.0, ceiling].
pub fn compute(config: &ConfidenceConfig, inputs: &ConfidenceInputs) -> f64 {
    compute_breakdown(config, inputs).final_confidence
}

/// Each term of the formula, for logging and tests.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfidenceBreakdown {
    pub base: f64,
    pub source_type_bonus: f64,
    pub multi_source_bonus: f64,
    pub advanced_bonus: f64,
    /// Subtracted amount, already scaled by the spam fraction.
    pub spam_penalty: f64,
    /// Subtracted amount, already scaled by the low-diversity fraction.
    pub low_diversity_penalty: f64,
    pub final_confidence: f64,
}

/// Compute confidence with a full breakdown of each term.
pub fn compute_breakdown(config: &ConfidenceConfig, inputs: &ConfidenceInputs) -> ConfidenceBreakdown {
    let base = curve::base_confidence(inputs.total_words);
    let source_type_bonus = if inputs.source_types >= 2 {
        config.source_type_diversity_bonus
    } else {
        0.0
    };
    let multi_source_bonus = if inputs.sources >= 2 {
        config.multi_source_bonus
    } else {
        0.0
    };
    let advanced_bonus = if inputs.advanced_present {
        config.advanced_data_bonus
    } else {
        0.0
    };
    let spam_penalty = config.spam_penalty * fraction(inputs.spam_fraction);
    let low_diversity_penalty = config.low_diversity_penalty * fraction(inputs.low_diversity_fraction);

    let raw = base + source_type_bonus + multi_source_bonus + advanced_bonus
        - spam_penalty
        - low_diversity_penalty;

    ConfidenceBreakdown {
        base,
        source_type_bonus,
        multi_source_bonus,
        advanced_bonus,
        spam_penalty,
        low_diversity_penalty,
        final_confidence: raw.clamp(0.0, config.ceiling),
    }
}

fn fraction(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
