//! Confidence-weighted update rules for a single refinement batch.

pub mod sets;

use digitalme_core::config::RefinementConfig;
use digitalme_core::models::Confidence;

pub use sets::{reinforce_set, SetUpdate};

/// Per-attribute movement budget for one batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Movement {
    /// Maximum movement the attribute's confidence allows.
    pub allotment: f64,
    /// Allotment scaled by batch size and anomaly penalty.
    pub scaled: f64,
}

impl Movement {
    /// Budget for an attribute at `confidence`, for a batch of `words` words
    /// whose quality carried `anomaly_penalty`.
    pub fn for_attribute(
        config: &RefinementConfig,
        confidence: Confidence,
        words: u64,
        anomaly_penalty: f64,
    ) -> Self {
        let allotment = allotment(config, confidence);
        let size = (words as f64 / config.full_movement_words as f64).min(1.0);
        Self {
            allotment,
            scaled: allotment * size * anomaly_penalty.clamp(0.0, 1.0),
        }
    }

    /// Whether the movement is large enough to replace an enum value.
    pub fn switches_enum(&self, config: &RefinementConfig) -> bool {
        self.scaled > config.enum_switch_fraction * self.allotment
    }
}

/// Confident attributes get a smaller allotment.
pub fn allotment(config: &RefinementConfig, confidence: Confidence) -> f64 {
    let c = confidence.value();
    if c < config.low_confidence_edge {
        config.low_confidence_allotment
    } else if c < config.high_confidence_edge {
        config.medium_confidence_allotment
    } else {
        config.high_confidence_allotment
    }
}

/// `current + gain × scaled × (1 − current)`, capped at `ceiling`.
pub fn raise_confidence(current: Confidence, scaled: f64, gain: f64, ceiling: f64) -> Confidence {
    let c = current.value();
    let next = c + gain * scaled * (1.0 - c);
    Confidence::new(next.min(ceiling))
}
