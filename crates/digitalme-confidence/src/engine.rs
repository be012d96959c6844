use digitalme_core::config::ConfidenceConfig;
use digitalme_core::models::{Confidence, StyleProfile};

use crate::formula::{self, ConfidenceBreakdown};
use crate::inputs::ConfidenceInputs;

/// Confidence model over a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfidenceModel {
    config: ConfidenceConfig,
}

impl ConfidenceModel {
    pub fn new(config: ConfidenceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConfidenceConfig {
        &self.config
    }

    pub fn compute(&self, inputs: &ConfidenceInputs) -> f64 {
        formula::compute(&self.config, inputs)
    }

    pub fn compute_breakdown(&self, inputs: &ConfidenceInputs) -> ConfidenceBreakdown {
        formula::compute_breakdown(&self.config, inputs)
    }

    /// Overall confidence a profile's current counts and quality summary support.
    pub fn for_profile(&self, profile: &StyleProfile) -> Confidence {
        Confidence::new(self.compute(&ConfidenceInputs::from_profile(profile)))
    }
}
