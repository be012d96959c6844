use crate::errors::DigitalMeResult;
use crate::models::{DeltaReport, StyleProfile};

/// Result of a refinement call that did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum RefinementOutcome {
    /// The batch was learned from and the profile updated.
    Applied(DeltaReport),
    /// Too little text to learn from; the profile is unchanged.
    InsufficientSignal(DeltaReport),
}

impl RefinementOutcome {
    pub fn delta(&self) -> &DeltaReport {
        match self {
            Self::Applied(delta) | Self::InsufficientSignal(delta) => delta,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// Incremental profile learning from conversation.
pub trait IRefiner: Send + Sync {
    /// Refine `profile` from a batch of messages. On error the profile is unchanged.
    fn refine(
        &self,
        profile: &mut StyleProfile,
        batch: &[String],
    ) -> DigitalMeResult<RefinementOutcome>;
}
