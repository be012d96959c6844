use crate::errors::DigitalMeResult;
use crate::models::{ScoredSample, StyleProfile};

/// Multi-source merging into a single profile.
pub trait IMerger: Send + Sync {
    /// Build a fresh profile from every current source.
    fn merge(&self, samples: &[ScoredSample]) -> DigitalMeResult<StyleProfile>;

    /// Rebuild an existing profile from its full, current source list.
    /// Learning state survives; on error the profile is untouched.
    fn remerge(&self, profile: &mut StyleProfile, samples: &[ScoredSample])
        -> DigitalMeResult<()>;
}
