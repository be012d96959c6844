use super::ExtractionError;

/// Profile refinement errors. None of these leave a partially-updated profile behind.
#[derive(Debug, thiserror::Error)]
pub enum RefinementError {
    #[error("learning is disabled for this profile")]
    LearningDisabled,

    #[error("invalid refinement batch: {reason}")]
    InvalidBatch { reason: String },

    #[error("refinement failed, profile preserved: {source}")]
    ExtractionFailed {
        #[source]
        source: ExtractionError,
    },
}
