//! Error handling for DigitalMe.
//! One error enum per subsystem, aggregated into [`DigitalMeError`].

pub mod config_error;
pub mod extraction_error;
pub mod merge_error;
pub mod refinement_error;

pub use config_error::ConfigError;
pub use extraction_error::ExtractionError;
pub use merge_error::MergeError;
pub use refinement_error::RefinementError;

/// Top-level error for every fallible engine operation.
#[derive(Debug, thiserror::Error)]
pub enum DigitalMeError {
    #[error("merge error: {0}")]
    MergeError(#[from] MergeError),

    #[error("refinement error: {0}")]
    RefinementError(#[from] RefinementError),

    #[error("extraction error: {0}")]
    ExtractionError(#[from] ExtractionError),

    #[error("configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("validation error: {0}")]
    ValidationError(String),

    #[error("profile not found: {id}")]
    ProfileNotFound { id: String },

    #[error("version conflict: expected {expected}, found {actual}")]
    VersionConflict { expected: u64, actual: u64 },

    #[error("profile lock poisoned: {id}")]
    LockPoisoned { id: String },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl DigitalMeError {
    /// True when the caller may retry the same operation unchanged.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::ExtractionError(e) => e.is_retryable(),
            Self::RefinementError(RefinementError::ExtractionFailed { source }) => {
                source.is_retryable()
            }
            Self::VersionConflict { .. } => true,
            _ => false,
        }
    }
}

/// Convenience alias used throughout the workspace.
pub type DigitalMeResult<T> = Result<T, DigitalMeError>;
