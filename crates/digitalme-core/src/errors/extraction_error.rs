/// Failures reported by a style extractor.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExtractionError {
    /// The analysis service could not be reached or timed out. Retryable.
    #[error("style analysis service unavailable: {reason}")]
    ServiceUnavailable { reason: String },

    /// The content itself cannot be analyzed (too short, no prose, garbage output).
    #[error("content unanalyzable: {reason}")]
    Unanalyzable { reason: String },
}

impl ExtractionError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ServiceUnavailable { .. })
    }
}
