//! Span definitions per operation: merge, refinement, quality scoring, store access.

/// Create a merge span.
#[macro_export]
macro_rules! merge_span {
    ($profile_id:expr, $sources:expr) => {
        tracing::info_span!("digitalme.merge", profile_id = %$profile_id, sources = $sources)
    };
}

/// Create a refinement span.
#[macro_export]
macro_rules! refinement_span {
    ($profile_id:expr, $messages:expr) => {
        tracing::info_span!("digitalme.refinement", profile_id = %$profile_id, messages = $messages)
    };
}

/// Create a quality-scoring span.
#[macro_export]
macro_rules! quality_span {
    ($source_type:expr, $word_count:expr) => {
        tracing::info_span!("digitalme.quality", source_type = %$source_type, word_count = $word_count)
    };
}

/// Create a profile-store span.
#[macro_export]
macro_rules! store_span {
    ($operation:expr, $profile_id:expr) => {
        tracing::debug_span!("digitalme.store", operation = %$operation, profile_id = %$profile_id)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const MERGE: &str = "digitalme.merge";
    pub const REFINEMENT: &str = "digitalme.refinement";
    pub const QUALITY: &str = "digitalme.quality";
    pub const STORE: &str = "digitalme.store";
}
