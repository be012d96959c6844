//! Structured log events for key profile operations.

/// Log a completed (re-)merge.
pub fn profile_merged(profile_id: &str, sources: usize, confidence: f64, version: u64) {
    tracing::info!(
        event = "profile_merged",
        profile_id = %profile_id,
        sources = sources,
        confidence = confidence,
        version = version,
        "profile merged"
    );
}

/// Log an applied refinement batch.
pub fn refinement_applied(profile_id: &str, words: u64, confidence_change: f64, version: u64) {
    tracing::info!(
        event = "refinement_applied",
        profile_id = %profile_id,
        words = words,
        confidence_change = confidence_change,
        version = version,
        "refinement applied"
    );
}

/// Log a rejected optimistic write.
pub fn version_conflict(profile_id: &str, expected: u64, actual: u64) {
    tracing::warn!(
        event = "version_conflict",
        profile_id = %profile_id,
        expected = expected,
        actual = actual,
        "version conflict"
    );
}

/// Log idle profiles dropped from the store.
pub fn profiles_evicted(profile_ids: &[String]) {
    tracing::info!(
        event = "profiles_evicted",
        count = profile_ids.len(),
        profile_ids = ?profile_ids,
        "idle profiles evicted"
    );
}
