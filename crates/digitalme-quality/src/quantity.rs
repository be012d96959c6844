use digitalme_core::config::QualityConfig;

/// Quantity multiplier for a sample of `word_count` words.
///
/// Band edges belong to the higher band: with defaults, 500 → 1.0 and 1500 → 1.5.
pub fn multiplier(config: &QualityConfig, word_count: u64) -> f64 {
    if word_count >= config.large_sample_words {
        config.large_sample_multiplier
    } else if word_count >= config.small_sample_words {
        config.medium_sample_multiplier
    } else {
        config.small_sample_multiplier
    }
}
