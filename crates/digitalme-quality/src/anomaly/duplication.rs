use std::collections::HashSet;

use digitalme_core::text::{normalize_sentence, split_sentences};

/// Share of sentences whose normalized form already appeared earlier in the text.
/// 0.0 when the text has fewer than two sentences.
pub fn duplicate_sentence_ratio(text: &str) -> f64 {
    let sentences = split_sentences(text);
    if sentences.len() < 2 {
        return 0.0;
    }

    let mut seen = HashSet::with_capacity(sentences.len());
    let repeated = sentences
        .iter()
        .filter(|s| !seen.insert(normalize_sentence(s)))
        .count();

    repeated as f64 / sentences.len() as f64
}
