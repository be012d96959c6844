use std::collections::HashSet;

use digitalme_core::text::tokenize;

/// Distinct lowercase tokens divided by total tokens.
///
/// Text without tokens reports 1.0: there is no evidence of repetition.
pub fn unique_word_ratio(text: &str) -> f64 {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        return 1.0;
    }
    let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();
    distinct.len() as f64 / tokens.len() as f64
}
