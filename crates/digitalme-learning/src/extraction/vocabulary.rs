//! TF-IDF over sentences for distinctive content words.

use std::collections::{HashMap, HashSet};

use digitalme_core::text::{is_stop_word, tokenize};

/// Top `limit` distinctive content words across `sentences`, most salient first.
/// Equal scores keep first-appearance order.
pub fn distinctive_terms(sentences: &[String], limit: usize) -> Vec<String> {
    if sentences.is_empty() || limit == 0 {
        return Vec::new();
    }

    let documents: Vec<Vec<String>> = sentences
        .iter()
        .map(|s| tokenize(s).into_iter().filter(|t| is_content_word(t)).collect())
        .collect();
    let n_docs = documents.len() as f64;

    let mut df: HashMap<&str, usize> = HashMap::new();
    for tokens in &documents {
        let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        for term in unique {
            *df.entry(term).or_insert(0) += 1;
        }
    }

    let mut order: Vec<&str> = Vec::new();
    let mut tf: HashMap<&str, usize> = HashMap::new();
    let mut total_terms = 0usize;
    for tokens in &documents {
        for token in tokens {
            let count = tf.entry(token.as_str()).or_insert(0);
            if *count == 0 {
                order.push(token.as_str());
            }
            *count += 1;
            total_terms += 1;
        }
    }
    if total_terms == 0 {
        return Vec::new();
    }

    let mut scored: Vec<(&str, f64)> = order
        .into_iter()
        .map(|term| {
            let count = tf.get(term).copied().unwrap_or(0) as f64;
            let doc_freq = df.get(term).copied().unwrap_or(1) as f64;
            let idf = (n_docs / doc_freq).ln() + 1.0;
            (term, count / total_terms as f64 * idf)
        })
        .collect();
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored
        .into_iter()
        .take(limit)
        .map(|(term, _)| term.to_string())
        .collect()
}

fn is_content_word(token: &str) -> bool {
    token.chars().count() >= 3
        && token.chars().all(char::is_alphabetic)
        && !is_stop_word(token)
}
