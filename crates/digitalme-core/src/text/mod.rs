//! Text utilities shared by the quality scorer, the refiner and the extractors.

pub mod sentence_splitter;
pub mod tokenizer;

pub use sentence_splitter::{normalize_sentence, split_sentences};
pub use tokenizer::{count_words, is_stop_word, normalize_term, tokenize};

/// blake3 hex digest of a text, used to identify refinement batches.
pub fn content_hash(text: &str) -> String {
    blake3::hash(text.as_bytes()).to_hex().to_string()
}
