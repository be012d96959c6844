//! Style extraction: offline heuristics, and a composite that falls back to
//! them when an external extractor is unavailable.

pub mod fallback;
pub mod heuristic;
pub mod lexicon;
pub mod vocabulary;

pub use fallback::FallbackExtractor;
pub use heuristic::HeuristicExtractor;
