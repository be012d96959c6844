pub mod extractor;
pub mod merger;
pub mod quality_scorer;
pub mod refiner;

pub use extractor::IStyleExtractor;
pub use merger::IMerger;
pub use quality_scorer::IQualityScorer;
pub use refiner::{IRefiner, RefinementOutcome};
