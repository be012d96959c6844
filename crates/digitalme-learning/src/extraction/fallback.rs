//! Primary extractor with an offline fallback for retryable failures.

use tracing::warn;

use digitalme_core::errors::ExtractionError;
use digitalme_core::models::ExtractedStyle;
use digitalme_core::traits::IStyleExtractor;

use super::heuristic::HeuristicExtractor;

/// Tries `primary` first. A retryable failure (service unavailable) falls
/// through to `fallback`; content errors are returned as-is.
pub struct FallbackExtractor {
    primary: Box<dyn IStyleExtractor>,
    fallback: Box<dyn IStyleExtractor>,
}

impl FallbackExtractor {
    pub fn new(primary: Box<dyn IStyleExtractor>, fallback: Box<dyn IStyleExtractor>) -> Self {
        Self { primary, fallback }
    }

    /// Fall back to the offline heuristics.
    pub fn with_heuristic(primary: Box<dyn IStyleExtractor>) -> Self {
        Self::new(primary, Box::new(HeuristicExtractor::new()))
    }
}

impl IStyleExtractor for FallbackExtractor {
    fn extract(&self, text: &str) -> Result<ExtractedStyle, ExtractionError> {
        match self.primary.extract(text) {
            Ok(style) => Ok(style),
            Err(error) if error.is_retryable() => {
                warn!(
                    primary = self.primary.name(),
                    fallback = self.fallback.name(),
                    %error,
                    "primary extractor unavailable, falling back"
                );
                self.fallback.extract(text)
            }
            Err(error) => Err(error),
        }
    }

    fn name(&self) -> &str {
        "fallback"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use digitalme_core::models::{Formality, SentenceLength, Tone};
    use test_fixtures::{basic, extracted, FailingExtractor, FixedExtractor};

    fn fixed() -> FixedExtractor {
        FixedExtractor::new(extracted(basic(
            Tone::Analytical,
            Formality::Formal,
            SentenceLength::Long,
        )))
    }

    #[test]
    fn uses_primary_when_available() {
        let extractor = FallbackExtractor::new(Box::new(fixed()), Box::new(FailingExtractor::unanalyzable()));
        let style = extractor.extract("some words to analyze here").unwrap();
        assert_eq!(style.basic.tone, Tone::Analytical);
    }

    #[test]
    fn falls_back_on_unavailable() {
        let extractor = FallbackExtractor::new(Box::new(FailingExtractor::unavailable()), Box::new(fixed()));
        let style = extractor.extract("some words to analyze here").unwrap();
        assert_eq!(style.basic.formality, Formality::Formal);
    }

    #[test]
    fn content_errors_are_not_retried() {
        let extractor = FallbackExtractor::new(Box::new(FailingExtractor::unanalyzable()), Box::new(fixed()));
        let err = extractor.extract("some words to analyze here").unwrap_err();
        assert!(matches!(err, ExtractionError::Unanalyzable { .. }));
    }

    #[test]
    fn heuristic_fallback_handles_real_text() {
        let extractor = FallbackExtractor::with_heuristic(Box::new(FailingExtractor::unavailable()));
        let style = extractor
            .extract("Thanks so much for the help, I really appreciate it.")
            .unwrap();
        assert_eq!(style.basic.tone, Tone::Friendly);
    }
}
