//! Extractors with scripted behavior.

use std::sync::atomic::{AtomicUsize, Ordering};

use digitalme_core::errors::ExtractionError;
use digitalme_core::models::ExtractedStyle;
use digitalme_core::traits::IStyleExtractor;

/// Always returns the same style, and counts calls.
pub struct FixedExtractor {
    style: ExtractedStyle,
    calls: AtomicUsize,
}

impl FixedExtractor {
    pub fn new(style: ExtractedStyle) -> Self {
        Self {
            style,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IStyleExtractor for FixedExtractor {
    fn extract(&self, _text: &str) -> Result<ExtractedStyle, ExtractionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.style.clone())
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

/// Always fails with the given error, and counts calls.
pub struct FailingExtractor {
    error: ExtractionError,
    calls: AtomicUsize,
}

impl FailingExtractor {
    pub fn new(error: ExtractionError) -> Self {
        Self {
            error,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn unavailable() -> Self {
        Self::new(ExtractionError::ServiceUnavailable {
            reason: "upstream timed out".to_string(),
        })
    }

    pub fn unanalyzable() -> Self {
        Self::new(ExtractionError::Unanalyzable {
            reason: "no prose found".to_string(),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IStyleExtractor for FailingExtractor {
    fn extract(&self, _text: &str) -> Result<ExtractedStyle, ExtractionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(self.error.clone())
    }

    fn name(&self) -> &str {
        "failing"
    }
}
