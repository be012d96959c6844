use crate::errors::ExtractionError;
use crate::models::ExtractedStyle;

/// Turns raw text into structured style attributes.
///
/// Implementations usually call an external text-analysis service; the engine
/// only interprets the structured result.
pub trait IStyleExtractor: Send + Sync {
    fn extract(&self, text: &str) -> Result<ExtractedStyle, ExtractionError>;

    /// Short name for logs.
    fn name(&self) -> &str {
        "extractor"
    }
}
