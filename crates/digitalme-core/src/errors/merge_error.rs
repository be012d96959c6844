/// Multi-source merge errors.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    #[error("no sources to merge")]
    NoSources,

    #[error("insufficient quality data: all {samples} samples carry zero weight")]
    InsufficientQualityData { samples: usize },
}
