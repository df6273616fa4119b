//! Error types for carousel operations.

use thiserror::Error;

/// Carousel errors.
#[derive(Debug, Error)]
pub enum SlideError {
    #[error("Slide index {index} out of range for {len} slides")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Carousel has no slides")]
    EmptyTrack,
    #[error("Touch event carried no touch points")]
    MissingTouchPoint,
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for carousel operations.
pub type SlideResult<T> = Result<T, SlideError>;
