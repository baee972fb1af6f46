//! Scene description port interface

use crate::domain::media::ImageFrame;
use crate::domain::prompt::ScenePrompt;
use async_trait::async_trait;
use thiserror::Error;

/// Scene description errors
#[derive(Debug, Clone, Error)]
pub enum DescribeError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("API rate limit exceeded")]
    RateLimited,

    #[error("Empty response from description service")]
    EmptyResponse,

    #[error("Description request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse description response: {0}")]
    ParseError(String),

    #[error("Description API error: {0}")]
    ApiError(String),
}

/// Port interface for turning a camera frame into spoken-ready prose
#[async_trait]
pub trait SceneDescriber: Send + Sync {
    /// Describe the surroundings captured in a single frame.
    ///
    /// # Arguments
    /// * `frame` - Captured image to describe
    /// * `prompt` - Instruction controlling tone and detail
    ///
    /// # Returns
    /// Description text suitable for reading aloud
    async fn describe(&self, frame: &ImageFrame, prompt: &ScenePrompt)
        -> Result<String, DescribeError>;
}
