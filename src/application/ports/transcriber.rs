//! Voice transcription port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::media::VoiceClip;
use crate::domain::prompt::DictationPrompt;

/// Transcription errors
#[derive(Debug, Clone, Error)]
pub enum TranscriptionError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Empty audio response")]
    EmptyResponse,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("API error: {0}")]
    ApiError(String),
}

/// Port for speech-to-text conversion
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe a recorded voice clip into message text.
    ///
    /// # Arguments
    /// * `clip` - The recorded audio to transcribe
    /// * `prompt` - The dictation prompt controlling output form
    ///
    /// # Returns
    /// The transcribed text, trimmed; empty when nothing was said
    async fn transcribe(
        &self,
        clip: &VoiceClip,
        prompt: &DictationPrompt,
    ) -> Result<String, TranscriptionError>;
}
