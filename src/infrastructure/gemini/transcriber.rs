//! Gemini API transcriber adapter

use async_trait::async_trait;

use crate::application::ports::{Transcriber, TranscriptionError};
use crate::domain::media::VoiceClip;
use crate::domain::prompt::DictationPrompt;

use super::client::{
    Content, GeminiClient, GeminiError, GenerateContentRequest, Part, SystemInstruction,
};

impl From<GeminiError> for TranscriptionError {
    fn from(error: GeminiError) -> Self {
        match error {
            GeminiError::InvalidApiKey => Self::InvalidApiKey,
            GeminiError::RateLimited => Self::RateLimited,
            GeminiError::EmptyResponse => Self::EmptyResponse,
            GeminiError::RequestFailed(e) => Self::RequestFailed(e),
            GeminiError::ParseError(e) => Self::ParseError(e),
            GeminiError::ApiError(e) => Self::ApiError(e),
        }
    }
}

/// Gemini API transcriber
pub struct GeminiTranscriber {
    client: GeminiClient,
}

impl GeminiTranscriber {
    /// Create a new transcriber for the given API key and model
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: GeminiClient::new(api_key, model),
        }
    }

    /// Create a transcriber pointed at a different endpoint
    pub fn with_base_url(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client: GeminiClient::with_base_url(api_key, model, base_url),
        }
    }

    /// Build the request body
    fn build_request(&self, clip: &VoiceClip, prompt: &DictationPrompt) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part::inline(clip.format().as_mime(), clip.to_base64())],
            }],
            system_instruction: Some(SystemInstruction::from_text(prompt.content())),
            generation_config: None,
        }
    }
}

#[async_trait]
impl Transcriber for GeminiTranscriber {
    async fn transcribe(
        &self,
        clip: &VoiceClip,
        prompt: &DictationPrompt,
    ) -> Result<String, TranscriptionError> {
        let body = self.build_request(clip, prompt);

        match self.client.generate(&body).await {
            Ok(text) => Ok(text),
            // A silent clip comes back empty; the caller treats that as
            // "nothing to send", not a failure.
            Err(GeminiError::EmptyResponse) => Ok(String::new()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::AudioFormat;

    #[test]
    fn build_request_has_correct_structure() {
        let transcriber = GeminiTranscriber::new("test-key", "gemini-1.5-pro");
        let clip = VoiceClip::new(vec![1, 2, 3], AudioFormat::Ogg);
        let prompt = DictationPrompt::standard();

        let request = transcriber.build_request(&clip, &prompt);

        assert_eq!(request.contents.len(), 1);
        assert_eq!(request.contents[0].role, "user");
        assert!(request.contents[0].parts[0].inline_data.is_some());
        assert!(request.system_instruction.is_some());
        assert!(request.generation_config.is_none());
    }

    #[test]
    fn inline_data_carries_the_clip_mime_type() {
        let transcriber = GeminiTranscriber::new("test-key", "gemini-1.5-pro");
        let clip = VoiceClip::new(vec![1, 2, 3], AudioFormat::Wav);
        let prompt = DictationPrompt::standard();

        let request = transcriber.build_request(&clip, &prompt);
        let inline = request.contents[0].parts[0].inline_data.as_ref().unwrap();

        assert_eq!(inline.mime_type, "audio/wav");
    }
}
