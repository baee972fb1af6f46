//! Gemini API scene describer adapter

use async_trait::async_trait;

use crate::application::ports::{DescribeError, SceneDescriber};
use crate::domain::media::ImageFrame;
use crate::domain::prompt::ScenePrompt;

use super::client::{Content, GeminiClient, GeminiError, GenerateContentRequest, GenerationConfig, Part};

/// Low temperature keeps descriptions factual rather than imaginative.
const DESCRIPTION_TEMPERATURE: f64 = 0.2;

/// Room for a full multi-paragraph walkthrough of the scene.
const DESCRIPTION_MAX_TOKENS: u32 = 2048;

impl From<GeminiError> for DescribeError {
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

/// Gemini API scene describer
pub struct GeminiSceneDescriber {
    client: GeminiClient,
}

impl GeminiSceneDescriber {
    /// Create a new describer for the given API key and model
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: GeminiClient::new(api_key, model),
        }
    }

    /// Create a describer pointed at a different endpoint
    pub fn with_base_url(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client: GeminiClient::with_base_url(api_key, model, base_url),
        }
    }

    pub fn model(&self) -> &str {
        self.client.model()
    }

    /// Build the request body.
    ///
    /// The instruction rides along as the first user part, ahead of the
    /// frame, instead of as a system instruction.
    fn build_request(&self, frame: &ImageFrame, prompt: &ScenePrompt) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![
                    Part::text(prompt.content()),
                    Part::inline(frame.format().as_mime(), frame.to_base64()),
                ],
            }],
            system_instruction: None,
            generation_config: Some(GenerationConfig {
                temperature: Some(DESCRIPTION_TEMPERATURE),
                max_output_tokens: Some(DESCRIPTION_MAX_TOKENS),
            }),
        }
    }
}

#[async_trait]
impl SceneDescriber for GeminiSceneDescriber {
    async fn describe(
        &self,
        frame: &ImageFrame,
        prompt: &ScenePrompt,
    ) -> Result<String, DescribeError> {
        let body = self.build_request(frame, prompt);
        let text = self.client.generate(&body).await?;
        Ok(text)
    }
}
