//! Dictation prompt value object

/// Instruction sent with every recorded voice message.
const BASE_INSTRUCTION: &str = r#"You are a voice-to-text assistant transcribing a short spoken message that will be sent as chat text.

Instructions:
- Transcribe exactly what was said, cleaned up for readability
- Remove filler words (um, ah, like, you know)
- Capitalize the first letter and end sentences with proper punctuation
- Do NOT transcribe stutters, false starts, or repeated words
- Output ONLY the message text
- If the audio contains no intelligible speech, output nothing"#;

/// Value object carrying the full prompt for a dictation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictationPrompt {
    content: String,
}

impl DictationPrompt {
    /// The standard message-dictation prompt
    pub fn standard() -> Self {
        Self {
            content: BASE_INSTRUCTION.to_string(),
        }
    }

    /// Get the prompt content
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Default for DictationPrompt {
    fn default() -> Self {
        Self::standard()
    }
}
