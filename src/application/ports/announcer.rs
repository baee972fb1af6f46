//! Speech announcement port interface

use async_trait::async_trait;
use thiserror::Error;

/// Announcement errors
#[derive(Debug, Clone, Error)]
pub enum AnnounceError {
    #[error("No speech tool available")]
    NoToolAvailable,

    #[error("Speech tool not found: {0}")]
    ToolNotFound(String),

    #[error("Failed to speak: {0}")]
    SpeechFailed(String),
}

/// Port for spoken feedback.
///
/// Call sites on the gesture path treat announcements as fire-and-forget:
/// a failed announcement is logged, never propagated into classifier state.
#[async_trait]
pub trait Announcer: Send + Sync {
    /// Speak the given text aloud.
    async fn announce(&self, text: &str) -> Result<(), AnnounceError>;
}

/// Blanket implementation for boxed announcer types
#[async_trait]
impl Announcer for Box<dyn Announcer> {
    async fn announce(&self, text: &str) -> Result<(), AnnounceError> {
        self.as_ref().announce(text).await
    }
}
