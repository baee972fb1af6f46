//! Visual feedback port interface

use async_trait::async_trait;
use thiserror::Error;

/// Feedback display errors
#[derive(Debug, Clone, Error)]
pub enum FeedbackError {
    #[error("Failed to display feedback: {0}")]
    DisplayFailed(String),
}

/// Urgency level of a feedback message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackLevel {
    Info,
    Alert,
}

impl FeedbackLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackLevel::Info => "info",
            FeedbackLevel::Alert => "alert",
        }
    }
}

/// Port for on-screen feedback shown alongside spoken announcements.
///
/// Mirrors each announcement in visible form for users relying on
/// residual vision or a sighted helper.
#[async_trait]
pub trait FeedbackPanel: Send + Sync {
    /// Show a short feedback message.
    ///
    /// # Arguments
    /// * `message` - Text to display
    /// * `level` - Urgency of the message
    async fn show(&self, message: &str, level: FeedbackLevel) -> Result<(), FeedbackError>;
}

/// Blanket implementation for boxed feedback types
#[async_trait]
impl FeedbackPanel for Box<dyn FeedbackPanel> {
    async fn show(&self, message: &str, level: FeedbackLevel) -> Result<(), FeedbackError> {
        self.as_ref().show(message, level).await
    }
}
