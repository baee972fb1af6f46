//! SOS emergency use case

use thiserror::Error;

use crate::domain::messaging::{Message, MessageKind, Sender};

use super::ports::{
    Announcer, FeedbackLevel, FeedbackPanel, LocateError, Locator, MessageStore, MessageStoreError,
};

/// Errors from the SOS use case
#[derive(Debug, Error)]
pub enum SosError {
    #[error("Failed to store SOS message: {0}")]
    Store(#[from] MessageStoreError),
}

/// Result of an SOS activation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SosActivation {
    /// Content of the message sent to the admin
    pub message_content: String,
    /// Whether a position fix made it into the message
    pub located: bool,
}

/// Hold-gesture emergency workflow.
///
/// Activation always sends a message; the locator outcome only decides
/// whether the message carries a map link or a fallback notice.
pub struct SosUseCase<L, S, A, P>
where
    L: Locator,
    S: MessageStore,
    A: Announcer,
    P: FeedbackPanel,
{
    locator: L,
    store: S,
    announcer: A,
    feedback: P,
}

impl<L, S, A, P> SosUseCase<L, S, A, P>
where
    L: Locator,
    S: MessageStore,
    A: Announcer,
    P: FeedbackPanel,
{
    /// Create a new use case instance
    pub fn new(locator: L, store: S, announcer: A, feedback: P) -> Self {
        Self {
            locator,
            store,
            announcer,
            feedback,
        }
    }

    /// Activate SOS: send a tagged message and confirm aloud.
    pub async fn activate(&self) -> Result<SosActivation, SosError> {
        let (content, notice, spoken, located) = match self.locator.locate().await {
            Ok(point) => (
                format!("SOS ACTIVATED! Location: {}", point.maps_url()),
                "SOS activated! Your location has been sent to admin.",
                "SOS mode activated. Your location has been sent to the admin. Hold again to cancel.",
                true,
            ),
            Err(LocateError::Unavailable) => (
                "SOS ACTIVATED! Location unavailable.".to_string(),
                "SOS activated! Location unavailable.",
                "SOS mode activated. Location unavailable. Hold again to cancel.",
                false,
            ),
            Err(LocateError::Unsupported) => (
                "SOS ACTIVATED! Location tracking not supported.".to_string(),
                "SOS activated! Location tracking not supported.",
                "SOS mode activated. Location tracking not supported. Hold again to cancel.",
                false,
            ),
        };

        self.store
            .append(Message::tagged(Sender::Client, content.clone(), MessageKind::Sos))
            .await?;

        let _ = self.feedback.show(notice, FeedbackLevel::Alert).await;
        let _ = self.announcer.announce(spoken).await;

        Ok(SosActivation {
            message_content: content,
            located,
        })
    }

    /// Stand down: send the cancellation marker and confirm aloud.
    pub async fn cancel(&self) -> Result<(), SosError> {
        self.store
            .append(Message::tagged(
                Sender::Client,
                "SOS CANCELLED",
                MessageKind::SosCancel,
            ))
            .await?;

        let _ = self.feedback.show("SOS cancelled", FeedbackLevel::Info).await;
        let _ = self.announcer.announce("SOS mode cancelled").await;

        Ok(())
    }
}
