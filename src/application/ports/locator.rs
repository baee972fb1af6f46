//! Location port interface

use crate::domain::location::GeoPoint;
use async_trait::async_trait;
use thiserror::Error;

/// Location errors
#[derive(Debug, Clone, Error)]
pub enum LocateError {
    #[error("Location unavailable")]
    Unavailable,

    #[error("Location tracking not supported")]
    Unsupported,
}

/// Port interface for obtaining the user's current position.
///
/// SOS messages are sent regardless of the locator outcome; the two
/// error variants select which fallback text goes into the message.
#[async_trait]
pub trait Locator: Send + Sync {
    /// Get the best available position fix.
    async fn locate(&self) -> Result<GeoPoint, LocateError>;
}
