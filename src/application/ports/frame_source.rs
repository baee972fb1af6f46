//! Camera frame capture port interface

use crate::domain::media::ImageFrame;
use async_trait::async_trait;
use thiserror::Error;

/// Frame capture errors
#[derive(Debug, Clone, Error)]
pub enum CaptureError {
    #[error("Camera functionality is not available.")]
    CameraUnavailable,

    #[error("ffmpeg not found. Please install ffmpeg to capture camera frames.")]
    FfmpegNotFound,

    #[error("Failed to capture frame: {0}")]
    CaptureFailed(String),

    #[error("Failed to read image: {0}")]
    ReadFailed(String),

    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),
}

/// Port interface for producing a single still frame of the surroundings
#[async_trait]
pub trait FrameSource: Send + Sync {
    /// Capture one frame.
    ///
    /// # Returns
    /// The captured frame or an error when no camera is usable
    async fn capture(&self) -> Result<ImageFrame, CaptureError>;
}

/// Blanket implementation for boxed frame sources
#[async_trait]
impl FrameSource for Box<dyn FrameSource> {
    async fn capture(&self) -> Result<ImageFrame, CaptureError> {
        self.as_ref().capture().await
    }
}
