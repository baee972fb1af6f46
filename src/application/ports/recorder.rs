//! Voice recording port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::media::VoiceClip;

/// Recording errors
#[derive(Debug, Clone, Error)]
pub enum RecordingError {
    #[error("Failed to start recording: {0}")]
    StartFailed(String),

    #[error("Recording failed: {0}")]
    RecordingFailed(String),

    #[error("Failed to read audio file: {0}")]
    ReadFailed(String),

    #[error("Recording was cancelled")]
    Cancelled,

    #[error("Voice recording is not available on this device.")]
    NoAudioDevice,
}

/// Port for double-tap controlled voice recording.
///
/// A dictation session starts recording on one double tap and stops on
/// the next, so the recorder is signal-controlled rather than bounded by
/// a fixed duration.
#[async_trait]
pub trait VoiceRecorder: Send + Sync {
    /// Start a recording session.
    async fn start(&self) -> Result<(), RecordingError>;

    /// Stop the recording and return the captured clip.
    ///
    /// # Returns
    /// The recorded voice clip or an error
    async fn stop(&self) -> Result<VoiceClip, RecordingError>;

    /// Cancel the recording without returning data.
    async fn cancel(&self) -> Result<(), RecordingError>;

    /// Check if currently recording
    fn is_recording(&self) -> bool;

    /// Get elapsed recording time in milliseconds
    fn elapsed_ms(&self) -> u64;
}
