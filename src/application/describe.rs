//! Scene description use case

use thiserror::Error;

use crate::domain::prompt::ScenePrompt;

use super::ports::{
    Announcer, CaptureError, DescribeError, FeedbackLevel, FeedbackPanel, FrameSource,
    SceneDescriber,
};

/// Errors from the describe use case
#[derive(Debug, Error)]
pub enum DescribeSceneError {
    #[error("Capture failed: {0}")]
    Capture(#[from] CaptureError),

    #[error("Description failed: {0}")]
    Description(#[from] DescribeError),

    #[error("Missing API key. Set GEMINI_API_KEY or configure via 'vision-voice config set api_key <key>'")]
    MissingApiKey,
}

/// Spoken line for a failed describe cycle.
pub fn spoken_error_line(error: &DescribeSceneError) -> &'static str {
    match error {
        DescribeSceneError::Capture(_) => "Camera functionality is not available.",
        DescribeSceneError::Description(DescribeError::InvalidApiKey) => {
            "API configuration error. Please check the Gemini API key."
        }
        DescribeSceneError::Description(DescribeError::EmptyResponse) => {
            "I couldn't analyze what's around you. Please try again in better lighting."
        }
        DescribeSceneError::Description(_) => "Error analyzing image. Please try again.",
        DescribeSceneError::MissingApiKey => {
            "API configuration error. Please check the Gemini API key."
        }
    }
}

/// Output from the describe use case
#[derive(Debug, Clone)]
pub struct DescribeOutput {
    /// The scene description
    pub description: String,
    /// Captured frame size in human-readable format
    pub frame_size: String,
}

/// Callbacks for progress and status updates
#[derive(Default)]
pub struct DescribeCallbacks {
    /// Called when frame capture starts
    pub on_capture_start: Option<Box<dyn Fn() + Send + Sync>>,
    /// Called when frame capture ends, with the frame size
    pub on_capture_end: Option<Box<dyn Fn(&str) + Send + Sync>>,
    /// Called when the description request starts
    pub on_describe_start: Option<Box<dyn Fn() + Send + Sync>>,
    /// Called when the description request ends
    pub on_describe_end: Option<Box<dyn Fn() + Send + Sync>>,
}

/// One-shot scene description use case
pub struct DescribeSceneUseCase<F, D, A, P>
where
    F: FrameSource,
    D: SceneDescriber,
    A: Announcer,
    P: FeedbackPanel,
{
    frames: F,
    describer: D,
    announcer: A,
    feedback: P,
}

impl<F, D, A, P> DescribeSceneUseCase<F, D, A, P>
where
    F: FrameSource,
    D: SceneDescriber,
    A: Announcer,
    P: FeedbackPanel,
{
    /// Create a new use case instance
    pub fn new(frames: F, describer: D, announcer: A, feedback: P) -> Self {
        Self {
            frames,
            describer,
            announcer,
            feedback,
        }
    }

    /// Execute the capture-and-describe workflow.
    ///
    /// Every stage is narrated through the announcer; failures are spoken
    /// before the error is returned.
    pub async fn execute(
        &self,
        callbacks: DescribeCallbacks,
    ) -> Result<DescribeOutput, DescribeSceneError> {
        let _ = self
            .announcer
            .announce("Opening camera to describe what is around you.")
            .await;

        if let Some(ref cb) = callbacks.on_capture_start {
            cb();
        }

        let frame = match self.frames.capture().await {
            Ok(frame) => frame,
            Err(e) => {
                let error = DescribeSceneError::from(e);
                let _ = self.announcer.announce(spoken_error_line(&error)).await;
                return Err(error);
            }
        };

        let frame_size = frame.human_readable_size();

        if let Some(ref cb) = callbacks.on_capture_end {
            cb(&frame_size);
        }

        let _ = self
            .feedback
            .show("Sending image to AI for analysis...", FeedbackLevel::Info)
            .await;
        let _ = self
            .announcer
            .announce("Analyzing what is around you. This might take a few seconds.")
            .await;

        if let Some(ref cb) = callbacks.on_describe_start {
            cb();
        }

        let prompt = ScenePrompt::standard();
        let description = match self.describer.describe(&frame, &prompt).await {
            Ok(text) => text,
            Err(e) => {
                let error = DescribeSceneError::from(e);
                let _ = self.announcer.announce(spoken_error_line(&error)).await;
                return Err(error);
            }
        };

        if let Some(ref cb) = callbacks.on_describe_end {
            cb();
        }

        let _ = self
            .feedback
            .show("Image analyzed! Speaking detailed description.", FeedbackLevel::Info)
            .await;
        let _ = self.announcer.announce("Here's what's around you:").await;
        let _ = self.announcer.announce(&description).await;

        Ok(DescribeOutput {
            description,
            frame_size,
        })
    }
}
