//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like FFmpeg, the Gemini API,
//! speech synthesis tools, and the filesystem.

pub mod capture;
pub mod config;
pub mod gemini;
pub mod location;
pub mod messaging;
pub mod notification;
pub mod recording;
pub mod speech;

// Re-export adapters
pub use capture::{FfmpegFrameSource, FileFrameSource};
pub use config::XdgConfigStore;
pub use gemini::{GeminiSceneDescriber, GeminiTranscriber};
pub use location::FixedLocator;
pub use messaging::JsonMessageStore;
pub use notification::DesktopFeedbackPanel;
pub use recording::FfmpegVoiceRecorder;
pub use speech::{
    create_announcer, detect_speech_tool, CommandAnnouncer, SilentAnnouncer, SpeechTool,
    SpeechToolPreference,
};
