//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod announcer;
pub mod config;
pub mod feedback;
pub mod frame_source;
pub mod locator;
pub mod message_store;
pub mod recorder;
pub mod scene_describer;
pub mod transcriber;

// Re-export common types
pub use announcer::{AnnounceError, Announcer};
pub use config::ConfigStore;
pub use feedback::{FeedbackError, FeedbackLevel, FeedbackPanel};
pub use frame_source::{CaptureError, FrameSource};
pub use locator::{LocateError, Locator};
pub use message_store::{MessageStore, MessageStoreError};
pub use recorder::{RecordingError, VoiceRecorder};
pub use scene_describer::{DescribeError, SceneDescriber};
pub use transcriber::{Transcriber, TranscriptionError};
