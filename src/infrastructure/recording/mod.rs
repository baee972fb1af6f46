//! Recording infrastructure module
//!
//! Voice messages are captured with FFmpeg from the default PulseAudio
//! source and encoded as Opus in an Ogg container, which the Gemini API
//! accepts directly.

mod ffmpeg;

pub use ffmpeg::FfmpegVoiceRecorder;
