//! Speech synthesis adapters

mod command;
mod factory;
mod silent;

pub use command::CommandAnnouncer;
pub use factory::{
    create_announcer, detect_speech_tool, ParseSpeechToolError, SpeechTool, SpeechToolPreference,
};
pub use silent::SilentAnnouncer;
