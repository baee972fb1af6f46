//! Prompt value objects for the generative API

mod dictation;
mod scene;

pub use dictation::DictationPrompt;
pub use scene::ScenePrompt;
