//! Gemini API adapters

mod client;
mod describer;
mod transcriber;

pub use describer::GeminiSceneDescriber;
pub use transcriber::GeminiTranscriber;
