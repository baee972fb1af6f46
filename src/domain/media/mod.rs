//! Media payload value objects for the vision/speech APIs

mod audio;
mod image;

pub use audio::{AudioFormat, VoiceClip};
pub use image::{ImageFormat, ImageFrame};
