//! Camera and image capture adapters

mod ffmpeg;
mod file;

pub use ffmpeg::FfmpegFrameSource;
pub use file::FileFrameSource;
