//! File-backed frame source adapter

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::{CaptureError, FrameSource};
use crate::domain::media::{ImageFormat, ImageFrame};

/// Frame source that reads an existing image instead of a camera.
///
/// Backs the `describe --image` flow for testing descriptions without
/// camera hardware.
pub struct FileFrameSource {
    path: PathBuf,
}

impl FileFrameSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn detect_format(&self) -> Result<ImageFormat, CaptureError> {
        let extension = self
            .path
            .extension()
            .map(|e| e.to_string_lossy().to_string())
            .unwrap_or_default();

        ImageFormat::from_extension(&extension)
            .ok_or_else(|| CaptureError::UnsupportedFormat(extension))
    }
}

#[async_trait]
impl FrameSource for FileFrameSource {
    async fn capture(&self) -> Result<ImageFrame, CaptureError> {
        let format = self.detect_format()?;

        let data = fs::read(&self.path)
            .await
            .map_err(|e| CaptureError::ReadFailed(format!("{}: {}", self.path.display(), e)))?;

        if data.is_empty() {
            return Err(CaptureError::ReadFailed(format!(
                "{}: image file is empty",
                self.path.display()
            )));
        }

        Ok(ImageFrame::new(data, format))
    }
}
