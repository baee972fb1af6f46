//! FFmpeg-based camera frame capture adapter

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::fs;
use tokio::process::Command;

use crate::application::ports::{CaptureError, FrameSource};
use crate::domain::media::{ImageFormat, ImageFrame};

fn temp_frame_path() -> PathBuf {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);

    PathBuf::from(format!("/tmp/vision-voice-frame-{}.jpg", timestamp))
}

/// Grabs a single webcam frame through FFmpeg.
///
/// Uses video4linux2 on Linux and AVFoundation on macOS. The device is
/// a path like /dev/video0 on Linux and a device index on macOS.
pub struct FfmpegFrameSource {
    device: String,
}

impl FfmpegFrameSource {
    /// Create a frame source for the given camera device
    pub fn new(device: impl Into<String>) -> Self {
        Self {
            device: device.into(),
        }
    }

    pub fn device(&self) -> &str {
        &self.device
    }

    /// Build FFmpeg args for a one-frame grab
    fn build_ffmpeg_args(device: &str, output_path: &Path) -> Vec<String> {
        let input_format = if cfg!(target_os = "macos") {
            "avfoundation"
        } else {
            "video4linux2"
        };

        vec![
            "-f".to_string(),
            input_format.to_string(),
            "-i".to_string(),
            device.to_string(),
            "-frames:v".to_string(),
            "1".to_string(),
            "-q:v".to_string(),
            "2".to_string(),
            "-y".to_string(),
            output_path.to_string_lossy().to_string(),
        ]
    }
}

#[async_trait]
impl FrameSource for FfmpegFrameSource {
    async fn capture(&self) -> Result<ImageFrame, CaptureError> {
        // On Linux the device is a file; a missing node means no camera.
        if cfg!(target_os = "linux") && !Path::new(&self.device).exists() {
            return Err(CaptureError::CameraUnavailable);
        }

        let output_path = temp_frame_path();
        let args = Self::build_ffmpeg_args(&self.device, &output_path);

        let output = Command::new("ffmpeg")
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    CaptureError::FfmpegNotFound
                } else {
                    CaptureError::CaptureFailed(e.to_string())
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let _ = fs::remove_file(&output_path).await;
            return Err(CaptureError::CaptureFailed(
                stderr
                    .lines()
                    .last()
                    .unwrap_or("FFmpeg exited with non-zero status")
                    .to_string(),
            ));
        }

        let data = fs::read(&output_path)
            .await
            .map_err(|e| CaptureError::ReadFailed(e.to_string()))?;
        let _ = fs::remove_file(&output_path).await;

        if data.is_empty() {
            return Err(CaptureError::CaptureFailed(
                "Captured frame is empty".to_string(),
            ));
        }

        Ok(ImageFrame::new(data, ImageFormat::Jpeg))
    }
}
