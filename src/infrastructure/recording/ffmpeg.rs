//! FFmpeg-based voice recorder adapter

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::sync::Mutex as StdMutex;
use std::time::Instant;

use async_trait::async_trait;
use nix::sys::signal::{self, Signal};
use nix::unistd::Pid;
use tokio::fs;
use tokio::process::{Child, Command};
use tokio::sync::Mutex;

use crate::application::ports::{RecordingError, VoiceRecorder};
use crate::domain::media::{AudioFormat, VoiceClip};

fn temp_clip_path() -> PathBuf {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);

    PathBuf::from(format!("/tmp/vision-voice-{}.ogg", timestamp))
}

/// FFmpeg recorder for double-tap controlled voice capture.
///
/// Recording runs until `stop` sends SIGINT, which lets FFmpeg finalize
/// a playable Ogg container. `cancel` uses SIGKILL because the file is
/// discarded anyway.
pub struct FfmpegVoiceRecorder {
    /// Current FFmpeg process
    process: Arc<Mutex<Option<Child>>>,
    /// Current temp file path
    output_path: Arc<Mutex<Option<PathBuf>>>,
    /// Recording state
    is_recording: Arc<AtomicBool>,
    /// Recording start time, read synchronously for elapsed tracking
    started_at: Arc<StdMutex<Option<Instant>>>,
}

impl FfmpegVoiceRecorder {
    /// Create a new FFmpeg recorder
    pub fn new() -> Self {
        Self {
            process: Arc::new(Mutex::new(None)),
            output_path: Arc::new(Mutex::new(None)),
            is_recording: Arc::new(AtomicBool::new(false)),
            started_at: Arc::new(StdMutex::new(None)),
        }
    }

    /// Build FFmpeg args for voice recording
    fn build_ffmpeg_args(output_path: &Path) -> Vec<String> {
        vec![
            "-f".to_string(),
            "pulse".to_string(),
            "-i".to_string(),
            "default".to_string(),
            // Speech settings: 16kHz mono Opus at 16kbps
            "-ar".to_string(),
            "16000".to_string(),
            "-ac".to_string(),
            "1".to_string(),
            "-c:a".to_string(),
            "libopus".to_string(),
            "-b:a".to_string(),
            "16k".to_string(),
            "-application".to_string(),
            "voip".to_string(),
            "-y".to_string(),
            output_path.to_string_lossy().to_string(),
        ]
    }

    /// Spawn FFmpeg process
    async fn spawn_ffmpeg(args: Vec<String>) -> Result<Child, RecordingError> {
        Command::new("ffmpeg")
            .args(&args)
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    RecordingError::NoAudioDevice
                } else {
                    RecordingError::StartFailed(e.to_string())
                }
            })
    }

    /// Read the recorded clip
    async fn read_clip(path: &PathBuf) -> Result<VoiceClip, RecordingError> {
        let data = fs::read(path)
            .await
            .map_err(|e| RecordingError::ReadFailed(e.to_string()))?;

        if data.is_empty() {
            return Err(RecordingError::ReadFailed(
                "Recording file is empty".to_string(),
            ));
        }

        Ok(VoiceClip::new(data, AudioFormat::Ogg))
    }

    /// Send signal to FFmpeg process
    fn send_signal(child: &Child, sig: Signal) -> Result<(), RecordingError> {
        if let Some(id) = child.id() {
            signal::kill(Pid::from_raw(id as i32), sig)
                .map_err(|e| RecordingError::RecordingFailed(format!("Signal failed: {}", e)))?;
        }
        Ok(())
    }

    fn set_started_at(&self, value: Option<Instant>) {
        let mut guard = self
            .started_at
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = value;
    }
}

impl Default for FfmpegVoiceRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VoiceRecorder for FfmpegVoiceRecorder {
    async fn start(&self) -> Result<(), RecordingError> {
        let mut process_guard = self.process.lock().await;
        if process_guard.is_some() {
            return Err(RecordingError::StartFailed(
                "Recording already in progress".to_string(),
            ));
        }

        let output_path = temp_clip_path();
        {
            let mut path_guard = self.output_path.lock().await;
            *path_guard = Some(output_path.clone());
        }

        let args = Self::build_ffmpeg_args(&output_path);
        let child = Self::spawn_ffmpeg(args).await?;

        *process_guard = Some(child);
        self.is_recording.store(true, Ordering::SeqCst);
        self.set_started_at(Some(Instant::now()));

        Ok(())
    }

    async fn stop(&self) -> Result<VoiceClip, RecordingError> {
        let mut process_guard = self.process.lock().await;
        let child = process_guard.take().ok_or_else(|| {
            RecordingError::RecordingFailed("No recording in progress".to_string())
        })?;

        self.is_recording.store(false, Ordering::SeqCst);
        self.set_started_at(None);

        // SIGINT lets FFmpeg write the container trailer
        Self::send_signal(&child, Signal::SIGINT)?;
        let _ = child.wait_with_output().await;

        let output_path = {
            let path_guard = self.output_path.lock().await;
            path_guard
                .clone()
                .ok_or_else(|| RecordingError::ReadFailed("Output path not set".to_string()))?
        };

        let result = Self::read_clip(&output_path).await;

        let _ = fs::remove_file(&output_path).await;
        {
            let mut path_guard = self.output_path.lock().await;
            *path_guard = None;
        }

        result
    }

    async fn cancel(&self) -> Result<(), RecordingError> {
        let mut process_guard = self.process.lock().await;
        if let Some(child) = process_guard.take() {
            self.is_recording.store(false, Ordering::SeqCst);
            self.set_started_at(None);

            Self::send_signal(&child, Signal::SIGKILL)?;
            let _ = child.wait_with_output().await;
        }

        let output_path = {
            let mut path_guard = self.output_path.lock().await;
            path_guard.take()
        };

        if let Some(path) = output_path {
            let _ = fs::remove_file(&path).await;
        }

        Ok(())
    }

    fn is_recording(&self) -> bool {
        self.is_recording.load(Ordering::SeqCst)
    }

    fn elapsed_ms(&self) -> u64 {
        let guard = self
            .started_at
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        guard
            .map(|start| start.elapsed().as_millis() as u64)
            .unwrap_or(0)
    }
}
