//! Command-line speech announcer adapter

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{AnnounceError, Announcer};

use super::factory::SpeechTool;

/// Baseline words-per-minute for the tools that take an absolute rate.
const BASE_WPM: f64 = 175.0;

/// Speech announcer backed by an external synthesizer command.
///
/// Each announcement spawns one process and waits for it to exit, so
/// sequential announcements play in order rather than over each other.
pub struct CommandAnnouncer {
    tool: SpeechTool,
    voice: Option<String>,
    rate: f64,
}

impl CommandAnnouncer {
    /// Create a new announcer.
    ///
    /// # Arguments
    /// * `tool` - Which synthesizer to drive
    /// * `voice` - Optional voice name passed through to the tool
    /// * `rate` - Speech rate multiplier, 1.0 is the tool's normal speed
    pub fn new(tool: SpeechTool, voice: Option<String>, rate: f64) -> Self {
        Self { tool, voice, rate }
    }

    pub fn tool(&self) -> SpeechTool {
        self.tool
    }

    /// Build the argument list for one announcement.
    fn build_args(&self, text: &str) -> Vec<String> {
        let mut args = Vec::new();

        match self.tool {
            SpeechTool::SpdSay => {
                // spd-say rate runs -100..100 around the daemon default
                let rate = ((self.rate - 1.0) * 100.0).round().clamp(-100.0, 100.0);
                args.push("--wait".to_string());
                args.push("-r".to_string());
                args.push(format!("{}", rate as i64));
                if let Some(ref voice) = self.voice {
                    args.push("-y".to_string());
                    args.push(voice.clone());
                }
            }
            SpeechTool::EspeakNg => {
                let wpm = (BASE_WPM * self.rate).round().max(1.0);
                args.push("-s".to_string());
                args.push(format!("{}", wpm as i64));
                if let Some(ref voice) = self.voice {
                    args.push("-v".to_string());
                    args.push(voice.clone());
                }
            }
            SpeechTool::Say => {
                let wpm = (BASE_WPM * self.rate).round().max(1.0);
                args.push("-r".to_string());
                args.push(format!("{}", wpm as i64));
                if let Some(ref voice) = self.voice {
                    args.push("-v".to_string());
                    args.push(voice.clone());
                }
            }
        }

        args.push("--".to_string());
        args.push(text.to_string());
        args
    }
}

#[async_trait]
impl Announcer for CommandAnnouncer {
    async fn announce(&self, text: &str) -> Result<(), AnnounceError> {
        if text.is_empty() {
            return Ok(());
        }

        let args = self.build_args(text);

        let output = Command::new(self.tool.command())
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    AnnounceError::ToolNotFound(self.tool.command().to_string())
                } else {
                    AnnounceError::SpeechFailed(e.to_string())
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AnnounceError::SpeechFailed(format!(
                "{} exited with status {}: {}",
                self.tool.command(),
                output.status,
                stderr.trim()
            )));
        }

        Ok(())
    }
}
