//! Speech tool factory with automatic detection

use std::fmt;
use std::process::Stdio;
use std::str::FromStr;

use tokio::process::Command;

use crate::application::ports::{AnnounceError, Announcer};

use super::command::CommandAnnouncer;

/// Available speech synthesizers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechTool {
    /// speech-dispatcher client (Linux)
    SpdSay,
    /// espeak-ng synthesizer (Linux)
    EspeakNg,
    /// say command (macOS)
    Say,
}

impl SpeechTool {
    /// Binary name on PATH
    pub const fn command(&self) -> &'static str {
        match self {
            SpeechTool::SpdSay => "spd-say",
            SpeechTool::EspeakNg => "espeak-ng",
            SpeechTool::Say => "say",
        }
    }
}

impl fmt::Display for SpeechTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command())
    }
}

/// User preference for speech tool selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeechToolPreference {
    /// Auto-detect the best available tool (default)
    #[default]
    Auto,
    /// Use spd-say
    SpdSay,
    /// Use espeak-ng
    EspeakNg,
    /// Use say
    Say,
}

impl fmt::Display for SpeechToolPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeechToolPreference::Auto => write!(f, "auto"),
            SpeechToolPreference::SpdSay => write!(f, "spd-say"),
            SpeechToolPreference::EspeakNg => write!(f, "espeak-ng"),
            SpeechToolPreference::Say => write!(f, "say"),
        }
    }
}

/// Error type for parsing speech tool preference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSpeechToolError {
    pub value: String,
    pub valid_options: &'static str,
}

impl fmt::Display for ParseSpeechToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid speech tool '{}'. Valid options: {}",
            self.value, self.valid_options
        )
    }
}

impl std::error::Error for ParseSpeechToolError {}

impl FromStr for SpeechToolPreference {
    type Err = ParseSpeechToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(SpeechToolPreference::Auto),
            "spd-say" | "spdsay" => Ok(SpeechToolPreference::SpdSay),
            "espeak-ng" | "espeak" => Ok(SpeechToolPreference::EspeakNg),
            "say" => Ok(SpeechToolPreference::Say),
            _ => Err(ParseSpeechToolError {
                value: s.to_string(),
                valid_options: "auto, spd-say, espeak-ng, say",
            }),
        }
    }
}

/// Check if a tool binary is available using `which`
async fn is_tool_available(tool: &str) -> bool {
    Command::new("which")
        .arg(tool)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Detect the best available speech tool.
///
/// Priority is spd-say (routes through speech-dispatcher, respects the
/// desktop's configured voice) then espeak-ng, then macOS say.
pub async fn detect_speech_tool() -> Option<SpeechTool> {
    if is_tool_available(SpeechTool::SpdSay.command()).await {
        return Some(SpeechTool::SpdSay);
    }

    if is_tool_available(SpeechTool::EspeakNg.command()).await {
        return Some(SpeechTool::EspeakNg);
    }

    if is_tool_available(SpeechTool::Say.command()).await {
        return Some(SpeechTool::Say);
    }

    None
}

/// Create a speech announcer using the specified preference.
///
/// Returns the adapter and the selected tool. Detection happens once,
/// at startup; a session on a machine with no synthesizer fails here
/// instead of on the first gesture.
pub async fn create_announcer(
    preference: SpeechToolPreference,
    voice: Option<String>,
    rate: f64,
) -> Result<(Box<dyn Announcer>, SpeechTool), AnnounceError> {
    let tool = match preference {
        SpeechToolPreference::Auto => detect_speech_tool()
            .await
            .ok_or(AnnounceError::NoToolAvailable)?,
        SpeechToolPreference::SpdSay => require(SpeechTool::SpdSay).await?,
        SpeechToolPreference::EspeakNg => require(SpeechTool::EspeakNg).await?,
        SpeechToolPreference::Say => require(SpeechTool::Say).await?,
    };

    let announcer = CommandAnnouncer::new(tool, voice, rate);
    Ok((Box::new(announcer) as Box<dyn Announcer>, tool))
}

async fn require(tool: SpeechTool) -> Result<SpeechTool, AnnounceError> {
    if is_tool_available(tool.command()).await {
        Ok(tool)
    } else {
        Err(AnnounceError::ToolNotFound(tool.command().to_string()))
    }
}
