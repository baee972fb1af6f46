//! Shared runner helpers and the one-shot describe mode

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::{Arc, Mutex};

use crate::application::ports::{Announcer, ConfigStore, FrameSource};
use crate::application::{DescribeCallbacks, DescribeSceneUseCase};
use crate::domain::config::AppConfig;
use crate::infrastructure::{
    create_announcer, DesktopFeedbackPanel, FfmpegFrameSource, FileFrameSource,
    GeminiSceneDescriber, SpeechTool, SpeechToolPreference, XdgConfigStore,
};

use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Load and merge configuration from defaults, file, and CLI flags.
///
/// GEMINI_API_KEY arrives through the CLI layer (clap reads the
/// environment), so the merge order is defaults < file < CLI.
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    AppConfig::defaults().merge(file_config).merge(cli_config)
}

/// Get the API key out of a merged config
pub fn require_api_key(config: &AppConfig) -> Result<String, String> {
    config
        .api_key
        .clone()
        .filter(|key| !key.is_empty())
        .ok_or_else(|| {
            "Missing API key. Set GEMINI_API_KEY environment variable or run 'vision-voice config set api_key <key>'".to_string()
        })
}

/// Build the announcer the config asks for.
///
/// Fails when the preferred tool (or, for auto, every known tool) is
/// missing, so sessions never start mute without anyone noticing.
pub async fn build_announcer(
    config: &AppConfig,
) -> Result<(Box<dyn Announcer>, SpeechTool), String> {
    let preference = config
        .speech_tool_or_default()
        .parse::<SpeechToolPreference>()
        .map_err(|e| e.to_string())?;

    create_announcer(
        preference,
        config.voice.clone(),
        config.speech_rate_or_default(),
    )
    .await
    .map_err(|e| e.to_string())
}

/// Run the one-shot scene description
pub async fn run_describe(image: Option<PathBuf>, config: AppConfig) -> ExitCode {
    let presenter = Presenter::new();

    let api_key = match require_api_key(&config) {
        Ok(key) => key,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let (announcer, _tool) = match build_announcer(&config).await {
        Ok(pair) => pair,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    // Capture from a file when --image is given, else from the camera
    let frames: Box<dyn FrameSource> = match image {
        Some(path) => Box::new(FileFrameSource::new(path)),
        None => Box::new(FfmpegFrameSource::new(config.camera_device_or_default())),
    };

    let describer = GeminiSceneDescriber::new(api_key, config.model_or_default());
    let feedback = DesktopFeedbackPanel::new();

    let use_case = DescribeSceneUseCase::new(frames, describer, announcer, feedback);

    // Spinner state is shared with the progress callbacks
    let presenter = Arc::new(Mutex::new(presenter));
    let callbacks = DescribeCallbacks {
        on_capture_start: Some(Box::new({
            let presenter = Arc::clone(&presenter);
            move || {
                presenter
                    .lock()
                    .unwrap_or_else(|e| e.into_inner())
                    .start_spinner("Capturing frame...");
            }
        })),
        on_capture_end: Some(Box::new({
            let presenter = Arc::clone(&presenter);
            move |size: &str| {
                presenter
                    .lock()
                    .unwrap_or_else(|e| e.into_inner())
                    .spinner_success(&format!("Frame captured ({})", size));
            }
        })),
        on_describe_start: Some(Box::new({
            let presenter = Arc::clone(&presenter);
            move || {
                presenter
                    .lock()
                    .unwrap_or_else(|e| e.into_inner())
                    .start_spinner("Describing scene...");
            }
        })),
        on_describe_end: Some(Box::new({
            let presenter = Arc::clone(&presenter);
            move || {
                presenter
                    .lock()
                    .unwrap_or_else(|e| e.into_inner())
                    .spinner_success("Description ready");
            }
        })),
    };

    match use_case.execute(callbacks).await {
        Ok(output) => {
            let presenter = presenter.lock().unwrap_or_else(|e| e.into_inner());
            presenter.output(&output.description);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            let mut presenter = presenter.lock().unwrap_or_else(|e| e.into_inner());
            presenter.stop_spinner();
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}
