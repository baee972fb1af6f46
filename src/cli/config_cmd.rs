//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::{Interval, LocationConfig};
use crate::domain::error::ConfigError;
use crate::infrastructure::SpeechToolPreference;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    // Validate key
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    // Validate value based on key type
    validate_config_value(key, value)?;

    // Load existing config
    let mut config = store.load().await?;

    // Update the appropriate field
    match key {
        "api_key" => config.api_key = Some(value.to_string()),
        "model" => config.model = Some(value.to_string()),
        "speech_tool" => config.speech_tool = Some(value.to_string()),
        "voice" => config.voice = Some(value.to_string()),
        "speech_rate" => {
            config.speech_rate = Some(parse_rate(value).map_err(|_| {
                ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Value must be a positive number".to_string(),
                }
            })?)
        }
        "poll_interval" => config.poll_interval = Some(value.to_string()),
        "camera_device" => config.camera_device = Some(value.to_string()),
        "location.latitude" => {
            // Initialize location table if None
            if config.location.is_none() {
                config.location = Some(LocationConfig::default());
            }
            if let Some(ref mut location) = config.location {
                location.latitude =
                    Some(
                        parse_coordinate(value, -90.0, 90.0).map_err(|_| {
                            ConfigError::ValidationError {
                                key: key.to_string(),
                                message: "Value must be a number between -90 and 90".to_string(),
                            }
                        })?,
                    );
            }
        }
        "location.longitude" => {
            if config.location.is_none() {
                config.location = Some(LocationConfig::default());
            }
            if let Some(ref mut location) = config.location {
                location.longitude =
                    Some(parse_coordinate(value, -180.0, 180.0).map_err(|_| {
                        ConfigError::ValidationError {
                            key: key.to_string(),
                            message: "Value must be a number between -180 and 180".to_string(),
                        }
                    })?);
            }
        }
        _ => unreachable!(), // Already validated
    }

    // Save config
    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    // Validate key
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    let config = store.load().await?;

    let value = match key {
        "api_key" => config.api_key.map(|s| mask_api_key(&s)),
        "model" => config.model,
        "speech_tool" => config.speech_tool,
        "voice" => config.voice,
        "speech_rate" => config.speech_rate.map(|r| r.to_string()),
        "poll_interval" => config.poll_interval,
        "camera_device" => config.camera_device,
        "location.latitude" => config
            .location
            .as_ref()
            .and_then(|l| l.latitude)
            .map(|v| v.to_string()),
        "location.longitude" => config
            .location
            .as_ref()
            .and_then(|l| l.longitude)
            .map(|v| v.to_string()),
        _ => unreachable!(),
    };

    match value {
        Some(v) => presenter.output(&v),
        None => presenter.output("(not set)"),
    }

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    presenter.key_value(
        "api_key",
        &config
            .api_key
            .map(|s| mask_api_key(&s))
            .unwrap_or_else(|| "(not set)".to_string()),
    );
    presenter.key_value("model", config.model.as_deref().unwrap_or("(not set)"));
    presenter.key_value(
        "speech_tool",
        config.speech_tool.as_deref().unwrap_or("(not set)"),
    );
    presenter.key_value("voice", config.voice.as_deref().unwrap_or("(not set)"));
    presenter.key_value(
        "speech_rate",
        &config
            .speech_rate
            .map(|r| r.to_string())
            .unwrap_or_else(|| "(not set)".to_string()),
    );
    presenter.key_value(
        "poll_interval",
        config.poll_interval.as_deref().unwrap_or("(not set)"),
    );
    presenter.key_value(
        "camera_device",
        config.camera_device.as_deref().unwrap_or("(not set)"),
    );
    presenter.key_value(
        "location.latitude",
        &config
            .location
            .as_ref()
            .and_then(|l| l.latitude)
            .map(|v| v.to_string())
            .unwrap_or_else(|| "(not set)".to_string()),
    );
    presenter.key_value(
        "location.longitude",
        &config
            .location
            .as_ref()
            .and_then(|l| l.longitude)
            .map(|v| v.to_string())
            .unwrap_or_else(|| "(not set)".to_string()),
    );

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

/// Validate a config value based on key type
fn validate_config_value(key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "speech_tool" => {
            value
                .parse::<SpeechToolPreference>()
                .map_err(|e| ConfigError::ValidationError {
                    key: key.to_string(),
                    message: e.to_string(),
                })?;
        }
        "speech_rate" => {
            parse_rate(value).map_err(|_| ConfigError::ValidationError {
                key: key.to_string(),
                message: "Value must be a positive number".to_string(),
            })?;
        }
        "poll_interval" => {
            value
                .parse::<Interval>()
                .map_err(|e| ConfigError::ValidationError {
                    key: key.to_string(),
                    message: e.to_string(),
                })?;
        }
        "location.latitude" => {
            parse_coordinate(value, -90.0, 90.0).map_err(|_| ConfigError::ValidationError {
                key: key.to_string(),
                message: "Value must be a number between -90 and 90".to_string(),
            })?;
        }
        "location.longitude" => {
            parse_coordinate(value, -180.0, 180.0).map_err(|_| ConfigError::ValidationError {
                key: key.to_string(),
                message: "Value must be a number between -180 and 180".to_string(),
            })?;
        }
        _ => {} // api_key, model, voice, camera_device accept any string
    }
    Ok(())
}

/// Parse a speech rate multiplier (finite and positive)
fn parse_rate(value: &str) -> Result<f64, ()> {
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(()),
    }
}

/// Parse a coordinate bounded to the given range
fn parse_coordinate(value: &str, min: f64, max: f64) -> Result<f64, ()> {
    match value.parse::<f64>() {
        Ok(v) if v >= min && v <= max => Ok(v),
        _ => Err(()),
    }
}

/// Mask API key for display (show first 4 and last 4 chars)
fn mask_api_key(key: &str) -> String {
    if key.len() <= 8 {
        "*".repeat(key.len())
    } else {
        format!("{}...{}", &key[..4], &key[key.len() - 4..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_api_key_long() {
        let masked = mask_api_key("abcdefghijklmnop");
        assert_eq!(masked, "abcd...mnop");
    }

    #[test]
    fn mask_api_key_short() {
        let masked = mask_api_key("short");
        assert_eq!(masked, "*****");
    }

    #[test]
    fn validate_speech_tool_valid() {
        assert!(validate_config_value("speech_tool", "auto").is_ok());
        assert!(validate_config_value("speech_tool", "spd-say").is_ok());
        assert!(validate_config_value("speech_tool", "espeak-ng").is_ok());
        assert!(validate_config_value("speech_tool", "say").is_ok());
    }

    #[test]
    fn validate_speech_tool_invalid() {
        assert!(validate_config_value("speech_tool", "festival").is_err());
    }

    #[test]
    fn validate_speech_rate() {
        assert!(validate_config_value("speech_rate", "1.0").is_ok());
        assert!(validate_config_value("speech_rate", "0.5").is_ok());
        assert!(validate_config_value("speech_rate", "2").is_ok());
        assert!(validate_config_value("speech_rate", "0").is_err());
        assert!(validate_config_value("speech_rate", "-1.5").is_err());
        assert!(validate_config_value("speech_rate", "fast").is_err());
    }

    #[test]
    fn validate_poll_interval() {
        assert!(validate_config_value("poll_interval", "2s").is_ok());
        assert!(validate_config_value("poll_interval", "1m").is_ok());
        assert!(validate_config_value("poll_interval", "1m30s").is_ok());
        assert!(validate_config_value("poll_interval", "soon").is_err());
    }

    #[test]
    fn validate_latitude_range() {
        assert!(validate_config_value("location.latitude", "6.9271").is_ok());
        assert!(validate_config_value("location.latitude", "-90").is_ok());
        assert!(validate_config_value("location.latitude", "90").is_ok());
        assert!(validate_config_value("location.latitude", "90.1").is_err());
        assert!(validate_config_value("location.latitude", "north").is_err());
    }

    #[test]
    fn validate_longitude_range() {
        assert!(validate_config_value("location.longitude", "79.8612").is_ok());
        assert!(validate_config_value("location.longitude", "-180").is_ok());
        assert!(validate_config_value("location.longitude", "180").is_ok());
        assert!(validate_config_value("location.longitude", "180.5").is_err());
    }

    #[test]
    fn free_form_keys_accept_any_string() {
        assert!(validate_config_value("api_key", "anything").is_ok());
        assert!(validate_config_value("model", "gemini-1.5-flash").is_ok());
        assert!(validate_config_value("voice", "en+f3").is_ok());
        assert!(validate_config_value("camera_device", "/dev/video2").is_ok());
    }

    #[test]
    fn rate_rejects_non_finite() {
        assert!(parse_rate("inf").is_err());
        assert!(parse_rate("NaN").is_err());
    }
}
