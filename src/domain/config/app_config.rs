//! Application configuration value object

use serde::{Deserialize, Serialize};

use super::Interval;

/// Default model used for both scene description and dictation
pub const DEFAULT_MODEL: &str = "gemini-1.5-pro";

/// Default camera device for frame capture
pub const DEFAULT_CAMERA_DEVICE: &str = "/dev/video0";

/// Fixed location used for SOS, set by whoever installs the app for the
/// client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationConfig {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub speech_tool: Option<String>,
    pub voice: Option<String>,
    pub speech_rate: Option<f64>,
    pub poll_interval: Option<String>,
    pub camera_device: Option<String>,
    pub location: Option<LocationConfig>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            api_key: None,
            model: Some(DEFAULT_MODEL.to_string()),
            speech_tool: Some("auto".to_string()),
            voice: None,
            speech_rate: Some(1.0),
            poll_interval: Some("2s".to_string()),
            camera_device: Some(DEFAULT_CAMERA_DEVICE.to_string()),
            location: None,
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_key: other.api_key.or(self.api_key),
            model: other.model.or(self.model),
            speech_tool: other.speech_tool.or(self.speech_tool),
            voice: other.voice.or(self.voice),
            speech_rate: other.speech_rate.or(self.speech_rate),
            poll_interval: other.poll_interval.or(self.poll_interval),
            camera_device: other.camera_device.or(self.camera_device),
            location: Self::merge_location(self.location, other.location),
        }
    }

    fn merge_location(
        base: Option<LocationConfig>,
        other: Option<LocationConfig>,
    ) -> Option<LocationConfig> {
        match (base, other) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(b), Some(o)) => Some(LocationConfig {
                latitude: o.latitude.or(b.latitude),
                longitude: o.longitude.or(b.longitude),
            }),
        }
    }

    /// Get the model name, or the default if not set
    pub fn model_or_default(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    /// Get the speech tool preference string, or "auto" if not set
    pub fn speech_tool_or_default(&self) -> &str {
        self.speech_tool.as_deref().unwrap_or("auto")
    }

    /// Get the speech rate multiplier, or 1.0 if not set
    pub fn speech_rate_or_default(&self) -> f64 {
        self.speech_rate.unwrap_or(1.0)
    }

    /// Get poll interval as parsed Interval, or the default if not
    /// set/invalid
    pub fn poll_interval_or_default(&self) -> Interval {
        self.poll_interval
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(Interval::default_poll)
    }

    /// Get the camera device path, or the default if not set
    pub fn camera_device_or_default(&self) -> &str {
        self.camera_device.as_deref().unwrap_or(DEFAULT_CAMERA_DEVICE)
    }

    /// Configured SOS coordinates, if both axes are present
    pub fn location_coordinates(&self) -> Option<(f64, f64)> {
        let location = self.location.as_ref()?;
        Some((location.latitude?, location.longitude?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert!(config.api_key.is_none());
        assert_eq!(config.model, Some("gemini-1.5-pro".to_string()));
        assert_eq!(config.speech_tool, Some("auto".to_string()));
        assert_eq!(config.speech_rate, Some(1.0));
        assert_eq!(config.poll_interval, Some("2s".to_string()));
        assert_eq!(config.camera_device, Some("/dev/video0".to_string()));
        assert!(config.voice.is_none());
        assert!(config.location.is_none());
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.api_key.is_none());
        assert!(config.model.is_none());
        assert!(config.speech_tool.is_none());
        assert!(config.poll_interval.is_none());
        assert!(config.location.is_none());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            api_key: Some("base_key".to_string()),
            model: Some("gemini-1.5-pro".to_string()),
            speech_tool: Some("auto".to_string()),
            ..Default::default()
        };

        let other = AppConfig {
            api_key: Some("other_key".to_string()),
            model: None, // Should not override
            speech_tool: Some("espeak-ng".to_string()),
            ..Default::default()
        };

        let merged = base.merge(other);

        assert_eq!(merged.api_key, Some("other_key".to_string()));
        assert_eq!(merged.model, Some("gemini-1.5-pro".to_string()));
        assert_eq!(merged.speech_tool, Some("espeak-ng".to_string()));
    }

    #[test]
    fn merge_preserves_base_when_other_is_none() {
        let base = AppConfig {
            api_key: Some("key".to_string()),
            speech_rate: Some(1.2),
            ..Default::default()
        };

        let merged = base.merge(AppConfig::empty());

        assert_eq!(merged.api_key, Some("key".to_string()));
        assert_eq!(merged.speech_rate, Some(1.2));
    }

    #[test]
    fn merge_location_fields_independently() {
        let base = AppConfig {
            location: Some(LocationConfig {
                latitude: Some(6.9271),
                longitude: Some(79.8612),
            }),
            ..Default::default()
        };
        let other = AppConfig {
            location: Some(LocationConfig {
                latitude: Some(7.2906),
                longitude: None,
            }),
            ..Default::default()
        };

        let merged = base.merge(other);
        assert_eq!(merged.location_coordinates(), Some((7.2906, 79.8612)));
    }

    #[test]
    fn poll_interval_or_default_parses() {
        let config = AppConfig {
            poll_interval: Some("5s".to_string()),
            ..Default::default()
        };
        assert_eq!(config.poll_interval_or_default().as_secs(), 5);
    }

    #[test]
    fn poll_interval_or_default_uses_default_on_invalid() {
        let config = AppConfig {
            poll_interval: Some("invalid".to_string()),
            ..Default::default()
        };
        assert_eq!(config.poll_interval_or_default().as_secs(), 2);
    }

    #[test]
    fn poll_interval_or_default_uses_default_on_none() {
        let config = AppConfig::empty();
        assert_eq!(config.poll_interval_or_default().as_secs(), 2);
    }

    #[test]
    fn string_accessors_fall_back() {
        let config = AppConfig::empty();
        assert_eq!(config.model_or_default(), "gemini-1.5-pro");
        assert_eq!(config.speech_tool_or_default(), "auto");
        assert_eq!(config.camera_device_or_default(), "/dev/video0");
        assert_eq!(config.speech_rate_or_default(), 1.0);
    }

    #[test]
    fn location_coordinates_require_both_axes() {
        let config = AppConfig {
            location: Some(LocationConfig {
                latitude: Some(6.9),
                longitude: None,
            }),
            ..Default::default()
        };
        assert_eq!(config.location_coordinates(), None);

        let config = AppConfig::empty();
        assert_eq!(config.location_coordinates(), None);
    }
}
