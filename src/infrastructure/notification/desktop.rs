//! Desktop notification feedback adapter using notify-rust
//!
//! Works on Windows, macOS, and Linux.

use async_trait::async_trait;

use crate::application::ports::{FeedbackError, FeedbackLevel, FeedbackPanel};

/// Desktop notification panel using notify-rust
pub struct DesktopFeedbackPanel {
    /// Application name for notifications
    app_name: String,
}

impl DesktopFeedbackPanel {
    /// Create a new desktop feedback panel
    pub fn new() -> Self {
        Self {
            app_name: "Vision Voice".to_string(),
        }
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }

    fn icon_name(level: FeedbackLevel) -> &'static str {
        match level {
            FeedbackLevel::Info => "dialog-information",
            FeedbackLevel::Alert => "dialog-warning",
        }
    }
}

impl Default for DesktopFeedbackPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FeedbackPanel for DesktopFeedbackPanel {
    async fn show(&self, message: &str, level: FeedbackLevel) -> Result<(), FeedbackError> {
        let message = message.to_owned();
        let app_name = self.app_name.clone();
        let icon = Self::icon_name(level);

        // notify-rust operations can block, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            notify_rust::Notification::new()
                .appname(&app_name)
                .summary(&app_name)
                .body(&message)
                .icon(icon)
                .show()
                .map_err(|e| FeedbackError::DisplayFailed(e.to_string()))?;

            Ok(())
        })
        .await
        .map_err(|e| FeedbackError::DisplayFailed(format!("Task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_creates_successfully() {
        let _panel = DesktopFeedbackPanel::new();
    }

    #[test]
    fn panel_with_custom_app_name() {
        let panel = DesktopFeedbackPanel::with_app_name("TestApp");
        assert_eq!(panel.app_name, "TestApp");
    }

    #[test]
    fn alert_level_maps_to_warning_icon() {
        assert_eq!(
            DesktopFeedbackPanel::icon_name(FeedbackLevel::Alert),
            "dialog-warning"
        );
        assert_eq!(
            DesktopFeedbackPanel::icon_name(FeedbackLevel::Info),
            "dialog-information"
        );
    }
}
