//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Vision Voice - gesture-driven accessibility companion
#[derive(Parser, Debug)]
#[command(name = "vision-voice")]
#[command(version = "1.0.0")]
#[command(about = "Gesture-driven accessibility companion with spoken feedback")]
#[command(long_about = None)]
pub struct Cli {
    /// Gemini API key (overrides the config file)
    #[arg(
        long,
        value_name = "KEY",
        env = "GEMINI_API_KEY",
        hide_env_values = true,
        global = true
    )]
    pub api_key: Option<String>,

    /// Gemini model name
    #[arg(long, value_name = "MODEL", global = true)]
    pub model: Option<String>,

    /// Speech tool (auto, spd-say, espeak-ng, say)
    #[arg(long, value_name = "TOOL", global = true)]
    pub speech_tool: Option<String>,

    /// Voice passed to the speech tool
    #[arg(long, value_name = "VOICE", global = true)]
    pub voice: Option<String>,

    /// Speech rate multiplier (1.0 = normal)
    #[arg(long, value_name = "RATE", global = true)]
    pub speech_rate: Option<f64>,

    /// Camera device for scene capture
    #[arg(long, value_name = "DEVICE", global = true)]
    pub camera: Option<String>,

    /// Message poll interval (e.g. 2s, 1m)
    #[arg(long, value_name = "TIME", global = true)]
    pub poll_interval: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and run the gesture session for an account
    Run {
        /// Username to log in as
        #[arg(short, long)]
        user: String,

        /// Password for the account
        #[arg(short, long)]
        password: String,
    },
    /// Capture one frame and speak a scene description
    Describe {
        /// Describe a still image file instead of the camera
        #[arg(short, long, value_name = "PATH")]
        image: Option<PathBuf>,
    },
    /// Inspect the shared message log
    Messages {
        #[command(subcommand)]
        action: MessagesAction,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Message log inspection actions
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum MessagesAction {
    /// Print the full message log
    List,
    /// Show the message log file path
    Path,
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "api_key",
    "model",
    "speech_tool",
    "voice",
    "speech_rate",
    "poll_interval",
    "camera_device",
    "location.latitude",
    "location.longitude",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_run() {
        let cli = Cli::parse_from(["vision-voice", "run", "-u", "user", "-p", "user123"]);
        if let Commands::Run { user, password } = cli.command {
            assert_eq!(user, "user");
            assert_eq!(password, "user123");
        } else {
            panic!("Expected Run command");
        }
    }

    #[test]
    fn cli_parses_describe_with_image() {
        let cli = Cli::parse_from(["vision-voice", "describe", "--image", "/tmp/photo.jpg"]);
        if let Commands::Describe { image } = cli.command {
            assert_eq!(image, Some(PathBuf::from("/tmp/photo.jpg")));
        } else {
            panic!("Expected Describe command");
        }
    }

    #[test]
    fn cli_parses_describe_without_image() {
        let cli = Cli::parse_from(["vision-voice", "describe"]);
        assert!(matches!(cli.command, Commands::Describe { image: None }));
    }

    #[test]
    fn cli_parses_global_overrides_after_subcommand() {
        let cli = Cli::parse_from([
            "vision-voice",
            "describe",
            "--speech-tool",
            "espeak-ng",
            "--speech-rate",
            "1.5",
        ]);
        assert_eq!(cli.speech_tool, Some("espeak-ng".to_string()));
        assert_eq!(cli.speech_rate, Some(1.5));
    }

    #[test]
    fn cli_parses_camera_override() {
        let cli = Cli::parse_from(["vision-voice", "describe", "--camera", "/dev/video2"]);
        assert_eq!(cli.camera, Some("/dev/video2".to_string()));
    }

    #[test]
    fn cli_parses_messages_list() {
        let cli = Cli::parse_from(["vision-voice", "messages", "list"]);
        assert!(matches!(
            cli.command,
            Commands::Messages {
                action: MessagesAction::List
            }
        ));
    }

    #[test]
    fn cli_parses_config_init() {
        let cli = Cli::parse_from(["vision-voice", "config", "init"]);
        assert!(matches!(
            cli.command,
            Commands::Config {
                action: ConfigAction::Init
            }
        ));
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["vision-voice", "config", "set", "model", "gemini-1.5-flash"]);
        if let Commands::Config {
            action: ConfigAction::Set { key, value },
        } = cli.command
        {
            assert_eq!(key, "model");
            assert_eq!(value, "gemini-1.5-flash");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("api_key"));
        assert!(is_valid_config_key("speech_tool"));
        assert!(is_valid_config_key("location.latitude"));
        assert!(!is_valid_config_key("invalid_key"));
        assert!(!is_valid_config_key("location"));
    }

    #[test]
    fn verify_cli() {
        // Verify the CLI definition is valid
        Cli::command().debug_assert();
    }
}
