//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, signal handling,
//! and the main application runners.

pub mod admin_app;
pub mod app;
pub mod args;
pub mod client_app;
pub mod config_cmd;
pub mod messages_cmd;
pub mod pointer;
pub mod presenter;
pub mod signals;

// Re-export commonly used types
pub use admin_app::run_admin;
pub use app::{run_describe, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, MessagesAction};
pub use client_app::run_client;
pub use config_cmd::handle_config_command;
pub use messages_cmd::handle_messages_command;
pub use presenter::Presenter;
