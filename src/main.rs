//! Vision Voice CLI entry point

use std::process::ExitCode;

use clap::Parser;

use vision_voice::cli::{
    admin_app::run_admin,
    app::{load_merged_config, run_describe, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands},
    client_app::run_client,
    config_cmd::handle_config_command,
    messages_cmd::handle_messages_command,
    presenter::Presenter,
};
use vision_voice::domain::config::AppConfig;
use vision_voice::domain::error::ConfigError;
use vision_voice::domain::session::{Role, UserDirectory};
use vision_voice::infrastructure::{JsonMessageStore, XdgConfigStore};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Collect the global flag overrides; GEMINI_API_KEY also lands here
    // through clap's env support.
    let cli_config = AppConfig {
        api_key: cli.api_key.clone(),
        model: cli.model.clone(),
        speech_tool: cli.speech_tool.clone(),
        voice: cli.voice.clone(),
        speech_rate: cli.speech_rate,
        poll_interval: cli.poll_interval.clone(),
        camera_device: cli.camera.clone(),
        location: None,
    };

    match cli.command {
        Commands::Config { action } => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return match e {
                    ConfigError::ValidationError { .. } => ExitCode::from(EXIT_USAGE_ERROR),
                    _ => ExitCode::from(EXIT_ERROR),
                };
            }
            ExitCode::SUCCESS
        }
        Commands::Messages { action } => {
            let store = JsonMessageStore::new();
            if let Err(e) = handle_messages_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        Commands::Describe { image } => {
            let config = load_merged_config(cli_config).await;
            run_describe(image, config).await
        }
        Commands::Run { user, password } => {
            let config = load_merged_config(cli_config).await;
            let directory = UserDirectory::with_demo_accounts();
            let account = match directory.verify(&user, &password) {
                Ok(account) => account,
                Err(e) => {
                    presenter.error(&e.to_string());
                    return ExitCode::from(EXIT_ERROR);
                }
            };
            match account.role {
                Role::Client => run_client(account, config).await,
                Role::Admin => run_admin(account, config).await,
            }
        }
    }
}
