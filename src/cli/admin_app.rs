//! Interactive console for the admin user
//!
//! A plain line-oriented console: cooked-mode stdin for composing
//! replies, a poll loop printing what the client sends, and desktop
//! notifications for SOS traffic so an unattended console still alerts.

use std::process::ExitCode;

use chrono::Local;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::application::ports::{FeedbackLevel, FeedbackPanel};
use crate::application::MessagingUseCase;
use crate::domain::config::AppConfig;
use crate::domain::messaging::{Message, MessageKind, Sender};
use crate::domain::session::{ScreenFlow, UserAccount};
use crate::infrastructure::{DesktopFeedbackPanel, JsonMessageStore, SilentAnnouncer};

use super::app::{EXIT_ERROR, EXIT_SUCCESS};
use super::presenter::Presenter;
use super::signals::TerminateSignal;

/// Greeting seeded into an empty log on first admin login.
const WELCOME_MESSAGE: &str = "Welcome to Vision Voice! How can I help you today?";

/// Run the admin console until EOF, Ctrl+C, or SIGTERM.
pub async fn run_admin(account: UserAccount, config: AppConfig) -> ExitCode {
    let presenter = Presenter::new();

    let mut terminate = match TerminateSignal::new() {
        Ok(signal) => signal,
        Err(e) => {
            presenter.error(&format!("Failed to install signal handlers: {}", e));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let messaging = MessagingUseCase::new(
        JsonMessageStore::new(),
        SilentAnnouncer::new(),
        DesktopFeedbackPanel::new(),
    );
    let alerts = DesktopFeedbackPanel::new();

    let mut flow = ScreenFlow::new();
    if let Err(e) = flow.login(account.role) {
        presenter.error(&e.to_string());
        return ExitCode::from(EXIT_ERROR);
    }

    presenter.success(&format!("Logged in as {} (admin).", account.username));

    let mut history = match messaging.history().await {
        Ok(log) => log,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if history.is_empty() {
        if let Err(e) = messaging.send(Sender::Admin, WELCOME_MESSAGE).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        history = match messaging.history().await {
            Ok(log) => log,
            Err(e) => {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
        };
    }

    for message in history.messages() {
        print_message(&presenter, message);
    }

    presenter.info("Type a message and press Enter to send. Ctrl+C to quit.");
    presenter.output_inline("> ");

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    let mut poll = tokio::time::interval(config.poll_interval_or_default().as_std());

    let code = loop {
        tokio::select! {
            maybe_line = lines.next_line() => {
                match maybe_line {
                    Ok(Some(line)) => {
                        let text = line.trim();
                        if !text.is_empty() {
                            if let Err(e) = messaging.send(Sender::Admin, text).await {
                                presenter.error(&format!("Failed to send: {}", e));
                            }
                        }
                        presenter.output_inline("> ");
                    }
                    Ok(None) => break EXIT_SUCCESS,
                    Err(e) => {
                        presenter.error(&format!("Failed to read input: {}", e));
                        break EXIT_ERROR;
                    }
                }
            }
            _ = poll.tick() => {
                match messaging.poll_new().await {
                    Ok(fresh) => {
                        let mut printed = false;
                        for message in &fresh {
                            if message.sender != Sender::Client {
                                continue;
                            }
                            if !printed {
                                // Break out of the pending prompt line.
                                presenter.output("");
                                printed = true;
                            }
                            print_message(&presenter, message);
                            match message.kind {
                                MessageKind::Sos => {
                                    let _ = alerts
                                        .show(&message.content, FeedbackLevel::Alert)
                                        .await;
                                }
                                MessageKind::SosCancel => {
                                    presenter.warn("Client cancelled SOS.");
                                }
                                MessageKind::Chat => {}
                            }
                        }
                        if printed {
                            presenter.output_inline("> ");
                        }
                    }
                    Err(e) => {
                        presenter.warn(&format!("Could not read new messages: {}", e));
                    }
                }
            }
            _ = terminate.recv() => break EXIT_SUCCESS,
        }
    };

    presenter.output("");
    ExitCode::from(code)
}

fn print_message(presenter: &Presenter, message: &Message) {
    let timestamp = message
        .timestamp
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string();
    presenter.message_line(
        &timestamp,
        message.sender.as_str(),
        &message.content,
        message.kind.is_sos(),
    );
}
