//! Messages command handler

use chrono::Local;

use crate::application::ports::{MessageStore, MessageStoreError};

use super::args::MessagesAction;
use super::presenter::Presenter;

/// Handle messages subcommand
pub async fn handle_messages_command<S: MessageStore>(
    action: MessagesAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), MessageStoreError> {
    match action {
        MessagesAction::List => handle_list(store, presenter).await,
        MessagesAction::Path => handle_path(store, presenter),
    }
}

async fn handle_list<S: MessageStore>(
    store: &S,
    presenter: &Presenter,
) -> Result<(), MessageStoreError> {
    let log = store.load().await?;

    if log.is_empty() {
        presenter.info("No messages yet.");
        return Ok(());
    }

    for message in log.messages() {
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

    Ok(())
}

fn handle_path<S: MessageStore>(
    store: &S,
    presenter: &Presenter,
) -> Result<(), MessageStoreError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}
