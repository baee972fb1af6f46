//! JSON file message store adapter

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::{MessageStore, MessageStoreError};
use crate::domain::messaging::{Message, MessageLog};

/// Message store backed by a single JSON file.
///
/// The whole log is read and rewritten on every append. That is fine for
/// the message volumes a client/admin pair produces and keeps the file
/// readable by hand.
pub struct JsonMessageStore {
    path: PathBuf,
}

impl JsonMessageStore {
    /// Create a store at the default XDG data path
    pub fn new() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("~/.local/share"))
            .join("vision-voice");

        Self {
            path: data_dir.join("messages.json"),
        }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for JsonMessageStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageStore for JsonMessageStore {
    async fn load(&self) -> Result<MessageLog, MessageStoreError> {
        if !self.path.exists() {
            return Ok(MessageLog::new());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| MessageStoreError::ReadError(e.to_string()))?;

        if content.trim().is_empty() {
            return Ok(MessageLog::new());
        }

        serde_json::from_str(&content)
            .map_err(|e| MessageStoreError::ParseError(e.to_string()))
    }

    async fn append(&self, message: Message) -> Result<(), MessageStoreError> {
        // Re-read before appending so messages written by the other role
        // since our last load are kept.
        let mut log = self.load().await?;
        log.append(message);

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| MessageStoreError::WriteError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(&log)
            .map_err(|e| MessageStoreError::WriteError(e.to_string()))?;

        fs::write(&self.path, content)
            .await
            .map_err(|e| MessageStoreError::WriteError(e.to_string()))?;

        Ok(())
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::messaging::{MessageKind, Sender};

    #[test]
    fn default_path_is_xdg_data() {
        let store = JsonMessageStore::new();
        let path = store.path();
        assert!(path.to_string_lossy().contains("vision-voice"));
        assert!(path.to_string_lossy().contains("messages.json"));
    }

    #[tokio::test]
    async fn load_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonMessageStore::with_path(dir.path().join("messages.json"));

        let log = store.load().await.unwrap();
        assert!(log.is_empty());
    }

    #[tokio::test]
    async fn append_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonMessageStore::with_path(dir.path().join("messages.json"));

        store
            .append(Message::chat(Sender::Client, "hello"))
            .await
            .unwrap();
        store
            .append(Message::chat(Sender::Admin, "hi there"))
            .await
            .unwrap();

        let log = store.load().await.unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log.messages()[0].content, "hello");
        assert_eq!(log.messages()[1].sender, Sender::Admin);
    }

    #[tokio::test]
    async fn append_preserves_other_writers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("messages.json");

        let client_store = JsonMessageStore::with_path(&path);
        let admin_store = JsonMessageStore::with_path(&path);

        client_store
            .append(Message::chat(Sender::Client, "from client"))
            .await
            .unwrap();
        admin_store
            .append(Message::chat(Sender::Admin, "from admin"))
            .await
            .unwrap();

        let log = client_store.load().await.unwrap();
        assert_eq!(log.len(), 2);
    }

    #[tokio::test]
    async fn sos_kind_survives_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonMessageStore::with_path(dir.path().join("messages.json"));

        store
            .append(Message::tagged(
                Sender::Client,
                "SOS ACTIVATED! Location unavailable.",
                MessageKind::Sos,
            ))
            .await
            .unwrap();

        let log = store.load().await.unwrap();
        assert_eq!(log.messages()[0].kind, MessageKind::Sos);
    }

    #[tokio::test]
    async fn empty_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("messages.json");
        fs::write(&path, "").await.unwrap();

        let store = JsonMessageStore::with_path(&path);
        let log = store.load().await.unwrap();
        assert!(log.is_empty());
    }

    #[tokio::test]
    async fn corrupt_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("messages.json");
        fs::write(&path, "{not json").await.unwrap();

        let store = JsonMessageStore::with_path(&path);
        let err = store.load().await.unwrap_err();
        assert!(matches!(err, MessageStoreError::ParseError(_)));
    }
}
