//! Message persistence port interface

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::messaging::{Message, MessageLog};

/// Message store errors
#[derive(Debug, Clone, Error)]
pub enum MessageStoreError {
    #[error("Failed to read message log: {0}")]
    ReadError(String),

    #[error("Failed to parse message log: {0}")]
    ParseError(String),

    #[error("Failed to write message log: {0}")]
    WriteError(String),
}

/// Port for the shared message log.
///
/// The client and admin sessions exchange messages through one log, so
/// implementations must tolerate a log that another process appends to
/// between reads.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Load the full message log. A missing log reads as empty.
    async fn load(&self) -> Result<MessageLog, MessageStoreError>;

    /// Append one message and persist the updated log.
    async fn append(&self, message: Message) -> Result<(), MessageStoreError>;

    /// Path of the backing log file
    fn path(&self) -> PathBuf;
}
