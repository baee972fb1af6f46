//! Message value objects

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who wrote a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Admin,
    Client,
    System,
}

impl Sender {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Client => "client",
            Self::System => "system",
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Message category. Plain chat omits the tag on the wire; SOS traffic is
/// tagged so the admin console can alert on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MessageKind {
    #[default]
    #[serde(rename = "chat")]
    Chat,
    #[serde(rename = "sos")]
    Sos,
    #[serde(rename = "sos-cancel")]
    SosCancel,
}

impl MessageKind {
    pub const fn is_chat(&self) -> bool {
        matches!(self, Self::Chat)
    }

    pub const fn is_sos(&self) -> bool {
        matches!(self, Self::Sos)
    }
}

/// One entry in the shared message log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type", default, skip_serializing_if = "MessageKind::is_chat")]
    pub kind: MessageKind,
}

impl Message {
    /// A plain chat message stamped with the current time
    pub fn chat(sender: Sender, content: impl Into<String>) -> Self {
        Self::tagged(sender, content, MessageKind::Chat)
    }

    /// A tagged message stamped with the current time
    pub fn tagged(sender: Sender, content: impl Into<String>, kind: MessageKind) -> Self {
        Self {
            sender,
            content: content.into(),
            timestamp: Utc::now(),
            kind,
        }
    }
}
