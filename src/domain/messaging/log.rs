//! Append-only message log

use serde::{Deserialize, Serialize};

use super::{Message, Sender};

/// The conversation between client and admin, in arrival order.
///
/// Messages are only ever appended; polling readers remember how many
/// entries they have seen and ask for the tail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageLog {
    messages: Vec<Message>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    pub fn from_messages(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Latest message written by `sender`, regardless of kind.
    pub fn last_from(&self, sender: Sender) -> Option<&Message> {
        self.messages.iter().rev().find(|m| m.sender == sender)
    }

    /// Messages appended after the first `seen` entries. A log shorter than
    /// `seen` (externally reset) yields nothing.
    pub fn new_since(&self, seen: usize) -> &[Message] {
        if seen >= self.messages.len() {
            &[]
        } else {
            &self.messages[seen..]
        }
    }
}
